use super::ast::*;
use super::type_system::*;
use std::{fmt, fmt::Write};

/// Trait for printing AST Nodes to a new String allocated on the heap.
/// This is implemented by all AST Nodes and can hence be used to granularly print GraphQL
/// language. However, mostly this will be used via `Document::print`.
///
/// Printing is deterministic: the same tree always produces byte-identical output, which makes
/// the output suitable for query-signature caching. Nodes are never mutated while printing.
///
/// For convenience when debugging, AST Nodes that implement `PrintNode` also automatically
/// implement the [`fmt::Display`] trait.
pub trait PrintNode {
    /// Write an AST node to a buffer implementing the [Write] trait.
    ///
    /// The `level` indicates the level of nesting, which increases with each [`SelectionSet`]
    /// or type-definition block and is typically initialized as zero (`0`). Each level is two
    /// spaces of indentation.
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result;

    /// Print an AST Node to source text as a String allocated on the heap.
    ///
    /// For convenience when debugging, AST Nodes that implement `PrintNode` also automatically
    /// implement the [`fmt::Display`] trait.
    fn print(&self) -> String {
        let mut buf = String::new();
        match self.write_to_buffer(0, &mut buf) {
            Ok(()) => buf,
            _ => "".to_string(),
        }
    }
}

impl fmt::Display for dyn PrintNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to_buffer(0, f)
    }
}

impl<'a> PrintNode for NamedType<'a> {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.name)
    }
}

impl<'a> PrintNode for Variable<'a> {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "${}", self.name)
    }
}

impl PrintNode for BooleanValue {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self.value {
            true => buffer.write_str("true"),
            false => buffer.write_str("false"),
        }
    }
}

impl<'a> PrintNode for EnumValue<'a> {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.value)
    }
}

impl<'a> PrintNode for FloatValue<'a> {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.value)
    }
}

impl<'a> PrintNode for IntValue<'a> {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.value)
    }
}

impl<'a> PrintNode for StringValue<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        use lexical_core::*;
        let mut buf = [b'0'; u32::FORMATTED_SIZE];

        // See: https://github.com/graphql-rust/graphql-parser/blob/ff34bae/src/format.rs#L127-L167
        if !self.is_block() {
            buffer.write_char('"')?;
            for c in self.value.chars() {
                match c {
                    '\r' => buffer.write_str(r"\r")?,
                    '\n' => buffer.write_str(r"\n")?,
                    '\t' => buffer.write_str(r"\t")?,
                    '"' => buffer.write_str("\\\"")?,
                    '\\' => buffer.write_str(r"\\")?,
                    // Only control characters are escaped; everything else, including
                    // supplementary-plane characters, passes through verbatim so that string
                    // content survives a round-trip.
                    '\u{0020}'..='\u{10FFFF}' => buffer.write_char(c)?,
                    _ => unsafe {
                        const FORMAT: u128 = NumberFormatBuilder::hexadecimal();
                        const OPTIONS: WriteIntegerOptions = WriteIntegerOptions::new();
                        let buf =
                            write_with_options_unchecked::<_, FORMAT>(c as u32, &mut buf, &OPTIONS);
                        write!(buffer, "\\u{:0>4}", std::str::from_utf8_unchecked(buf))?;
                    },
                };
            }
            buffer.write_char('"')
        } else {
            buffer.write_str("\"\"\"\n")?;
            for line in self.value.lines() {
                if !line.trim().is_empty() {
                    write_indent(level, buffer)?;
                    buffer.write_str(&line.replace(r#"""""#, r#"\""""#))?;
                }
                buffer.write_char('\n')?;
            }
            write_indent(level, buffer)?;
            buffer.write_str("\"\"\"")
        }
    }
}

impl<'a> PrintNode for Value<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Value::Boolean(value) => value.write_to_buffer(level, buffer),
            Value::Enum(value) => value.write_to_buffer(level, buffer),
            Value::Float(value) => value.write_to_buffer(level, buffer),
            Value::Int(value) => value.write_to_buffer(level, buffer),
            Value::String(value) => value.write_to_buffer(level, buffer),
            Value::Variable(value) => value.write_to_buffer(level, buffer),
            Value::Object(value) => value.write_to_buffer(level, buffer),
            Value::List(value) => value.write_to_buffer(level, buffer),
            Value::Null => buffer.write_str("null"),
        }
    }
}

impl<'a> PrintNode for ObjectField<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "{}: ", self.name)?;
        self.value.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for ObjectValue<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("{")?;
        write_comma_separated(&self.children, level, buffer)?;
        buffer.write_str("}")
    }
}

impl<'a> PrintNode for ListValue<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("[")?;
        write_comma_separated(&self.children, level, buffer)?;
        buffer.write_str("]")
    }
}

impl<'a> PrintNode for Argument<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "{}: ", self.name)?;
        self.value.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for Arguments<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if !self.is_empty() {
            buffer.write_str("(")?;
            write_comma_separated(&self.children, level, buffer)?;
            buffer.write_str(")")
        } else {
            Ok(())
        }
    }
}

impl<'a> PrintNode for Directive<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "@{}", self.name)?;
        self.arguments.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for Directives<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        for directive in self.children.iter() {
            buffer.write_str(" ")?;
            directive.write_to_buffer(level, buffer)?;
        }
        Ok(())
    }
}

impl<'a> PrintNode for SelectionSet<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if !self.is_empty() {
            let level = level + 1;
            buffer.write_str("{")?;
            for selection in self.selections.iter() {
                buffer.write_char('\n')?;
                write_indent(level, buffer)?;
                selection.write_to_buffer(level, buffer)?;
            }
            buffer.write_char('\n')?;
            write_indent(level - 1, buffer)?;
            buffer.write_char('}')
        } else {
            Ok(())
        }
    }
}

impl<'a> PrintNode for Selection<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Selection::Field(field) => field.write_to_buffer(level, buffer),
            Selection::FragmentSpread(spread) => spread.write_to_buffer(level, buffer),
            Selection::InlineFragment(inline) => inline.write_to_buffer(level, buffer),
        }
    }
}

impl<'a> PrintNode for Field<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if let Some(alias) = self.alias {
            write!(buffer, "{}: {}", alias, self.name)?;
        } else {
            buffer.write_str(self.name)?;
        };
        self.arguments.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)?;
        if !self.selection_set.is_empty() {
            buffer.write_str(" ")?;
        };
        self.selection_set.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for FragmentSpread<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("...")?;
        self.name.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for InlineFragment<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("...")?;
        if let Some(name) = &self.type_condition {
            buffer.write_str(" on ")?;
            name.write_to_buffer(level, buffer)?;
        };
        self.directives.write_to_buffer(level, buffer)?;
        if !self.selection_set.is_empty() {
            buffer.write_str(" ")?;
        };
        self.selection_set.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for Type<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Type::NamedType(name) => name.write_to_buffer(level, buffer),
            Type::ListType(inner) => {
                buffer.write_str("[")?;
                inner.write_to_buffer(level, buffer)?;
                buffer.write_str("]")
            }
            Type::NonNullType(inner) => {
                inner.write_to_buffer(level, buffer)?;
                buffer.write_str("!")
            }
        }
    }
}

impl<'a> PrintNode for VariableDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        self.variable.write_to_buffer(level, buffer)?;
        buffer.write_str(": ")?;
        self.of_type.write_to_buffer(level, buffer)?;
        if self.default_value != Value::Null {
            buffer.write_str(" = ")?;
            self.default_value.write_to_buffer(level, buffer)?;
        }
        self.directives.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for VariableDefinitions<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if !self.is_empty() {
            buffer.write_str("(")?;
            write_comma_separated(&self.children, level, buffer)?;
            buffer.write_str(")")
        } else {
            Ok(())
        }
    }
}

impl<'a> PrintNode for FragmentDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("fragment ")?;
        self.name.write_to_buffer(level, buffer)?;
        buffer.write_str(" on ")?;
        self.type_condition.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)?;
        if !self.selection_set.is_empty() {
            buffer.write_str(" ")?;
        };
        self.selection_set.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for OperationDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.operation.as_str())?;
        if let Some(name) = &self.name {
            buffer.write_str(" ")?;
            name.write_to_buffer(level, buffer)?;
        };
        if self.name.is_none() && !self.variable_definitions.is_empty() {
            buffer.write_str(" ")?;
        }
        self.variable_definitions.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)?;
        if !self.selection_set.is_empty() {
            buffer.write_str(" ")?;
        };
        self.selection_set.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for SchemaDefinition<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        // A schema block that only restates the conventional root type names is redundant
        // and prints as nothing, also when printed standalone.
        if self.uses_default_roots() {
            return Ok(());
        }
        write_description(&self.description, level, buffer)?;
        buffer.write_str("schema {")?;
        for (operation, root) in self.roots() {
            if let Some(root) = root {
                buffer.write_char('\n')?;
                write_indent(level + 1, buffer)?;
                write!(buffer, "{}: {}", operation.as_str(), root.name)?;
            }
        }
        buffer.write_char('\n')?;
        write_indent(level, buffer)?;
        buffer.write_char('}')
    }
}

impl<'a> PrintNode for ScalarTypeDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        write!(buffer, "scalar {}", self.name)?;
        self.directives.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for ObjectTypeDefinition<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        write!(buffer, "type {}", self.name)?;
        self.directives.write_to_buffer(level, buffer)?;
        if !self.interfaces.is_empty() {
            buffer.write_str(" implements ")?;
            write_comma_separated(&self.interfaces, level, buffer)?;
        }
        write_definition_block(&self.fields.children, level, buffer)
    }
}

impl<'a> PrintNode for InterfaceTypeDefinition<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        write!(buffer, "interface {}", self.name)?;
        self.directives.write_to_buffer(level, buffer)?;
        write_definition_block(&self.fields.children, level, buffer)
    }
}

impl<'a> PrintNode for UnionTypeDefinition<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        write!(buffer, "union {}", self.name)?;
        self.directives.write_to_buffer(level, buffer)?;
        if !self.types.is_empty() {
            buffer.write_str(" = ")?;
            write_pipe_separated(&self.types, level, buffer)?;
        }
        Ok(())
    }
}

impl<'a> PrintNode for EnumTypeDefinition<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        write!(buffer, "enum {}", self.name)?;
        self.directives.write_to_buffer(level, buffer)?;
        write_definition_block(&self.values.children, level, buffer)
    }
}

impl<'a> PrintNode for EnumValueDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        self.value.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for InputObjectTypeDefinition<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        write!(buffer, "input {}", self.name)?;
        self.directives.write_to_buffer(level, buffer)?;
        write_definition_block(&self.fields.children, level, buffer)
    }
}

impl<'a> PrintNode for FieldDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        buffer.write_str(self.name)?;
        self.arguments.write_to_buffer(level, buffer)?;
        buffer.write_str(": ")?;
        self.of_type.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for InputValueDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        write!(buffer, "{}: ", self.name)?;
        self.of_type.write_to_buffer(level, buffer)?;
        if self.default_value != Value::Null {
            buffer.write_str(" = ")?;
            self.default_value.write_to_buffer(level, buffer)?;
        }
        self.directives.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for InputValueDefinitions<'a> {
    /// The parenthesized argument-definition form, as carried by [`FieldDefinition`] and
    /// [`DirectiveDefinition`]. As the fields of an input object type the children are printed
    /// as a block instead.
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if !self.is_empty() {
            buffer.write_str("(")?;
            write_comma_separated(&self.children, level, buffer)?;
            buffer.write_str(")")
        } else {
            Ok(())
        }
    }
}

impl<'a> PrintNode for DirectiveDefinition<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        write!(buffer, "directive @{}", self.name)?;
        self.arguments.write_to_buffer(level, buffer)?;
        buffer.write_str(" on ")?;
        write_pipe_separated(&self.locations, level, buffer)
    }
}

impl PrintNode for DirectiveLocation {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.as_str())
    }
}

impl<'a> PrintNode for TypeSystemDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            TypeSystemDefinition::Schema(schema) => schema.write_to_buffer(level, buffer),
            TypeSystemDefinition::Scalar(scalar) => scalar.write_to_buffer(level, buffer),
            TypeSystemDefinition::Object(object) => object.write_to_buffer(level, buffer),
            TypeSystemDefinition::Interface(interface) => interface.write_to_buffer(level, buffer),
            TypeSystemDefinition::Union(union) => union.write_to_buffer(level, buffer),
            TypeSystemDefinition::Enum(r#enum) => r#enum.write_to_buffer(level, buffer),
            TypeSystemDefinition::InputObject(input) => input.write_to_buffer(level, buffer),
            TypeSystemDefinition::Directive(directive) => directive.write_to_buffer(level, buffer),
        }
    }
}

impl<'a> PrintNode for Definition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Definition::Operation(operation) => operation.write_to_buffer(level, buffer),
            Definition::Fragment(fragment) => fragment.write_to_buffer(level, buffer),
            Definition::TypeSystem(definition) => definition.write_to_buffer(level, buffer),
        }
    }
}

impl<'a> PrintNode for Document<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        let mut first = true;
        for definition in self.definitions.iter() {
            // Suppressed schema definitions print as nothing and must not leave stray
            // blank lines between their neighbours.
            if is_suppressed(definition) {
                continue;
            }
            if first {
                first = false;
            } else {
                buffer.write_str("\n\n")?;
            }
            definition.write_to_buffer(level, buffer)?;
        }
        Ok(())
    }

    #[inline]
    fn print(&self) -> String {
        let mut buf = String::with_capacity(self.size_hint);
        match self.write_to_buffer(0, &mut buf) {
            Ok(()) => buf,
            _ => "".to_string(),
        }
    }
}

#[inline]
fn is_suppressed(definition: &Definition) -> bool {
    matches!(
        definition,
        Definition::TypeSystem(TypeSystemDefinition::Schema(schema))
            if schema.uses_default_roots()
    )
}

#[inline(always)]
fn write_indent(level: usize, buffer: &mut dyn Write) -> fmt::Result {
    for _ in 0..level {
        buffer.write_str("  ")?
    }
    Ok(())
}

fn write_comma_separated<T: PrintNode>(
    children: &[T],
    level: usize,
    buffer: &mut dyn Write,
) -> fmt::Result {
    let mut first = true;
    for child in children {
        if first {
            first = false;
        } else {
            buffer.write_str(", ")?;
        }
        child.write_to_buffer(level, buffer)?;
    }
    Ok(())
}

fn write_pipe_separated<T: PrintNode>(
    children: &[T],
    level: usize,
    buffer: &mut dyn Write,
) -> fmt::Result {
    let mut first = true;
    for child in children {
        if first {
            first = false;
        } else {
            buffer.write_str(" | ")?;
        }
        child.write_to_buffer(level, buffer)?;
    }
    Ok(())
}

/// Writes the brace block of a type definition. Unlike a [`SelectionSet`] the braces are always
/// emitted, also for a definition without any children.
fn write_definition_block<T: PrintNode>(
    children: &[T],
    level: usize,
    buffer: &mut dyn Write,
) -> fmt::Result {
    buffer.write_str(" {\n")?;
    for child in children {
        write_indent(level + 1, buffer)?;
        child.write_to_buffer(level + 1, buffer)?;
        buffer.write_char('\n')?;
    }
    write_indent(level, buffer)?;
    buffer.write_char('}')
}

/// Seam for a node's leading description or comment text.
///
/// Descriptions are carried by the type-system nodes but are deliberately absent from the
/// printed output at this version. Wiring description output in happens here, without touching
/// the call sites in the per-node implementations.
#[inline]
fn write_description(
    _description: &Option<StringValue>,
    _level: usize,
    _buffer: &mut dyn Write,
) -> fmt::Result {
    Ok(())
}
