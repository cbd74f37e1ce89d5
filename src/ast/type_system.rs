//! AST nodes for the GraphQL type-system definition language.
//!
//! These nodes cover what a schema dump contains: the `schema` block, type definitions, and
//! directive definitions. Like the query-language nodes in [`ast`](super), all sequences are
//! ordered and allocated on an [`ASTContext`](super::ASTContext) arena, and declaration order is
//! preserved verbatim when printing.
//!
//! [Reference](https://spec.graphql.org/October2021/#sec-Type-System)

use super::ast::{
    with_directives, Directives, EnumValue, NamedType, OperationKind, StringValue, Type, Value,
    WithDirectives,
};

/// AST Node for a Schema Definition, which names the root operation types of a schema.
///
/// Schemas that use the conventional root type names `Query`, `Mutation`, and `Subscription`
/// don't need an explicit `schema` block, and one that only restates them prints as nothing.
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SchemaDefinition<'a> {
    /// An optional description of the schema. Descriptions are carried in the AST but are never
    /// printed at this version.
    pub description: Option<StringValue<'a>>,
    pub query_root: Option<NamedType<'a>>,
    pub mutation_root: Option<NamedType<'a>>,
    pub subscription_root: Option<NamedType<'a>>,
}

impl<'a> SchemaDefinition<'a> {
    /// The root type names in keyword order, paired with their operation kind.
    #[inline]
    pub fn roots(&self) -> [(OperationKind, Option<NamedType<'a>>); 3] {
        [
            (OperationKind::Query, self.query_root),
            (OperationKind::Mutation, self.mutation_root),
            (OperationKind::Subscription, self.subscription_root),
        ]
    }

    /// Checks whether every present root type carries its conventional default name.
    ///
    /// Such a schema definition is redundant and is suppressed entirely when printing.
    pub fn uses_default_roots(&self) -> bool {
        self.roots().iter().all(|(operation, root)| match root {
            None => true,
            Some(root) => root.name == operation.default_root_name(),
        })
    }
}

/// AST Node for a Scalar Type Definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars)
#[derive(Debug, PartialEq, Clone)]
pub struct ScalarTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
}

/// AST Node for an Object Type Definition.
///
/// The interface list and the field definitions keep their declaration order.
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    /// The interfaces this object type implements. Empty when the type implements none, as can
    /// be checked with `is_empty`.
    pub interfaces: bumpalo::collections::Vec<'a, NamedType<'a>>,
    pub directives: Directives<'a>,
    pub fields: FieldDefinitions<'a>,
}

/// AST Node for an Interface Type Definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Interfaces)
#[derive(Debug, PartialEq, Clone)]
pub struct InterfaceTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub fields: FieldDefinitions<'a>,
}

/// AST Node for a Union Type Definition, which lists its member types in declaration order.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Unions)
#[derive(Debug, PartialEq, Clone)]
pub struct UnionTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub types: bumpalo::collections::Vec<'a, NamedType<'a>>,
}

/// AST Node for an Enum Type Definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enums)
#[derive(Debug, PartialEq, Clone)]
pub struct EnumTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub values: EnumValueDefinitions<'a>,
}

/// AST Node for a single value of an [`EnumTypeDefinition`].
#[derive(Debug, PartialEq, Clone)]
pub struct EnumValueDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub value: EnumValue<'a>,
    pub directives: Directives<'a>,
}

/// AST Node for the list of values of an [`EnumTypeDefinition`].
#[derive(Debug, PartialEq, Clone)]
pub struct EnumValueDefinitions<'a> {
    pub children: bumpalo::collections::Vec<'a, EnumValueDefinition<'a>>,
}

impl<'a> EnumValueDefinitions<'a> {
    /// Checks whether this list contains any enum value definitions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for an Input Object Type Definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Objects)
#[derive(Debug, PartialEq, Clone)]
pub struct InputObjectTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub fields: InputValueDefinitions<'a>,
}

/// AST Node for a Field Definition, as owned by object and interface type definitions.
///
/// [Reference](https://spec.graphql.org/October2021/#FieldDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct FieldDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    /// The field's argument definitions. Empty when the field accepts no arguments, in which
    /// case no parentheses are printed.
    pub arguments: InputValueDefinitions<'a>,
    /// The field's output type reference.
    pub of_type: Type<'a>,
    pub directives: Directives<'a>,
}

/// AST Node for a list of Field Definitions, enclosed by braces when printed.
#[derive(Debug, PartialEq, Clone)]
pub struct FieldDefinitions<'a> {
    pub children: bumpalo::collections::Vec<'a, FieldDefinition<'a>>,
}

impl<'a> FieldDefinitions<'a> {
    /// Checks whether this list contains any field definitions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for an Input Value Definition, which defines an input field or an argument.
///
/// [Reference](https://spec.graphql.org/October2021/#InputValueDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct InputValueDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    /// The input value's type reference.
    pub of_type: Type<'a>,
    /// The default value for this input. When no default is declared this property is set to
    /// `Value::Null` and no ` = default` clause is printed.
    pub default_value: Value<'a>,
    pub directives: Directives<'a>,
}

/// AST Node for a list of Input Value Definitions.
///
/// As the fields of an [`InputObjectTypeDefinition`] these print as a brace block; as the
/// arguments of a [`FieldDefinition`] or [`DirectiveDefinition`] they print as a parenthesized,
/// comma-joined list.
#[derive(Debug, PartialEq, Clone)]
pub struct InputValueDefinitions<'a> {
    pub children: bumpalo::collections::Vec<'a, InputValueDefinition<'a>>,
}

impl<'a> InputValueDefinitions<'a> {
    /// Checks whether this list contains any input value definitions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for a Directive Definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-System.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct DirectiveDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    /// The directive's name, without the `@` prefix.
    pub name: &'a str,
    pub arguments: InputValueDefinitions<'a>,
    /// The locations this directive may be applied to, in declaration order.
    pub locations: bumpalo::collections::Vec<'a, DirectiveLocation>,
}

/// The locations a directive may be applied to, as listed by a [`DirectiveDefinition`].
///
/// [Reference](https://spec.graphql.org/October2021/#DirectiveLocation)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    /// The location's name as it appears in a directive definition.
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }
}

/// AST Node for a type-system definition inside a document.
///
/// [Reference](https://spec.graphql.org/October2021/#TypeSystemDefinition)
#[derive(Debug, PartialEq, Clone)]
pub enum TypeSystemDefinition<'a> {
    Schema(SchemaDefinition<'a>),
    Scalar(ScalarTypeDefinition<'a>),
    Object(ObjectTypeDefinition<'a>),
    Interface(InterfaceTypeDefinition<'a>),
    Union(UnionTypeDefinition<'a>),
    Enum(EnumTypeDefinition<'a>),
    InputObject(InputObjectTypeDefinition<'a>),
    Directive(DirectiveDefinition<'a>),
}

impl<'a> TypeSystemDefinition<'a> {
    /// The name of the definition, or `None` for the anonymous `schema` block.
    pub fn name(&self) -> Option<&'a str> {
        match self {
            TypeSystemDefinition::Schema(_) => None,
            TypeSystemDefinition::Scalar(scalar) => Some(scalar.name),
            TypeSystemDefinition::Object(object) => Some(object.name),
            TypeSystemDefinition::Interface(interface) => Some(interface.name),
            TypeSystemDefinition::Union(union) => Some(union.name),
            TypeSystemDefinition::Enum(r#enum) => Some(r#enum.name),
            TypeSystemDefinition::InputObject(input) => Some(input.name),
            TypeSystemDefinition::Directive(directive) => Some(directive.name),
        }
    }

    /// The description attached to the definition, carried but never printed at this version.
    pub fn description(&self) -> Option<StringValue<'a>> {
        match self {
            TypeSystemDefinition::Schema(schema) => schema.description,
            TypeSystemDefinition::Scalar(scalar) => scalar.description,
            TypeSystemDefinition::Object(object) => object.description,
            TypeSystemDefinition::Interface(interface) => interface.description,
            TypeSystemDefinition::Union(union) => union.description,
            TypeSystemDefinition::Enum(r#enum) => r#enum.description,
            TypeSystemDefinition::InputObject(input) => input.description,
            TypeSystemDefinition::Directive(directive) => directive.description,
        }
    }
}

with_directives!(
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition
);
