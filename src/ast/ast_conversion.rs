//! Conversion and construction glue for the AST: arena-aware defaults, `From` implementations
//! for wrapping nodes into their enclosing enums, and `IntoIterator` for the sequence nodes.

use super::ast::*;
use super::type_system::*;
use bumpalo::collections::{vec::IntoIter, Vec};

/// Like [`Default`], but allocating into a given arena.
///
/// Sequence-bearing AST nodes store their children in arena-allocated vectors and hence can't
/// implement `Default` themselves.
pub trait DefaultIn<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self;
}

impl<'a, T> DefaultIn<'a> for T
where
    T: Default,
{
    fn default_in(_arena: &'a bumpalo::Bump) -> Self {
        Self::default()
    }
}

macro_rules! default_in {
    ($($for_type:ident [ $field:ident ]),+ $(,)?) => {
        $(
            impl<'a> DefaultIn<'a> for $for_type<'a> {
                fn default_in(arena: &'a bumpalo::Bump) -> Self {
                    $for_type {
                        $field: Vec::new_in(arena),
                    }
                }
            }
        )+
    };
}

default_in!(
    ListValue[children],
    ObjectValue[children],
    Arguments[children],
    Directives[children],
    VariableDefinitions[children],
    SelectionSet[selections],
    FieldDefinitions[children],
    InputValueDefinitions[children],
    EnumValueDefinitions[children],
);

impl<'a> DefaultIn<'a> for Document<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        Document {
            definitions: Vec::new_in(arena),
            size_hint: 0,
        }
    }
}

macro_rules! into_iterator {
    ($($for_type:ident [ $field:ident ] -> $item:ty),+ $(,)?) => {
        $(
            impl<'a> IntoIterator for $for_type<'a> {
                type Item = $item;
                type IntoIter = IntoIter<'a, $item>;
                #[inline]
                fn into_iter(self) -> Self::IntoIter {
                    self.$field.into_iter()
                }
            }
        )+
    };
}

into_iterator!(
    ListValue[children] -> Value<'a>,
    ObjectValue[children] -> ObjectField<'a>,
    Arguments[children] -> Argument<'a>,
    Directives[children] -> Directive<'a>,
    VariableDefinitions[children] -> VariableDefinition<'a>,
    SelectionSet[selections] -> Selection<'a>,
    FieldDefinitions[children] -> FieldDefinition<'a>,
    InputValueDefinitions[children] -> InputValueDefinition<'a>,
    EnumValueDefinitions[children] -> EnumValueDefinition<'a>,
);

impl<'a> From<&'a str> for NamedType<'a> {
    #[inline]
    fn from(name: &'a str) -> Self {
        NamedType { name }
    }
}

impl<'a> From<&'a str> for Variable<'a> {
    #[inline]
    fn from(name: &'a str) -> Variable<'a> {
        Variable { name }
    }
}

impl From<bool> for BooleanValue {
    #[inline]
    fn from(value: bool) -> Self {
        BooleanValue { value }
    }
}

impl<'a> From<&'a str> for StringValue<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        StringValue { value }
    }
}

macro_rules! from_variant {
    ($($into:ident :: $variant:ident ( $from:ident )),+ $(,)?) => {
        $(
            impl<'a> From<$from<'a>> for $into<'a> {
                #[inline]
                fn from(x: $from<'a>) -> Self {
                    $into::$variant(x)
                }
            }
        )+
    };
}

from_variant!(
    Value::Variable(Variable),
    Value::String(StringValue),
    Value::Float(FloatValue),
    Value::Int(IntValue),
    Value::Enum(EnumValue),
    Value::List(ListValue),
    Value::Object(ObjectValue),
    Type::NamedType(NamedType),
    Selection::Field(Field),
    Selection::FragmentSpread(FragmentSpread),
    Selection::InlineFragment(InlineFragment),
    Definition::Operation(OperationDefinition),
    Definition::Fragment(FragmentDefinition),
    Definition::TypeSystem(TypeSystemDefinition),
    TypeSystemDefinition::Schema(SchemaDefinition),
    TypeSystemDefinition::Scalar(ScalarTypeDefinition),
    TypeSystemDefinition::Object(ObjectTypeDefinition),
    TypeSystemDefinition::Interface(InterfaceTypeDefinition),
    TypeSystemDefinition::Union(UnionTypeDefinition),
    TypeSystemDefinition::Enum(EnumTypeDefinition),
    TypeSystemDefinition::InputObject(InputObjectTypeDefinition),
    TypeSystemDefinition::Directive(DirectiveDefinition),
);

impl<'a> From<BooleanValue> for Value<'a> {
    #[inline]
    fn from(x: BooleanValue) -> Self {
        Value::Boolean(x)
    }
}
