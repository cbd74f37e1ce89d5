//! # JSON conversion for GraphQL values
//!
//! The `graphql_print::json` module converts GraphQL value nodes into JSON. Static GraphQL
//! values map onto JSON directly, while a [`Variable`](crate::ast::Variable) has no JSON
//! representation and converting one is an error.
//!
//! This module is only available when the `json` feature is enabled, which it is by default.

use crate::ast::{ListValue, ObjectValue, Value};
use crate::error::{Error, ErrorType, Result};
use serde::ser::{Error as SerdeError, Serialize, Serializer};
use serde_json::{Map, Number, Value as JsValue};

/// Trait for converting value nodes to [`serde_json::Value`] representations.
pub trait ValueToJson {
    /// Converts this node to a [`serde_json::Value`].
    ///
    /// This fails with a [`ErrorType::TypeMismatch`] error when the value contains a variable,
    /// since variables carry no value until they're resolved against an execution request.
    fn to_json(&self) -> Result<JsValue>;
}

impl<'a> ValueToJson for Value<'a> {
    fn to_json(&self) -> Result<JsValue> {
        match self {
            Value::Null => Ok(JsValue::Null),
            Value::Boolean(boolean) => Ok(JsValue::Bool(boolean.value)),
            Value::String(string) => Ok(JsValue::String(string.value.to_string())),
            Value::Enum(r#enum) => Ok(JsValue::String(r#enum.value.to_string())),
            // Numbers keep their source text when it doesn't fit a JSON number, instead of
            // silently re-rounding.
            Value::Int(int) => Ok(match int.value.parse::<i64>() {
                Ok(int) => JsValue::Number(Number::from(int)),
                Err(_) => JsValue::String(int.value.to_string()),
            }),
            Value::Float(float) => Ok(
                match float.value.parse::<f64>().ok().and_then(Number::from_f64) {
                    Some(float) => JsValue::Number(float),
                    None => JsValue::String(float.value.to_string()),
                },
            ),
            Value::List(list) => list.to_json(),
            Value::Object(object) => object.to_json(),
            Value::Variable(variable) => Err(Error::new(
                format!("Cannot convert variable ${} to JSON", variable.name),
                Some(ErrorType::TypeMismatch),
            )),
        }
    }
}

impl<'a> ValueToJson for ListValue<'a> {
    fn to_json(&self) -> Result<JsValue> {
        let mut list = Vec::with_capacity(self.children.len());
        for value in self.children.iter() {
            list.push(value.to_json()?);
        }
        Ok(JsValue::Array(list))
    }
}

impl<'a> ValueToJson for ObjectValue<'a> {
    fn to_json(&self) -> Result<JsValue> {
        let mut map = Map::with_capacity(self.children.len());
        for field in self.children.iter() {
            map.insert(field.name.to_string(), field.value.to_json()?);
        }
        Ok(JsValue::Object(map))
    }
}

impl<'a> Serialize for Value<'a> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(boolean) => serializer.serialize_bool(boolean.value),
            Value::String(string) => serializer.serialize_str(string.value),
            Value::Enum(r#enum) => serializer.serialize_str(r#enum.value),
            Value::Int(int) => match int.value.parse::<i64>() {
                Ok(int) => serializer.serialize_i64(int),
                Err(_) => serializer.serialize_str(int.value),
            },
            Value::Float(float) => match float.value.parse::<f64>() {
                Ok(float) if float.is_finite() => serializer.serialize_f64(float),
                _ => serializer.serialize_str(float.value),
            },
            Value::List(list) => serializer.collect_seq(list.children.iter()),
            Value::Object(object) => {
                serializer.collect_map(object.children.iter().map(|field| (field.name, &field.value)))
            }
            Value::Variable(variable) => Err(S::Error::custom(format!(
                "Cannot convert variable ${} to JSON",
                variable.name
            ))),
        }
    }
}
