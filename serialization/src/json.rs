//! Entry points between JSON text / trees and models.

use serde_json::Value;

use crate::error::SerializationError;
use crate::field_value::FieldValue;
use crate::parse_node::{kind_of, ParseNode};

pub fn from_value<T: FieldValue>(value: &Value) -> Result<T, SerializationError> {
    T::read(&ParseNode::new(value))?.ok_or(SerializationError::TypeMismatch {
        expected: "value",
        found: kind_of(value),
    })
}

pub fn from_str<T: FieldValue>(input: &str) -> Result<T, SerializationError> {
    let value: Value = serde_json::from_str(input)?;
    from_value(&value)
}

pub fn from_slice<T: FieldValue>(input: &[u8]) -> Result<T, SerializationError> {
    let value: Value = serde_json::from_slice(input)?;
    from_value(&value)
}

pub fn to_value<T: FieldValue>(value: &T) -> Result<Value, SerializationError> {
    value.to_json()
}

pub fn to_string<T: FieldValue>(value: &T) -> Result<String, SerializationError> {
    Ok(serde_json::to_string(&value.to_json()?)?)
}

pub fn to_string_pretty<T: FieldValue>(value: &T) -> Result<String, SerializationError> {
    Ok(serde_json::to_string_pretty(&value.to_json()?)?)
}
