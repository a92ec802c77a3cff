use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde_json::Value;

use crate::error::SerializationError;
use crate::field_value::FieldValue;
use crate::parsable::Parsable;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Read-only cursor over one node of a JSON payload.
///
/// Every typed read maps JSON `null` to `Ok(None)` and any other kind that
/// doesn't match the requested type to [`SerializationError::TypeMismatch`].
#[derive(Clone, Copy, Debug)]
pub struct ParseNode<'a> {
    value: &'a Value,
}

impl<'a> ParseNode<'a> {
    pub const fn new(value: &'a Value) -> Self {
        Self { value }
    }

    pub const fn raw(&self) -> &'a Value {
        self.value
    }

    pub const fn is_null(&self) -> bool {
        matches!(self.value, Value::Null)
    }

    /// Child property of an object node; `None` if missing or if this node is
    /// not an object.
    pub fn get_child_node(&self, name: &str) -> Option<ParseNode<'a>> {
        self.value.get(name).map(ParseNode::new)
    }

    /// Properties of an object node, in payload order.
    pub fn properties(
        &self,
    ) -> Result<impl Iterator<Item = (&'a str, ParseNode<'a>)>, SerializationError> {
        match self.value {
            Value::Object(map) => Ok(map
                .iter()
                .map(|(key, value)| (key.as_str(), ParseNode::new(value)))),
            other => Err(mismatch("object", other)),
        }
    }

    pub fn get_string_value(&self) -> Result<Option<String>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            other => Err(mismatch("string", other)),
        }
    }

    pub fn get_bool_value(&self) -> Result<Option<bool>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            other => Err(mismatch("boolean", other)),
        }
    }

    pub fn get_i32_value(&self) -> Result<Option<i32>, SerializationError> {
        self.get_i64_value()?
            .map(|v| {
                i32::try_from(v).map_err(|_| SerializationError::IntegerOutOfRange {
                    value: v.to_string(),
                    target: "int32",
                })
            })
            .transpose()
    }

    pub fn get_i64_value(&self) -> Result<Option<i64>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) if n.is_i64() => Ok(n.as_i64()),
            Value::Number(n) if n.is_u64() => Err(SerializationError::IntegerOutOfRange {
                value: n.to_string(),
                target: "int64",
            }),
            other => Err(mismatch("integer", other)),
        }
    }

    pub fn get_f64_value(&self) -> Result<Option<f64>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => Ok(n.as_f64()),
            other => Err(mismatch("number", other)),
        }
    }

    /// RFC 3339 date-time; the payload's offset is kept.
    pub fn get_time_value(&self) -> Result<Option<DateTime<FixedOffset>>, SerializationError> {
        self.get_string_value()?
            .map(|s| {
                DateTime::parse_from_rfc3339(&s)
                    .map_err(|source| SerializationError::InvalidTimestamp { value: s, source })
            })
            .transpose()
    }

    pub fn get_date_value(&self) -> Result<Option<NaiveDate>, SerializationError> {
        self.get_string_value()?
            .map(|s| {
                NaiveDate::parse_from_str(&s, DATE_FORMAT)
                    .map_err(|source| SerializationError::InvalidDate { value: s, source })
            })
            .transpose()
    }

    pub fn get_enum_value<E>(&self) -> Result<Option<E>, SerializationError>
    where
        E: FromStr<Err = SerializationError>,
    {
        self.get_string_value()?.map(|s| s.parse()).transpose()
    }

    /// Builds an instance with `factory` (which may inspect the node to pick
    /// a concrete type) and populates it from this node.
    pub fn get_object_value<T, F>(&self, factory: F) -> Result<Option<T>, SerializationError>
    where
        T: Parsable,
        F: Fn(&ParseNode<'a>) -> Result<T, SerializationError>,
    {
        match self.value {
            Value::Null => Ok(None),
            Value::Object(_) => {
                let mut model = factory(self)?;
                model.deserialize(self)?;
                Ok(Some(model))
            }
            other => Err(mismatch("object", other)),
        }
    }

    pub fn get_collection_of_primitive_values<T: FieldValue>(
        &self,
    ) -> Result<Option<Vec<T>>, SerializationError> {
        self.collect(|node| T::read(node))
    }

    /// Typed read through [`FieldValue`]; this is what the field tables use.
    pub fn get_value<T: FieldValue>(&self) -> Result<Option<T>, SerializationError> {
        T::read(self)
    }

    // Null array elements are dropped.
    fn collect<T, R>(&self, mut read: R) -> Result<Option<Vec<T>>, SerializationError>
    where
        R: FnMut(&ParseNode<'a>) -> Result<Option<T>, SerializationError>,
    {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    if let Some(value) = read(&ParseNode::new(item))? {
                        values.push(value);
                    }
                }
                Ok(Some(values))
            }
            other => Err(mismatch("array", other)),
        }
    }
}

pub(crate) const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(expected: &'static str, found: &Value) -> SerializationError {
    SerializationError::TypeMismatch {
        expected,
        found: kind_of(found),
    }
}
