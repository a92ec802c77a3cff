use chrono::{DateTime, FixedOffset, NaiveDate, Timelike};
use serde_json::{Number, Value};

use crate::error::SerializationError;
use crate::parse_node::ParseNode;

/// A value that can sit in a model property.
///
/// `read` returns `Ok(None)` for JSON `null`. Models, enums and
/// discriminator families implement this too, so nesting and collections
/// fall out of the impls below.
pub trait FieldValue: Sized {
    fn read(node: &ParseNode<'_>) -> Result<Option<Self>, SerializationError>;
    fn to_json(&self) -> Result<Value, SerializationError>;
}

impl FieldValue for String {
    fn read(node: &ParseNode<'_>) -> Result<Option<Self>, SerializationError> {
        node.get_string_value()
    }

    fn to_json(&self) -> Result<Value, SerializationError> {
        Ok(Value::String(self.clone()))
    }
}

impl FieldValue for bool {
    fn read(node: &ParseNode<'_>) -> Result<Option<Self>, SerializationError> {
        node.get_bool_value()
    }

    fn to_json(&self) -> Result<Value, SerializationError> {
        Ok(Value::Bool(*self))
    }
}

impl FieldValue for i32 {
    fn read(node: &ParseNode<'_>) -> Result<Option<Self>, SerializationError> {
        node.get_i32_value()
    }

    fn to_json(&self) -> Result<Value, SerializationError> {
        Ok(Value::from(*self))
    }
}

impl FieldValue for i64 {
    fn read(node: &ParseNode<'_>) -> Result<Option<Self>, SerializationError> {
        node.get_i64_value()
    }

    fn to_json(&self) -> Result<Value, SerializationError> {
        Ok(Value::from(*self))
    }
}

impl FieldValue for f64 {
    fn read(node: &ParseNode<'_>) -> Result<Option<Self>, SerializationError> {
        node.get_f64_value()
    }

    fn to_json(&self) -> Result<Value, SerializationError> {
        Number::from_f64(*self)
            .map(Value::Number)
            .ok_or(SerializationError::NonFiniteNumber(*self))
    }
}

impl FieldValue for DateTime<FixedOffset> {
    fn read(node: &ParseNode<'_>) -> Result<Option<Self>, SerializationError> {
        node.get_time_value()
    }

    fn to_json(&self) -> Result<Value, SerializationError> {
        Ok(Value::String(format_time(self)))
    }
}

/// RFC 3339 with the value's own offset (`Z` when zero) and only as many
/// fractional digits as are significant.
fn format_time(time: &DateTime<FixedOffset>) -> String {
    let mut text = time.format("%Y-%m-%dT%H:%M:%S").to_string();
    // Leap seconds carry an extra second in the nanosecond field.
    let nanos = time.nanosecond() % 1_000_000_000;
    if nanos > 0 {
        let fraction = format!("{nanos:09}");
        text.push('.');
        text.push_str(fraction.trim_end_matches('0'));
    }
    if time.offset().local_minus_utc() == 0 {
        text.push('Z');
    } else {
        text.push_str(&time.format("%:z").to_string());
    }
    text
}

impl FieldValue for NaiveDate {
    fn read(node: &ParseNode<'_>) -> Result<Option<Self>, SerializationError> {
        node.get_date_value()
    }

    fn to_json(&self) -> Result<Value, SerializationError> {
        Ok(Value::String(self.format("%Y-%m-%d").to_string()))
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn read(node: &ParseNode<'_>) -> Result<Option<Self>, SerializationError> {
        node.get_collection_of_primitive_values()
    }

    fn to_json(&self) -> Result<Value, SerializationError> {
        self.iter()
            .map(T::to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}
