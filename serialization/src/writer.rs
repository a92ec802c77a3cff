use serde_json::{Map, Value};

use crate::error::SerializationError;
use crate::field_value::FieldValue;
use crate::nullable::Nullable;
use crate::parsable::{AdditionalData, Parsable};

/// Builds one JSON object, property by property, in write order.
#[derive(Debug, Default)]
pub struct SerializationWriter {
    properties: Map<String, Value>,
}

impl SerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes `model` into a fresh object.
    pub fn write_object<T: Parsable + ?Sized>(model: &T) -> Result<Value, SerializationError> {
        let mut writer = Self::new();
        model.serialize(&mut writer)?;
        Ok(writer.into_value())
    }

    /// `Unset` writes nothing, `Null` writes JSON `null`.
    pub fn write_value<T: FieldValue>(
        &mut self,
        key: &str,
        value: &Nullable<T>,
    ) -> Result<(), SerializationError> {
        match value {
            Nullable::Unset => Ok(()),
            Nullable::Null => self.write_raw_value(key, Value::Null),
            Nullable::Value(value) => {
                let json = value.to_json()?;
                self.write_raw_value(key, json)
            }
        }
    }

    pub fn write_raw_value(&mut self, key: &str, value: Value) -> Result<(), SerializationError> {
        if self.properties.contains_key(key) {
            return Err(SerializationError::DuplicateProperty(key.to_owned()));
        }
        self.properties.insert(key.to_owned(), value);
        Ok(())
    }

    pub fn write_additional_data(
        &mut self,
        additional_data: &AdditionalData,
    ) -> Result<(), SerializationError> {
        for (key, value) in additional_data {
            self.write_raw_value(key, value.clone())?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.properties)
    }
}
