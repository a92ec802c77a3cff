use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::SerializationError;
use crate::parse_node::ParseNode;
use crate::writer::SerializationWriter;

/// Unmodeled properties captured on decode, re-emitted on encode.
pub type AdditionalData = Map<String, Value>;

pub type FieldDeserializer<T> =
    Box<dyn Fn(&mut T, &ParseNode<'_>) -> Result<(), SerializationError> + Send + Sync>;

pub trait AdditionalDataHolder {
    fn additional_data(&self) -> &AdditionalData;
    fn additional_data_mut(&mut self) -> &mut AdditionalData;
}

/// Anything that can be populated from, and written to, a JSON object.
pub trait Parsable {
    fn deserialize(&mut self, node: &ParseNode<'_>) -> Result<(), SerializationError>;
    fn serialize(&self, writer: &mut SerializationWriter) -> Result<(), SerializationError>;
}

/// A concrete, table-driven model.
pub trait Model: Parsable + AdditionalDataHolder + Sized + 'static {
    fn field_deserializers() -> &'static FieldDeserializers<Self>;

    /// Writes the modeled properties only, base type first, in table order.
    fn serialize_fields(&self, writer: &mut SerializationWriter) -> Result<(), SerializationError>;
}

/// Property name to decode closure, for one concrete type.
///
/// A subtype's table starts as a copy of its base type's table, with every
/// closure re-targeted through the embedded base.
pub struct FieldDeserializers<T> {
    entries: HashMap<&'static str, FieldDeserializer<T>>,
    names: Vec<&'static str>,
}

impl<T: 'static> FieldDeserializers<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            names: Vec::new(),
        }
    }

    pub fn inherit<B: 'static>(
        base: &'static FieldDeserializers<B>,
        upcast: fn(&mut T) -> &mut B,
    ) -> Self {
        let mut fields = Self::new();
        for (name, decode) in base.iter() {
            fields.insert(name, move |model: &mut T, node: &ParseNode<'_>| {
                decode(upcast(model), node)
            });
        }
        fields
    }

    pub fn insert<F>(&mut self, name: &'static str, decode: F)
    where
        F: Fn(&mut T, &ParseNode<'_>) -> Result<(), SerializationError> + Send + Sync + 'static,
    {
        if self.entries.insert(name, Box::new(decode)).is_none() {
            self.names.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldDeserializer<T>> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Property names in declaration order, inherited ones first.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldDeserializer<T>)> + '_ {
        self.names
            .iter()
            .filter_map(|name| self.entries.get(name).map(|decode| (*name, decode)))
    }
}

impl<T: 'static> Default for FieldDeserializers<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Walks the properties of `node` in payload order: known names go through
/// the type's table, the rest land in the additional data.
///
/// Stops at the first failing property; what was decoded before it stays.
pub fn deserialize_model<T: Model>(
    model: &mut T,
    node: &ParseNode<'_>,
) -> Result<(), SerializationError> {
    let fields = T::field_deserializers();
    for (name, child) in node.properties()? {
        match fields.get(name) {
            Some(decode) => decode(&mut *model, &child)?,
            None => {
                model
                    .additional_data_mut()
                    .insert(name.to_owned(), child.raw().clone());
            }
        }
    }
    Ok(())
}

pub fn serialize_model<T: Model>(
    model: &T,
    writer: &mut SerializationWriter,
) -> Result<(), SerializationError> {
    model.serialize_fields(writer)?;
    writer.write_additional_data(model.additional_data())
}
