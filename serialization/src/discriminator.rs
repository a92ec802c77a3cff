use std::collections::HashMap;

use crate::error::SerializationError;
use crate::parse_node::ParseNode;

/// Property carrying the concrete type of a polymorphic payload.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Maps `@odata.type` tags to constructors for one base type.
///
/// Tags without a mapping construct the base type: payloads from a newer
/// schema still decode, with their extra properties kept as additional data.
pub struct DiscriminatorRegistry<T> {
    base: fn() -> T,
    mappings: HashMap<&'static str, fn() -> T>,
}

impl<T> DiscriminatorRegistry<T> {
    pub fn new(base: fn() -> T) -> Self {
        Self {
            base,
            mappings: HashMap::new(),
        }
    }

    pub fn register(mut self, tag: &'static str, construct: fn() -> T) -> Self {
        self.mappings.insert(tag, construct);
        self
    }

    pub fn is_registered(&self, tag: &str) -> bool {
        self.mappings.contains_key(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.mappings.keys().copied()
    }

    pub fn construct(&self, tag: Option<&str>) -> T {
        match tag.and_then(|tag| self.mappings.get(tag)) {
            Some(construct) => construct(),
            None => (self.base)(),
        }
    }

    /// Returns an empty instance of the type named by the node's
    /// `@odata.type`; the node's properties are not read yet.
    pub fn create_from_discriminator_value(
        &self,
        node: &ParseNode<'_>,
    ) -> Result<T, SerializationError> {
        let tag = match node.get_child_node(ODATA_TYPE_KEY) {
            Some(child) => child.get_string_value()?,
            None => None,
        };
        if let Some(tag) = tag.as_deref() {
            if !self.is_registered(tag) {
                log::debug!("No mapping for discriminator '{}', using base type", tag);
            }
        }
        Ok(self.construct(tag.as_deref()))
    }
}
