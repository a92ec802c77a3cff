//! JSON parse-node / serialization-writer layer for OData models.
//!
//! Models describe themselves through a [`FieldDeserializers`] table and a
//! [`Model::serialize_fields`] write sequence; [`deserialize_model`] and
//! [`serialize_model`] drive both and take care of additional data.
//! Polymorphic payloads pick their concrete type through a
//! [`DiscriminatorRegistry`].

mod discriminator;
mod error;
mod field_value;
mod json;
mod nullable;
mod parsable;
mod parse_node;
mod writer;

pub use discriminator::{DiscriminatorRegistry, ODATA_TYPE_KEY};
pub use error::SerializationError;
pub use field_value::FieldValue;
pub use json::{from_slice, from_str, from_value, to_string, to_string_pretty, to_value};
pub use nullable::Nullable;
pub use parsable::{
    deserialize_model, serialize_model, AdditionalData, AdditionalDataHolder, FieldDeserializer,
    FieldDeserializers, Model, Parsable,
};
pub use parse_node::ParseNode;
pub use writer::SerializationWriter;
