//! Generators for the model, family and enum boilerplate.
//!
//! Every model gets the same shape: `Nullable` public fields, a `new()`
//! constructor, a lazily built field table, a serializer that walks the same
//! properties in the same order, and the `Parsable` / `FieldValue` glue.

/// Enum with 0-based ordinals in declaration order and a wire name per
/// variant.
macro_rules! graph_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[repr(i32)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::models::GraphEnum for $name {
            const ALL: &'static [Self] = &[$( Self::$variant, )+];

            fn ordinal(self) -> i32 {
                self as i32
            }

            fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::models::GraphEnum::as_str(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::serialization::SerializationError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $( $wire => Ok(Self::$variant), )+
                    _ => Err(::serialization::SerializationError::UnknownEnumValue {
                        type_name: stringify!($name),
                        value: value.to_owned(),
                    }),
                }
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = ::serialization::SerializationError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl ::std::convert::TryFrom<i32> for $name {
            type Error = ::serialization::SerializationError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                usize::try_from(value)
                    .ok()
                    .and_then(|index| <Self as $crate::models::GraphEnum>::ALL.get(index))
                    .copied()
                    .ok_or_else(|| ::serialization::SerializationError::IntegerOutOfRange {
                        value: value.to_string(),
                        target: stringify!($name),
                    })
            }
        }

        impl ::serialization::FieldValue for $name {
            fn read(
                node: &::serialization::ParseNode<'_>,
            ) -> Result<Option<Self>, ::serialization::SerializationError> {
                node.get_enum_value()
            }

            fn to_json(&self) -> Result<::serde_json::Value, ::serialization::SerializationError> {
                Ok(::serde_json::Value::String(
                    $crate::models::GraphEnum::as_str(*self).to_owned(),
                ))
            }
        }
    };
}

/// Model struct plus its field table and serializer.
///
/// Forms:
/// - `pub struct Name { .. }`: hierarchy root, owns the additional data.
/// - `pub struct Name: Base = "tag" { .. }`: concrete subtype, `new()` stamps
///   `@odata.type` with the tag.
/// - `pub struct Name: Base ("tag") { .. }`: subtype with a tag that is not
///   stamped (abstract bases, entities addressed directly).
/// - `pub struct Name: Base { .. }`: subtype without a tag.
///
/// Fields are declared as `name: Type => "jsonName"`; they are decoded and
/// written in declaration order, after the base type's fields.
macro_rules! graph_model {
    (@common $name:ident) => {
        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $name {
            pub fn create_from_discriminator_value(
                _node: &::serialization::ParseNode<'_>,
            ) -> Result<Self, ::serialization::SerializationError> {
                Ok(Self::new())
            }
        }

        impl ::serialization::Parsable for $name {
            fn deserialize(
                &mut self,
                node: &::serialization::ParseNode<'_>,
            ) -> Result<(), ::serialization::SerializationError> {
                ::serialization::deserialize_model(self, node)
            }

            fn serialize(
                &self,
                writer: &mut ::serialization::SerializationWriter,
            ) -> Result<(), ::serialization::SerializationError> {
                ::serialization::serialize_model(self, writer)
            }
        }

        impl ::serialization::FieldValue for $name {
            fn read(
                node: &::serialization::ParseNode<'_>,
            ) -> Result<Option<Self>, ::serialization::SerializationError> {
                node.get_object_value($name::create_from_discriminator_value)
            }

            fn to_json(&self) -> Result<::serde_json::Value, ::serialization::SerializationError> {
                ::serialization::SerializationWriter::write_object(self)
            }
        }

        impl $crate::models::GraphType for $name {
            fn type_name(&self) -> &'static str {
                stringify!($name)
            }
        }
    };

    (@derived
        $(#[$meta:meta])*
        $name:ident : $base:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty => $key:literal ),*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            base: $base,
            $( $(#[$fmeta])* pub $field: ::serialization::Nullable<$ty>, )*
        }

        impl $name {
            fn with_base(base: $base) -> Self {
                Self {
                    base,
                    $( $field: ::serialization::Nullable::Unset, )*
                }
            }

            fn base_mut(&mut self) -> &mut $base {
                &mut self.base
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = $base;

            fn deref(&self) -> &$base {
                &self.base
            }
        }

        impl ::std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut $base {
                &mut self.base
            }
        }

        impl ::serialization::AdditionalDataHolder for $name {
            fn additional_data(&self) -> &::serialization::AdditionalData {
                ::serialization::AdditionalDataHolder::additional_data(&self.base)
            }

            fn additional_data_mut(&mut self) -> &mut ::serialization::AdditionalData {
                ::serialization::AdditionalDataHolder::additional_data_mut(&mut self.base)
            }
        }

        impl ::serialization::Model for $name {
            fn field_deserializers() -> &'static ::serialization::FieldDeserializers<Self> {
                static FIELDS: ::once_cell::sync::Lazy<::serialization::FieldDeserializers<$name>> =
                    ::once_cell::sync::Lazy::new(|| {
                        #[allow(unused_mut)]
                        let mut fields = ::serialization::FieldDeserializers::inherit(
                            <$base as ::serialization::Model>::field_deserializers(),
                            $name::base_mut,
                        );
                        $(
                            fields.insert(
                                $key,
                                |model: &mut $name, node: &::serialization::ParseNode<'_>| {
                                    model.$field = ::serialization::Nullable::from_read(
                                        node.get_value::<$ty>()?,
                                    );
                                    Ok(())
                                },
                            );
                        )*
                        fields
                    });
                &FIELDS
            }

            fn serialize_fields(
                &self,
                writer: &mut ::serialization::SerializationWriter,
            ) -> Result<(), ::serialization::SerializationError> {
                ::serialization::Model::serialize_fields(&self.base, writer)?;
                $( writer.write_value($key, &self.$field)?; )*
                Ok(())
            }
        }

        graph_model!(@common $name);
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty => $key:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: ::serialization::Nullable<$ty>, )*
            additional_data: ::serialization::AdditionalData,
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    $( $field: ::serialization::Nullable::Unset, )*
                    additional_data: ::serialization::AdditionalData::new(),
                }
            }
        }

        impl ::serialization::AdditionalDataHolder for $name {
            fn additional_data(&self) -> &::serialization::AdditionalData {
                &self.additional_data
            }

            fn additional_data_mut(&mut self) -> &mut ::serialization::AdditionalData {
                &mut self.additional_data
            }
        }

        impl ::serialization::Model for $name {
            fn field_deserializers() -> &'static ::serialization::FieldDeserializers<Self> {
                static FIELDS: ::once_cell::sync::Lazy<::serialization::FieldDeserializers<$name>> =
                    ::once_cell::sync::Lazy::new(|| {
                        let mut fields = ::serialization::FieldDeserializers::new();
                        $(
                            fields.insert(
                                $key,
                                |model: &mut $name, node: &::serialization::ParseNode<'_>| {
                                    model.$field = ::serialization::Nullable::from_read(
                                        node.get_value::<$ty>()?,
                                    );
                                    Ok(())
                                },
                            );
                        )*
                        fields
                    });
                &FIELDS
            }

            fn serialize_fields(
                &self,
                writer: &mut ::serialization::SerializationWriter,
            ) -> Result<(), ::serialization::SerializationError> {
                $( writer.write_value($key, &self.$field)?; )*
                Ok(())
            }
        }

        graph_model!(@common $name);
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident : $base:ident = $tag:literal {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty => $key:literal ),* $(,)?
        }
    ) => {
        graph_model!(@derived
            $(#[$meta])*
            $name : $base {
                $( $(#[$fmeta])* $field : $ty => $key ),*
            }
        );

        impl $name {
            pub const ODATA_TYPE: &'static str = $tag;

            pub fn new() -> Self {
                let mut model = Self::with_base(<$base>::new());
                model.odata_type = ::serialization::Nullable::Value(Self::ODATA_TYPE.to_owned());
                model
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident : $base:ident ( $tag:literal ) {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty => $key:literal ),* $(,)?
        }
    ) => {
        graph_model!(@derived
            $(#[$meta])*
            $name : $base {
                $( $(#[$fmeta])* $field : $ty => $key ),*
            }
        );

        impl $name {
            pub const ODATA_TYPE: &'static str = $tag;

            pub fn new() -> Self {
                Self::with_base(<$base>::new())
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident : $base:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty => $key:literal ),* $(,)?
        }
    ) => {
        graph_model!(@derived
            $(#[$meta])*
            $name : $base {
                $( $(#[$fmeta])* $field : $ty => $key ),*
            }
        );

        impl $name {
            pub fn new() -> Self {
                Self::with_base(<$base>::new())
            }
        }
    };
}

/// Sum type over a base type and its known subtypes, dispatched on
/// `@odata.type`. Unmapped or missing tags decode as the `Base` variant.
macro_rules! graph_family {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $base:ident {
            $( $variant:ident ( $ty:ident ) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(clippy::large_enum_variant)]
        #[derive(Clone, Debug, PartialEq)]
        pub enum $name {
            Base($base),
            $( $variant($ty), )+
        }

        impl $name {
            fn registry() -> &'static ::serialization::DiscriminatorRegistry<$name> {
                static REGISTRY: ::once_cell::sync::Lazy<
                    ::serialization::DiscriminatorRegistry<$name>,
                > = ::once_cell::sync::Lazy::new(|| {
                    ::serialization::DiscriminatorRegistry::new(|| $name::Base($base::new()))
                        $( .register($ty::ODATA_TYPE, || $name::$variant($ty::new())) )+
                });
                &REGISTRY
            }

            pub fn create_from_discriminator_value(
                node: &::serialization::ParseNode<'_>,
            ) -> Result<Self, ::serialization::SerializationError> {
                Self::registry().create_from_discriminator_value(node)
            }

            /// `@odata.type` tags with a dedicated variant.
            pub fn known_tags() -> impl Iterator<Item = &'static str> {
                Self::registry().tags()
            }

            pub fn as_base(&self) -> &$base {
                match self {
                    Self::Base(model) => model,
                    $( Self::$variant(model) => model, )+
                }
            }

            pub fn as_base_mut(&mut self) -> &mut $base {
                match self {
                    Self::Base(model) => model,
                    $( Self::$variant(model) => model, )+
                }
            }

            pub fn odata_type(&self) -> Option<&str> {
                self.as_base().odata_type.as_deref()
            }
        }

        impl ::serialization::Parsable for $name {
            fn deserialize(
                &mut self,
                node: &::serialization::ParseNode<'_>,
            ) -> Result<(), ::serialization::SerializationError> {
                match self {
                    Self::Base(model) => ::serialization::Parsable::deserialize(model, node),
                    $( Self::$variant(model) => ::serialization::Parsable::deserialize(model, node), )+
                }
            }

            fn serialize(
                &self,
                writer: &mut ::serialization::SerializationWriter,
            ) -> Result<(), ::serialization::SerializationError> {
                match self {
                    Self::Base(model) => ::serialization::Parsable::serialize(model, writer),
                    $( Self::$variant(model) => ::serialization::Parsable::serialize(model, writer), )+
                }
            }
        }

        impl ::serialization::AdditionalDataHolder for $name {
            fn additional_data(&self) -> &::serialization::AdditionalData {
                ::serialization::AdditionalDataHolder::additional_data(self.as_base())
            }

            fn additional_data_mut(&mut self) -> &mut ::serialization::AdditionalData {
                ::serialization::AdditionalDataHolder::additional_data_mut(self.as_base_mut())
            }
        }

        impl ::serialization::FieldValue for $name {
            fn read(
                node: &::serialization::ParseNode<'_>,
            ) -> Result<Option<Self>, ::serialization::SerializationError> {
                node.get_object_value($name::create_from_discriminator_value)
            }

            fn to_json(&self) -> Result<::serde_json::Value, ::serialization::SerializationError> {
                ::serialization::SerializationWriter::write_object(self)
            }
        }

        impl $crate::models::GraphType for $name {
            fn type_name(&self) -> &'static str {
                match self {
                    Self::Base(model) => $crate::models::GraphType::type_name(model),
                    $( Self::$variant(model) => $crate::models::GraphType::type_name(model), )+
                }
            }
        }

        impl From<$base> for $name {
            fn from(model: $base) -> Self {
                Self::Base(model)
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(model: $ty) -> Self {
                    Self::$variant(model)
                }
            }
        )+
    };
}
