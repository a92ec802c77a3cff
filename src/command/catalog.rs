//! Name lookups for the types and enums the CLI can work with.

use std::collections::BTreeMap;

use betasdk::models::*;
use once_cell::sync::Lazy;
use serde_json::Value;
use serialization::{AdditionalDataHolder, FieldValue, SerializationError};

use super::CommandError;

/// A decoded payload, erased to what the commands need from it.
pub trait Decoded: GraphType + AdditionalDataHolder {
    fn encode(&self) -> Result<Value, SerializationError>;
}

impl<T: FieldValue + GraphType + AdditionalDataHolder> Decoded for T {
    fn encode(&self) -> Result<Value, SerializationError> {
        self.to_json()
    }
}

impl std::fmt::Debug for dyn Decoded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

pub type Decoder = fn(&Value) -> Result<Box<dyn Decoded>, SerializationError>;
pub type EnumParser = fn(&str) -> Result<i32, SerializationError>;

fn decode_as<T>(payload: &Value) -> Result<Box<dyn Decoded>, SerializationError>
where
    T: FieldValue + GraphType + AdditionalDataHolder + 'static,
{
    Ok(Box::new(serialization::from_value::<T>(payload)?))
}

fn ordinal_of<E: GraphEnum>(value: &str) -> Result<i32, SerializationError> {
    Ok(value.parse::<E>()?.ordinal())
}

// Keyed by the service's type names. Base types decode through their family so
// the payload's tag picks the concrete type.
static DECODERS: Lazy<BTreeMap<&'static str, Decoder>> = Lazy::new(|| {
    let mut map: BTreeMap<&'static str, Decoder> = BTreeMap::new();
    map.insert(
        "androidEasEmailProfileConfiguration",
        decode_as::<AndroidEasEmailProfileConfiguration>,
    );
    map.insert(
        "baseCollectionPaginationCountResponse",
        decode_as::<BaseCollectionPaginationCountResponse>,
    );
    map.insert("cloudPC", decode_as::<CloudPc>);
    map.insert("cloudPCCollectionResponse", decode_as::<CloudPcCollectionResponse>);
    map.insert("cloudPcConnectivityResult", decode_as::<CloudPcConnectivityResult>);
    map.insert("cloudPcGalleryImage", decode_as::<CloudPcGalleryImage>);
    map.insert("cloudPcLoginResult", decode_as::<CloudPcLoginResult>);
    map.insert("cloudPcPartnerAgentInstallResult", decode_as::<CloudPcPartnerAgentInstallResult>);
    map.insert("cloudPcStatusDetails", decode_as::<CloudPcStatusDetails>);
    map.insert("deviceConfiguration", decode_as::<DeviceConfigurationKind>);
    map.insert("deviceConfigurationAssignment", decode_as::<DeviceConfigurationAssignment>);
    map.insert(
        "deviceConfigurationCollectionResponse",
        decode_as::<DeviceConfigurationCollectionResponse>,
    );
    map.insert(
        "easEmailProfileConfigurationBase",
        decode_as::<EasEmailProfileConfigurationBaseKind>,
    );
    map.insert(
        "easEmailProfileConfigurationBaseCollectionResponse",
        decode_as::<EasEmailProfileConfigurationBaseCollectionResponse>,
    );
    map.insert("entity", decode_as::<EntityKind>);
    map.insert("iosEasEmailProfileConfiguration", decode_as::<IosEasEmailProfileConfiguration>);
    map.insert("keyValuePair", decode_as::<KeyValuePair>);
    map.insert(
        "userExperienceAnalyticsWorkFromAnywhereHardwareReadinessMetric",
        decode_as::<UserExperienceAnalyticsWorkFromAnywhereHardwareReadinessMetric>,
    );
    map.insert(
        "windows10EasEmailProfileConfiguration",
        decode_as::<Windows10EasEmailProfileConfiguration>,
    );
    map.insert(
        "windowsPhoneEASEmailProfileConfiguration",
        decode_as::<WindowsPhoneEasEmailProfileConfiguration>,
    );
    map
});

static ENUMS: Lazy<BTreeMap<&'static str, EnumParser>> = Lazy::new(|| {
    let mut map: BTreeMap<&'static str, EnumParser> = BTreeMap::new();
    map.insert("androidUsernameSource", ordinal_of::<AndroidUsernameSource>);
    map.insert("cloudPcConnectivityStatus", ordinal_of::<CloudPcConnectivityStatus>);
    map.insert("cloudPcDiskEncryptionState", ordinal_of::<CloudPcDiskEncryptionState>);
    map.insert("cloudPcGalleryImageStatus", ordinal_of::<CloudPcGalleryImageStatus>);
    map.insert("cloudPcOperatingSystem", ordinal_of::<CloudPcOperatingSystem>);
    map.insert("cloudPcPartnerAgentInstallStatus", ordinal_of::<CloudPcPartnerAgentInstallStatus>);
    map.insert("cloudPcPartnerAgentName", ordinal_of::<CloudPcPartnerAgentName>);
    map.insert("cloudPcProvisioningType", ordinal_of::<CloudPcProvisioningType>);
    map.insert("cloudPcServicePlanType", ordinal_of::<CloudPcServicePlanType>);
    map.insert("cloudPcStatus", ordinal_of::<CloudPcStatus>);
    map.insert("cloudPcUserAccountType", ordinal_of::<CloudPcUserAccountType>);
    map.insert(
        "deviceAndAppManagementAssignmentSource",
        ordinal_of::<DeviceAndAppManagementAssignmentSource>,
    );
    map.insert("deviceConfigAssignmentIntent", ordinal_of::<DeviceConfigAssignmentIntent>);
    map.insert("domainNameSource", ordinal_of::<DomainNameSource>);
    map.insert("easAuthenticationMethod", ordinal_of::<EasAuthenticationMethod>);
    map.insert("easServices", ordinal_of::<EasServices>);
    map.insert("emailCertificateType", ordinal_of::<EmailCertificateType>);
    map.insert("emailSyncDuration", ordinal_of::<EmailSyncDuration>);
    map.insert("emailSyncSchedule", ordinal_of::<EmailSyncSchedule>);
    map.insert("userEmailSource", ordinal_of::<UserEmailSource>);
    map.insert("usernameSource", ordinal_of::<UsernameSource>);
    map
});

pub fn decoder(type_name: &str) -> Result<Decoder, CommandError> {
    DECODERS
        .get(type_name)
        .copied()
        .ok_or_else(|| CommandError::UnknownType(type_name.to_owned()))
}

/// Runs `decode` over `payload`, naming `type_name` if it fails.
pub fn decode_with(
    decode: Decoder,
    type_name: &str,
    payload: &Value,
) -> Result<Box<dyn Decoded>, CommandError> {
    decode(payload).map_err(|source| CommandError::Decode {
        type_name: type_name.to_owned(),
        source,
    })
}

pub fn enum_parser(enum_name: &str) -> Result<EnumParser, CommandError> {
    ENUMS
        .get(enum_name)
        .copied()
        .ok_or_else(|| CommandError::UnknownEnum(enum_name.to_owned()))
}

pub fn type_names() -> impl Iterator<Item = &'static str> {
    DECODERS.keys().copied()
}

pub fn enum_names() -> impl Iterator<Item = &'static str> {
    ENUMS.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_types_decode_through_their_family() {
        let decode = decoder("deviceConfiguration").unwrap();
        let model = decode(&json!({
            "@odata.type": "#microsoft.graph.iosEasEmailProfileConfiguration"
        }))
        .unwrap();
        assert_eq!(model.type_name(), "IosEasEmailProfileConfiguration");
    }

    #[test]
    fn test_decode_failure_names_the_type() {
        let decode = decoder("cloudPC").unwrap();
        let err = decode_with(decode, "cloudPC", &json!({"osVersion": "windows12"})).unwrap_err();
        assert_eq!(err.to_string(), "Failed to decode payload as 'cloudPC'");
        let CommandError::Decode { source, .. } = err else {
            panic!("unexpected error {err:?}");
        };
        assert!(matches!(
            source,
            SerializationError::UnknownEnumValue { type_name: "CloudPcOperatingSystem", .. }
        ));
    }

    #[test]
    fn test_unknown_names() {
        assert!(matches!(decoder("user"), Err(CommandError::UnknownType(_))));
        assert!(matches!(enum_parser("colour"), Err(CommandError::UnknownEnum(_))));
    }

    #[test]
    fn test_enum_parser() {
        let parse = enum_parser("cloudPcOperatingSystem").unwrap();
        assert_eq!(parse("windows11").unwrap(), 1);
        assert!(parse("bogus").is_err());
    }

    #[test]
    fn test_names_are_sorted() {
        let names: Vec<_> = type_names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(enum_names().count(), 21);
    }
}
