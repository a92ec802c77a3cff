mod cloud_pc;
mod device_configuration;
mod email;

pub use cloud_pc::*;
pub use device_configuration::*;
pub use email::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GraphEnum;
    use serialization::{from_str, to_string, SerializationError};

    fn assert_round_trips<E>()
    where
        E: GraphEnum + PartialEq + std::fmt::Debug + TryFrom<i32, Error = SerializationError>,
    {
        for (index, value) in E::ALL.iter().enumerate() {
            assert_eq!(value.ordinal(), index as i32);
            assert_eq!(value.as_str().parse::<E>().unwrap(), *value);
            assert_eq!(E::try_from(value.ordinal()).unwrap(), *value);
        }
        assert!(E::try_from(E::ALL.len() as i32).is_err());
        assert!(E::try_from(-1).is_err());
    }

    #[test]
    fn test_every_enum_round_trips() {
        assert_round_trips::<AndroidUsernameSource>();
        assert_round_trips::<CloudPcConnectivityStatus>();
        assert_round_trips::<CloudPcDiskEncryptionState>();
        assert_round_trips::<CloudPcOperatingSystem>();
        assert_round_trips::<CloudPcPartnerAgentInstallStatus>();
        assert_round_trips::<CloudPcPartnerAgentName>();
        assert_round_trips::<CloudPcProvisioningType>();
        assert_round_trips::<CloudPcServicePlanType>();
        assert_round_trips::<CloudPcStatus>();
        assert_round_trips::<CloudPcUserAccountType>();
        assert_round_trips::<DeviceAndAppManagementAssignmentSource>();
        assert_round_trips::<DeviceConfigAssignmentIntent>();
        assert_round_trips::<DomainNameSource>();
        assert_round_trips::<EasAuthenticationMethod>();
        assert_round_trips::<EasServices>();
        assert_round_trips::<EmailCertificateType>();
        assert_round_trips::<EmailSyncDuration>();
        assert_round_trips::<EmailSyncSchedule>();
        assert_round_trips::<UserEmailSource>();
        assert_round_trips::<UsernameSource>();
    }

    #[test]
    fn test_operating_system() {
        let parsed: CloudPcOperatingSystem = "windows11".parse().unwrap();
        assert_eq!(parsed, CloudPcOperatingSystem::Windows11);
        assert_eq!(parsed.ordinal(), 1);
        assert_eq!(CloudPcOperatingSystem::Windows11.to_string(), "windows11");

        let err = "bogus".parse::<CloudPcOperatingSystem>().unwrap_err();
        assert!(matches!(
            err,
            SerializationError::UnknownEnumValue {
                type_name: "CloudPcOperatingSystem",
                ref value,
            } if value == "bogus"
        ));
    }

    #[test]
    fn test_wire_names_are_case_sensitive() {
        assert!("Windows11".parse::<CloudPcOperatingSystem>().is_err());
        assert_eq!(
            "vMware".parse::<CloudPcPartnerAgentName>().unwrap(),
            CloudPcPartnerAgentName::VMware
        );
        assert!("windowsPhone".parse::<UsernameSource>().is_err());
    }

    #[test]
    fn test_enum_as_field_value() {
        let statuses: Vec<CloudPcStatus> =
            from_str(r#"["provisioned","inGracePeriod","resizePendingLicense"]"#).unwrap();
        assert_eq!(
            statuses,
            [
                CloudPcStatus::Provisioned,
                CloudPcStatus::InGracePeriod,
                CloudPcStatus::ResizePendingLicense
            ]
        );
        assert_eq!(
            to_string(&statuses).unwrap(),
            r#"["provisioned","inGracePeriod","resizePendingLicense"]"#
        );
        assert!(matches!(
            from_str::<EasServices>("4"),
            Err(SerializationError::TypeMismatch { .. })
        ));
    }
}
