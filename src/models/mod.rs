//! Graph beta device-management models.
//!
//! Every type here is declared through the macros in [`macros`]; the
//! hierarchies mirror the service schema, with each subtype embedding its
//! base and dereferencing to it.

#[macro_use]
mod macros;

pub mod android_eas_email_profile;
pub mod cloud_pc;
pub mod collection_response;
pub mod device_configuration;
pub mod eas_email_profile;
pub mod entity;
pub mod enums;
pub mod user_experience_analytics;

use std::str::FromStr;

use serialization::SerializationError;

pub use android_eas_email_profile::AndroidEasEmailProfileConfiguration;
pub use cloud_pc::{
    CloudPc, CloudPcConnectivityResult, CloudPcGalleryImage, CloudPcLoginResult,
    CloudPcPartnerAgentInstallResult, CloudPcStatusDetails, KeyValuePair,
};
pub use collection_response::{
    BaseCollectionPaginationCountResponse, CloudPcCollectionResponse,
    DeviceConfigurationCollectionResponse, EasEmailProfileConfigurationBaseCollectionResponse,
};
pub use device_configuration::{
    DeviceConfiguration, DeviceConfigurationAssignment, DeviceConfigurationKind,
};
pub use eas_email_profile::{
    EasEmailProfileConfigurationBase, EasEmailProfileConfigurationBaseKind,
    IosEasEmailProfileConfiguration, Windows10EasEmailProfileConfiguration,
    WindowsPhoneEasEmailProfileConfiguration,
};
pub use entity::{Entity, EntityKind};
pub use enums::*;
pub use user_experience_analytics::UserExperienceAnalyticsWorkFromAnywhereHardwareReadinessMetric;

/// Rust type name of a decoded value, resolved through any family enum.
pub trait GraphType {
    fn type_name(&self) -> &'static str;
}

/// Closed set of named ordinals with a wire representation.
pub trait GraphEnum: Copy + FromStr<Err = SerializationError> + 'static {
    /// Every variant, indexed by ordinal.
    const ALL: &'static [Self];

    fn ordinal(self) -> i32;

    fn as_str(self) -> &'static str;
}
