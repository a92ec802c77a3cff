use super::{
    AndroidEasEmailProfileConfiguration, CloudPc, CloudPcGalleryImage, DeviceConfiguration,
    DeviceConfigurationAssignment, EasEmailProfileConfigurationBase,
    IosEasEmailProfileConfiguration,
    UserExperienceAnalyticsWorkFromAnywhereHardwareReadinessMetric,
    Windows10EasEmailProfileConfiguration, WindowsPhoneEasEmailProfileConfiguration,
};

graph_model! {
    /// Root of every addressable resource.
    pub struct Entity {
        id: String => "id",
        odata_type: String => "@odata.type",
    }
}

graph_family! {
    /// Any entity, resolved through its `@odata.type`.
    pub enum EntityKind: Entity {
        AndroidEasEmailProfileConfiguration(AndroidEasEmailProfileConfiguration),
        CloudPc(CloudPc),
        CloudPcGalleryImage(CloudPcGalleryImage),
        DeviceConfiguration(DeviceConfiguration),
        DeviceConfigurationAssignment(DeviceConfigurationAssignment),
        EasEmailProfileConfigurationBase(EasEmailProfileConfigurationBase),
        IosEasEmailProfileConfiguration(IosEasEmailProfileConfiguration),
        UserExperienceAnalyticsWorkFromAnywhereHardwareReadinessMetric(
            UserExperienceAnalyticsWorkFromAnywhereHardwareReadinessMetric
        ),
        Windows10EasEmailProfileConfiguration(Windows10EasEmailProfileConfiguration),
        WindowsPhoneEasEmailProfileConfiguration(WindowsPhoneEasEmailProfileConfiguration),
    }
}
