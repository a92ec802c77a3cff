use chrono::{DateTime, FixedOffset};

use super::{
    AndroidEasEmailProfileConfiguration, DeviceAndAppManagementAssignmentSource,
    DeviceConfigAssignmentIntent, EasEmailProfileConfigurationBase, Entity,
    IosEasEmailProfileConfiguration, Windows10EasEmailProfileConfiguration,
    WindowsPhoneEasEmailProfileConfiguration,
};

graph_model! {
    /// Settings profile pushed to managed devices. Payloads normally carry
    /// the tag of one of the platform subtypes.
    pub struct DeviceConfiguration: Entity ("#microsoft.graph.deviceConfiguration") {
        assignments: Vec<DeviceConfigurationAssignment> => "assignments",
        created_date_time: DateTime<FixedOffset> => "createdDateTime",
        description: String => "description",
        display_name: String => "displayName",
        last_modified_date_time: DateTime<FixedOffset> => "lastModifiedDateTime",
        role_scope_tag_ids: Vec<String> => "roleScopeTagIds",
        supports_scope_tags: bool => "supportsScopeTags",
        /// Incremented by the service on every update.
        version: i32 => "version",
    }
}

graph_model! {
    pub struct DeviceConfigurationAssignment: Entity ("#microsoft.graph.deviceConfigurationAssignment") {
        intent: DeviceConfigAssignmentIntent => "intent",
        source: DeviceAndAppManagementAssignmentSource => "source",
        /// Policy set the assignment was created from, when `source` is
        /// `policySets`.
        source_id: String => "sourceId",
    }
}

graph_family! {
    pub enum DeviceConfigurationKind: DeviceConfiguration {
        AndroidEasEmailProfileConfiguration(AndroidEasEmailProfileConfiguration),
        EasEmailProfileConfigurationBase(EasEmailProfileConfigurationBase),
        IosEasEmailProfileConfiguration(IosEasEmailProfileConfiguration),
        Windows10EasEmailProfileConfiguration(Windows10EasEmailProfileConfiguration),
        WindowsPhoneEasEmailProfileConfiguration(WindowsPhoneEasEmailProfileConfiguration),
    }
}
