graph_enum! {
    pub enum DeviceConfigAssignmentIntent {
        Apply = "apply",
        Remove = "remove",
    }
}

graph_enum! {
    /// Where an assignment came from.
    pub enum DeviceAndAppManagementAssignmentSource {
        Direct = "direct",
        PolicySets = "policySets",
    }
}
