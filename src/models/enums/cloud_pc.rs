graph_enum! {
    pub enum CloudPcOperatingSystem {
        Windows10 = "windows10",
        Windows11 = "windows11",
        UnknownFutureValue = "unknownFutureValue",
    }
}

graph_enum! {
    /// Provisioning state of a Cloud PC.
    pub enum CloudPcStatus {
        NotProvisioned = "notProvisioned",
        Provisioning = "provisioning",
        Provisioned = "provisioned",
        InGracePeriod = "inGracePeriod",
        Deprovisioning = "deprovisioning",
        Failed = "failed",
        ProvisionedWithWarnings = "provisionedWithWarnings",
        Resizing = "resizing",
        Restoring = "restoring",
        PendingProvision = "pendingProvision",
        UnknownFutureValue = "unknownFutureValue",
        MovingRegion = "movingRegion",
        ResizePendingLicense = "resizePendingLicense",
    }
}

graph_enum! {
    pub enum CloudPcProvisioningType {
        Dedicated = "dedicated",
        Shared = "shared",
        UnknownFutureValue = "unknownFutureValue",
    }
}

graph_enum! {
    pub enum CloudPcServicePlanType {
        Enterprise = "enterprise",
        Business = "business",
        UnknownFutureValue = "unknownFutureValue",
    }
}

graph_enum! {
    pub enum CloudPcUserAccountType {
        StandardUser = "standardUser",
        Administrator = "administrator",
        UnknownFutureValue = "unknownFutureValue",
    }
}

graph_enum! {
    pub enum CloudPcDiskEncryptionState {
        NotAvailable = "notAvailable",
        NotEncrypted = "notEncrypted",
        EncryptedUsingPlatformManagedKey = "encryptedUsingPlatformManagedKey",
        EncryptedUsingCustomerManagedKey = "encryptedUsingCustomerManagedKey",
        UnknownFutureValue = "unknownFutureValue",
    }
}

graph_enum! {
    pub enum CloudPcConnectivityStatus {
        Unknown = "unknown",
        Available = "available",
        AvailableWithWarning = "availableWithWarning",
        Unavailable = "unavailable",
        UnknownFutureValue = "unknownFutureValue",
    }
}

graph_enum! {
    pub enum CloudPcPartnerAgentInstallStatus {
        Installed = "installed",
        InstallFailed = "installFailed",
        Installing = "installing",
        Uninstalling = "uninstalling",
        UninstallFailed = "uninstallFailed",
        Licensed = "licensed",
        UnknownFutureValue = "unknownFutureValue",
    }
}

graph_enum! {
    /// Partner agents; `unknownFutureValue` sits before the later additions.
    pub enum CloudPcPartnerAgentName {
        Citrix = "citrix",
        UnknownFutureValue = "unknownFutureValue",
        VMware = "vMware",
        Hp = "hp",
    }
}

graph_enum! {
    /// Support state of a gallery image.
    pub enum CloudPcGalleryImageStatus {
        Supported = "supported",
        SupportedWithWarning = "supportedWithWarning",
        NotSupported = "notSupported",
        UnknownFutureValue = "unknownFutureValue",
    }
}
