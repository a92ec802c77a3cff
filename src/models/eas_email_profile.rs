//! Exchange ActiveSync email profiles for iOS and Windows.

use super::{
    DeviceConfiguration, DomainNameSource, EasAuthenticationMethod, EasServices,
    EmailCertificateType, EmailSyncDuration, EmailSyncSchedule, UserEmailSource, UsernameSource,
};

graph_model! {
    /// Settings shared by the EAS email profiles.
    pub struct EasEmailProfileConfigurationBase: DeviceConfiguration ("#microsoft.graph.easEmailProfileConfigurationBase") {
        custom_domain_name: String => "customDomainName",
        user_domain_name_source: DomainNameSource => "userDomainNameSource",
        username_aad_source: UsernameSource => "usernameAADSource",
        username_source: UserEmailSource => "usernameSource",
    }
}

graph_model! {
    pub struct IosEasEmailProfileConfiguration: EasEmailProfileConfigurationBase = "#microsoft.graph.iosEasEmailProfileConfiguration" {
        account_name: String => "accountName",
        authentication_method: EasAuthenticationMethod => "authenticationMethod",
        block_moving_messages_to_other_email_accounts: bool => "blockMovingMessagesToOtherEmailAccounts",
        block_sending_email_from_third_party_apps: bool => "blockSendingEmailFromThirdPartyApps",
        block_syncing_recently_used_email_addresses: bool => "blockSyncingRecentlyUsedEmailAddresses",
        duration_of_email_to_sync: EmailSyncDuration => "durationOfEmailToSync",
        eas_services: EasServices => "easServices",
        eas_services_user_override_enabled: bool => "easServicesUserOverrideEnabled",
        email_address_source: UserEmailSource => "emailAddressSource",
        encryption_certificate_type: EmailCertificateType => "encryptionCertificateType",
        /// Exchange location, e.g. `outlook.office365.com`.
        host_name: String => "hostName",
        per_app_vpn_profile_id: String => "perAppVPNProfileId",
        require_smime: bool => "requireSmime",
        require_ssl: bool => "requireSsl",
        signing_certificate_type: EmailCertificateType => "signingCertificateType",
        smime_enable_per_message_switch: bool => "smimeEnablePerMessageSwitch",
        smime_encrypt_by_default_enabled: bool => "smimeEncryptByDefaultEnabled",
        smime_encrypt_by_default_user_override_enabled: bool => "smimeEncryptByDefaultUserOverrideEnabled",
        smime_encryption_certificate_user_override_enabled: bool => "smimeEncryptionCertificateUserOverrideEnabled",
        smime_signing_certificate_user_override_enabled: bool => "smimeSigningCertificateUserOverrideEnabled",
        smime_signing_enabled: bool => "smimeSigningEnabled",
        smime_signing_user_override_enabled: bool => "smimeSigningUserOverrideEnabled",
        use_o_auth: bool => "useOAuth",
    }
}

graph_model! {
    pub struct Windows10EasEmailProfileConfiguration: EasEmailProfileConfigurationBase = "#microsoft.graph.windows10EasEmailProfileConfiguration" {
        account_name: String => "accountName",
        duration_of_email_to_sync: EmailSyncDuration => "durationOfEmailToSync",
        email_address_source: UserEmailSource => "emailAddressSource",
        email_sync_schedule: EmailSyncSchedule => "emailSyncSchedule",
        host_name: String => "hostName",
        require_ssl: bool => "requireSsl",
        sync_calendar: bool => "syncCalendar",
        sync_contacts: bool => "syncContacts",
        sync_tasks: bool => "syncTasks",
    }
}

graph_model! {
    /// The service spells this tag with an upper-case `EAS`.
    pub struct WindowsPhoneEasEmailProfileConfiguration: EasEmailProfileConfigurationBase = "#microsoft.graph.windowsPhoneEASEmailProfileConfiguration" {
        account_name: String => "accountName",
        apply_only_to_windows_phone81: bool => "applyOnlyToWindowsPhone81",
        duration_of_email_to_sync: EmailSyncDuration => "durationOfEmailToSync",
        email_address_source: UserEmailSource => "emailAddressSource",
        email_sync_schedule: EmailSyncSchedule => "emailSyncSchedule",
        host_name: String => "hostName",
        require_ssl: bool => "requireSsl",
        sync_calendar: bool => "syncCalendar",
        sync_contacts: bool => "syncContacts",
        sync_tasks: bool => "syncTasks",
    }
}

graph_family! {
    pub enum EasEmailProfileConfigurationBaseKind: EasEmailProfileConfigurationBase {
        IosEasEmailProfileConfiguration(IosEasEmailProfileConfiguration),
        Windows10EasEmailProfileConfiguration(Windows10EasEmailProfileConfiguration),
        WindowsPhoneEasEmailProfileConfiguration(WindowsPhoneEasEmailProfileConfiguration),
    }
}
