use super::{
    AndroidUsernameSource, DeviceConfiguration, DomainNameSource, EasAuthenticationMethod,
    EmailSyncDuration, EmailSyncSchedule, UserEmailSource,
};

graph_model! {
    /// Exchange ActiveSync profile for Android. Not part of the EAS base
    /// hierarchy: it derives from `DeviceConfiguration` directly and carries
    /// its own domain and username settings.
    pub struct AndroidEasEmailProfileConfiguration: DeviceConfiguration = "#microsoft.graph.androidEasEmailProfileConfiguration" {
        account_name: String => "accountName",
        authentication_method: EasAuthenticationMethod => "authenticationMethod",
        custom_domain_name: String => "customDomainName",
        duration_of_email_to_sync: EmailSyncDuration => "durationOfEmailToSync",
        email_address_source: UserEmailSource => "emailAddressSource",
        email_sync_schedule: EmailSyncSchedule => "emailSyncSchedule",
        host_name: String => "hostName",
        require_smime: bool => "requireSmime",
        require_ssl: bool => "requireSsl",
        sync_calendar: bool => "syncCalendar",
        sync_contacts: bool => "syncContacts",
        sync_notes: bool => "syncNotes",
        sync_tasks: bool => "syncTasks",
        user_domain_name_source: DomainNameSource => "userDomainNameSource",
        username_source: AndroidUsernameSource => "usernameSource",
    }
}
