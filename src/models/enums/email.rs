graph_enum! {
    pub enum EasAuthenticationMethod {
        UsernameAndPassword = "usernameAndPassword",
        Certificate = "certificate",
        DerivedCredential = "derivedCredential",
    }
}

graph_enum! {
    /// How far back mail is synchronised.
    pub enum EmailSyncDuration {
        UserDefined = "userDefined",
        OneDay = "oneDay",
        ThreeDays = "threeDays",
        OneWeek = "oneWeek",
        TwoWeeks = "twoWeeks",
        OneMonth = "oneMonth",
        Unlimited = "unlimited",
    }
}

graph_enum! {
    pub enum UserEmailSource {
        UserPrincipalName = "userPrincipalName",
        PrimarySmtpAddress = "primarySmtpAddress",
    }
}

graph_enum! {
    pub enum EmailSyncSchedule {
        UserDefined = "userDefined",
        AsMessagesArrive = "asMessagesArrive",
        Manual = "manual",
        FifteenMinutes = "fifteenMinutes",
        ThirtyMinutes = "thirtyMinutes",
        SixtyMinutes = "sixtyMinutes",
        BasedOnMyUsage = "basedOnMyUsage",
    }
}

graph_enum! {
    pub enum DomainNameSource {
        FullDomainName = "fullDomainName",
        NetBiosDomainName = "netBiosDomainName",
    }
}

graph_enum! {
    pub enum UsernameSource {
        UserPrincipalName = "userPrincipalName",
        PrimarySmtpAddress = "primarySmtpAddress",
        SamAccountName = "samAccountName",
    }
}

graph_enum! {
    pub enum AndroidUsernameSource {
        Username = "username",
        UserPrincipalName = "userPrincipalName",
        SamAccountName = "samAccountName",
        PrimarySmtpAddress = "primarySmtpAddress",
    }
}

graph_enum! {
    /// Exchange ActiveSync services. The service sends a single value, not a
    /// combination.
    pub enum EasServices {
        None = "none",
        Calendars = "calendars",
        Contacts = "contacts",
        Email = "email",
        Notes = "notes",
        Reminders = "reminders",
    }
}

graph_enum! {
    pub enum EmailCertificateType {
        None = "none",
        Certificate = "certificate",
        DerivedCredential = "derivedCredential",
    }
}
