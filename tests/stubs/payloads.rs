#![allow(dead_code)]
// Each integration test binary pulls in the whole stubs module but only uses
// some of it.

pub const WINDOWS10_PROFILE: &str = r##"
{
    "@odata.type": "#microsoft.graph.windows10EasEmailProfileConfiguration",
    "id": "9c2f5a5e-1c43-4c71-a2a0-0e0d2c1b7a11",
    "createdDateTime": "2023-11-02T14:05:11.123Z",
    "displayName": "Windows 10 corporate mail",
    "roleScopeTagIds": ["0"],
    "supportsScopeTags": true,
    "version": 7,
    "customDomainName": null,
    "userDomainNameSource": "fullDomainName",
    "usernameSource": "primarySmtpAddress",
    "accountName": "Contoso Mail",
    "durationOfEmailToSync": "oneMonth",
    "emailAddressSource": "userPrincipalName",
    "emailSyncSchedule": "asMessagesArrive",
    "hostName": "outlook.office365.com",
    "requireSsl": true,
    "syncCalendar": true,
    "syncContacts": false,
    "syncTasks": true,
    "deviceStatusOverview@odata.navigationLink": "deviceStatusOverview"
}
"##;

pub const IOS_PROFILE: &str = r##"
{
    "@odata.type": "#microsoft.graph.iosEasEmailProfileConfiguration",
    "id": "ios-mail",
    "displayName": "iOS mail",
    "version": 1,
    "usernameAADSource": "userPrincipalName",
    "accountName": "Contoso",
    "authenticationMethod": "certificate",
    "blockMovingMessagesToOtherEmailAccounts": true,
    "easServices": "email",
    "easServicesUserOverrideEnabled": false,
    "hostName": "mail.contoso.com",
    "perAppVPNProfileId": "vpn-42",
    "requireSmime": true,
    "signingCertificateType": "derivedCredential",
    "smimeSigningEnabled": true,
    "useOAuth": true
}
"##;

pub const UNKNOWN_CONFIGURATION: &str = r##"
{
    "@odata.type": "#microsoft.graph.macOSCustomConfiguration",
    "id": "mac-custom",
    "displayName": "macOS custom",
    "payloadName": "com.contoso.settings",
    "payload": "PD94bWwgdmVyc2lvbj0iMS4wIj8+"
}
"##;

pub const DEVICE_CONFIGURATIONS_PAGE: &str = r##"
{
    "@odata.count": 4,
    "@odata.nextLink": "https://graph.microsoft.com/beta/deviceManagement/deviceConfigurations?$skiptoken=page2",
    "value": [
        {"@odata.type": "#microsoft.graph.androidEasEmailProfileConfiguration", "id": "a", "syncNotes": true},
        {"@odata.type": "#microsoft.graph.macOSCustomConfiguration", "id": "b"},
        {"@odata.type": "#microsoft.graph.windowsPhoneEASEmailProfileConfiguration", "id": "c", "applyOnlyToWindowsPhone81": false},
        {"@odata.type": "#microsoft.graph.iosEasEmailProfileConfiguration", "id": "d"}
    ]
}
"##;

pub const CLOUD_PC: &str = r##"
{
    "@odata.type": "#microsoft.graph.cloudPC",
    "id": "ac74ae8b-85f7-4272-88cc-54192674ffff",
    "aadDeviceId": "61204a4b-6b0e-4f9c-a8f3-000000000000",
    "displayName": "Demo-0",
    "gracePeriodEndDateTime": "2024-03-01T09:00:00+09:00",
    "imageDisplayName": "Windows 11 Enterprise",
    "lastModifiedDateTime": "2024-02-20T16:05:07.3456789Z",
    "managedDeviceName": "CPC-demo-0",
    "onPremisesConnectionName": "On-premises connection 1",
    "osVersion": "windows11",
    "provisioningPolicyName": "Demo policy",
    "provisioningType": "dedicated",
    "servicePlanName": "Cloud PC Enterprise 2vCPU/4GB/128GB",
    "servicePlanType": "enterprise",
    "status": "provisionedWithWarnings",
    "diskEncryptionState": "encryptedUsingPlatformManagedKey",
    "userAccountType": "standardUser",
    "userPrincipalName": "pat@contoso.com",
    "connectivityResult": {"status": "available", "updatedDateTime": "2024-02-20T16:00:00Z"},
    "lastLoginResult": {"time": "2024-02-20T08:00:00.25-08:00"},
    "partnerAgentInstallResults": [
        {"installStatus": "licensed", "isThirdPartyPartner": true, "partnerAgentName": "vMware", "retriable": false}
    ],
    "statusDetails": {
        "code": "ingestionFailed",
        "message": "Image ingestion failed",
        "additionalInformation": [{"name": "correlationId", "value": "1234"}]
    }
}
"##;

pub const BAD_ENUM_PROFILE: &str = r##"
{
    "@odata.type": "#microsoft.graph.windows10EasEmailProfileConfiguration",
    "accountName": "Acct1",
    "emailSyncSchedule": "everyFewMinutes"
}
"##;
