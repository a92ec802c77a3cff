//! Cloud PC entity and the complex values it nests.

use chrono::{DateTime, FixedOffset, NaiveDate};

use super::{
    CloudPcConnectivityStatus, CloudPcDiskEncryptionState, CloudPcGalleryImageStatus,
    CloudPcOperatingSystem,
    CloudPcPartnerAgentInstallStatus, CloudPcPartnerAgentName, CloudPcProvisioningType,
    CloudPcServicePlanType, CloudPcStatus, CloudPcUserAccountType, Entity,
};

graph_model! {
    pub struct CloudPc: Entity ("#microsoft.graph.cloudPC") {
        aad_device_id: String => "aadDeviceId",
        connectivity_result: CloudPcConnectivityResult => "connectivityResult",
        disk_encryption_state: CloudPcDiskEncryptionState => "diskEncryptionState",
        display_name: String => "displayName",
        /// End of the grace period once the license or policy was removed.
        grace_period_end_date_time: DateTime<FixedOffset> => "gracePeriodEndDateTime",
        image_display_name: String => "imageDisplayName",
        last_login_result: CloudPcLoginResult => "lastLoginResult",
        last_modified_date_time: DateTime<FixedOffset> => "lastModifiedDateTime",
        managed_device_id: String => "managedDeviceId",
        managed_device_name: String => "managedDeviceName",
        on_premises_connection_name: String => "onPremisesConnectionName",
        os_version: CloudPcOperatingSystem => "osVersion",
        partner_agent_install_results: Vec<CloudPcPartnerAgentInstallResult> => "partnerAgentInstallResults",
        provisioning_policy_id: String => "provisioningPolicyId",
        provisioning_policy_name: String => "provisioningPolicyName",
        provisioning_type: CloudPcProvisioningType => "provisioningType",
        service_plan_id: String => "servicePlanId",
        service_plan_name: String => "servicePlanName",
        service_plan_type: CloudPcServicePlanType => "servicePlanType",
        status: CloudPcStatus => "status",
        status_details: CloudPcStatusDetails => "statusDetails",
        user_account_type: CloudPcUserAccountType => "userAccountType",
        user_principal_name: String => "userPrincipalName",
    }
}

graph_model! {
    pub struct CloudPcConnectivityResult {
        odata_type: String => "@odata.type",
        status: CloudPcConnectivityStatus => "status",
        updated_date_time: DateTime<FixedOffset> => "updatedDateTime",
    }
}

graph_model! {
    /// Marketplace image a Cloud PC can be provisioned from. Read-only.
    pub struct CloudPcGalleryImage: Entity ("#microsoft.graph.cloudPcGalleryImage") {
        display_name: String => "displayName",
        /// Last day of long-term support.
        end_date: NaiveDate => "endDate",
        expiration_date: NaiveDate => "expirationDate",
        offer: String => "offer",
        offer_display_name: String => "offerDisplayName",
        publisher: String => "publisher",
        recommended_sku: String => "recommendedSku",
        size_in_gb: i32 => "sizeInGB",
        sku: String => "sku",
        sku_display_name: String => "skuDisplayName",
        start_date: NaiveDate => "startDate",
        status: CloudPcGalleryImageStatus => "status",
    }
}

graph_model! {
    pub struct CloudPcLoginResult {
        odata_type: String => "@odata.type",
        time: DateTime<FixedOffset> => "time",
    }
}

graph_model! {
    pub struct CloudPcPartnerAgentInstallResult {
        install_status: CloudPcPartnerAgentInstallStatus => "installStatus",
        is_third_party_partner: bool => "isThirdPartyPartner",
        odata_type: String => "@odata.type",
        partner_agent_name: CloudPcPartnerAgentName => "partnerAgentName",
        retriable: bool => "retriable",
    }
}

graph_model! {
    pub struct CloudPcStatusDetails {
        additional_information: Vec<KeyValuePair> => "additionalInformation",
        code: String => "code",
        message: String => "message",
        odata_type: String => "@odata.type",
    }
}

graph_model! {
    pub struct KeyValuePair {
        name: String => "name",
        odata_type: String => "@odata.type",
        value: String => "value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serialization::{
        from_value, to_value, AdditionalDataHolder, Nullable, SerializationError,
    };

    fn cloud_pc_payload() -> serde_json::Value {
        json!({
            "id": "pc-01",
            "@odata.type": "#microsoft.graph.cloudPC",
            "displayName": "Demo PC",
            "connectivityResult": {
                "status": "availableWithWarning",
                "updatedDateTime": "2024-02-01T10:00:00Z",
                "failedHealthCheckItems": []
            },
            "lastLoginResult": {"time": "2024-02-01T09:00:00Z"},
            "osVersion": "windows11",
            "partnerAgentInstallResults": [
                {"installStatus": "installed", "partnerAgentName": "citrix", "retriable": false},
                {"installStatus": "installFailed", "partnerAgentName": "hp", "retriable": true}
            ],
            "status": "provisioned",
            "statusDetails": {
                "code": "intuneEnrollFailed",
                "message": null,
                "additionalInformation": [{"name": "correlationId", "value": "52367774"}]
            },
            "userAccountType": "administrator"
        })
    }

    #[test]
    fn test_decode_nested_values() {
        let pc: CloudPc = from_value(&cloud_pc_payload()).unwrap();

        assert_eq!(pc.os_version, Nullable::Value(CloudPcOperatingSystem::Windows11));
        let connectivity = pc.connectivity_result.value().unwrap();
        assert_eq!(
            connectivity.status,
            Nullable::Value(CloudPcConnectivityStatus::AvailableWithWarning)
        );
        assert!(connectivity.additional_data().contains_key("failedHealthCheckItems"));

        let results = pc.partner_agent_install_results.value().unwrap();
        assert_eq!(results[1].partner_agent_name, Nullable::Value(CloudPcPartnerAgentName::Hp));
        assert_eq!(results[1].retriable, Nullable::Value(true));

        let details = pc.status_details.value().unwrap();
        assert!(details.message.is_null());
        let info = details.additional_information.value().unwrap();
        assert_eq!(info[0].value.as_deref(), Some("52367774"));
    }

    #[test]
    fn test_round_trip() {
        let payload = cloud_pc_payload();
        let pc: CloudPc = from_value(&payload).unwrap();
        assert_eq!(to_value(&pc).unwrap(), payload);
    }

    #[test]
    fn test_cloud_pc_is_not_stamped() {
        assert_eq!(CloudPc::ODATA_TYPE, "#microsoft.graph.cloudPC");
        assert!(CloudPc::new().odata_type.is_unset());
    }

    #[test]
    fn test_nested_null_object() {
        let pc: CloudPc = from_value(&json!({"statusDetails": null})).unwrap();
        assert!(pc.status_details.is_null());
        assert_eq!(to_value(&pc).unwrap(), json!({"statusDetails": null}));
    }

    #[test]
    fn test_remote_action_result_is_kept_as_additional_data() {
        let payload = json!({
            "displayName": "pc",
            "lastRemoteActionResult": {"actionName": "Reboot", "actionState": "done"}
        });
        let pc: CloudPc = from_value(&payload).unwrap();
        assert_eq!(
            pc.additional_data().get("lastRemoteActionResult"),
            Some(&json!({"actionName": "Reboot", "actionState": "done"}))
        );
        assert_eq!(to_value(&pc).unwrap(), payload);
    }

    #[test]
    fn test_gallery_image_dates() {
        let payload = json!({
            "id": "MicrosoftWindowsDesktop_windows-ent-cpc_win11-22h2-ent-cpc-m365",
            "@odata.type": "#microsoft.graph.cloudPcGalleryImage",
            "displayName": "Windows 11 Enterprise + Microsoft 365 Apps 22H2",
            "endDate": "2025-10-14",
            "expirationDate": "2026-04-14",
            "sizeInGB": 64,
            "startDate": "2022-09-20",
            "status": "supportedWithWarning"
        });
        let image: CloudPcGalleryImage = from_value(&payload).unwrap();

        assert_eq!(image.end_date, Nullable::Value(NaiveDate::from_ymd_opt(2025, 10, 14).unwrap()));
        assert!(image.expiration_date.value() > image.start_date.value());
        assert_eq!(image.size_in_gb, Nullable::Value(64));
        assert_eq!(image.status, Nullable::Value(CloudPcGalleryImageStatus::SupportedWithWarning));
        assert_eq!(to_value(&image).unwrap(), payload);
    }

    #[test]
    fn test_gallery_image_rejects_date_time() {
        let result = from_value::<CloudPcGalleryImage>(&json!({"endDate": "2025-10-14T00:00:00Z"}));
        assert!(matches!(result, Err(SerializationError::InvalidDate { .. })));
    }
}
