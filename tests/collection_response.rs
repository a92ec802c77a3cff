use betasdk::models::*;
use betasdk::serialization::{from_str, from_value, to_value, AdditionalDataHolder, Nullable};
use serde_json::{json, Value};

mod stubs;

#[test]
fn page_preserves_length_order_and_types() {
    let page: DeviceConfigurationCollectionResponse =
        from_str(stubs::payloads::DEVICE_CONFIGURATIONS_PAGE).unwrap();
    let value = page.value.value().unwrap();

    assert_eq!(page.odata_count, Nullable::Value(4));
    assert_eq!(value.len(), 4);
    let resolved: Vec<_> = value.iter().map(GraphType::type_name).collect();
    assert_eq!(
        resolved,
        [
            "AndroidEasEmailProfileConfiguration",
            "DeviceConfiguration",
            "WindowsPhoneEasEmailProfileConfiguration",
            "IosEasEmailProfileConfiguration",
        ]
    );
    let ids: Vec<_> = value.iter().map(|item| item.as_base().id.as_deref()).collect();
    assert_eq!(ids, [Some("a"), Some("b"), Some("c"), Some("d")]);

    let expected: Value = serde_json::from_str(stubs::payloads::DEVICE_CONFIGURATIONS_PAGE).unwrap();
    assert_eq!(to_value(&page).unwrap(), expected);
}

#[test]
fn eas_page_falls_back_per_element() {
    let page: EasEmailProfileConfigurationBaseCollectionResponse = from_value(&json!({
        "value": [
            {"@odata.type": IosEasEmailProfileConfiguration::ODATA_TYPE, "hostName": "a"},
            {"@odata.type": AndroidEasEmailProfileConfiguration::ODATA_TYPE, "hostName": "b"}
        ]
    }))
    .unwrap();
    let value = page.value.value().unwrap();

    assert!(matches!(
        &value[0],
        EasEmailProfileConfigurationBaseKind::IosEasEmailProfileConfiguration(ios)
            if ios.host_name.as_deref() == Some("a")
    ));
    assert!(matches!(
        &value[1],
        EasEmailProfileConfigurationBaseKind::Base(base)
            if base.additional_data().contains_key("hostName")
    ));
}

#[test]
fn bad_element_fails_the_page() {
    let result = from_value::<CloudPcCollectionResponse>(&json!({
        "value": [{"id": "ok"}, {"id": "bad", "status": "sleeping"}]
    }));
    assert!(result.is_err());
}

#[test]
fn metadata_only_page() {
    let page: BaseCollectionPaginationCountResponse =
        from_value(&json!({"@odata.count": 0, "value": []})).unwrap();
    assert_eq!(page.odata_count, Nullable::Value(0));
    assert!(page.odata_next_link.is_unset());
    assert_eq!(to_value(&page).unwrap(), json!({"@odata.count": 0, "value": []}));
}
