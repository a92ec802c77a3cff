//! Paged collection wrappers. Only the page itself is modeled; following
//! `@odata.nextLink` is up to the caller.

use super::{CloudPc, DeviceConfigurationKind, EasEmailProfileConfigurationBaseKind};

graph_model! {
    pub struct BaseCollectionPaginationCountResponse {
        odata_count: i64 => "@odata.count",
        odata_next_link: String => "@odata.nextLink",
    }
}

graph_model! {
    pub struct CloudPcCollectionResponse: BaseCollectionPaginationCountResponse {
        value: Vec<CloudPc> => "value",
    }
}

graph_model! {
    pub struct DeviceConfigurationCollectionResponse: BaseCollectionPaginationCountResponse {
        value: Vec<DeviceConfigurationKind> => "value",
    }
}

graph_model! {
    pub struct EasEmailProfileConfigurationBaseCollectionResponse: BaseCollectionPaginationCountResponse {
        value: Vec<EasEmailProfileConfigurationBaseKind> => "value",
    }
}
