use serde::Serialize;
use crate::server::model::catalog::Availability;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StockStatus {
    pub sku: String,
    pub availability: Availability,
    pub note: String,
}

impl StockStatus {
    pub fn mock(sku: String) -> Self {
        Self {
            sku,
            availability: Availability::InStock,
            note: "Available for immediate dispatch".to_string(),
        }
    }
}
