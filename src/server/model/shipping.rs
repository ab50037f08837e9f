use chrono::NaiveDate;
use serde::Serialize;
use crate::server::model::order::mock_delivery_date;

/// Estimated delivery for a tracking number.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ShippingEta {
    pub tracking_no: String,
    pub eta: NaiveDate,
}

impl ShippingEta {
    pub fn mock(tracking_no: String) -> Self {
        Self {
            tracking_no,
            eta: mock_delivery_date(),
        }
    }
}
