use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Shipping state of an order.
///
/// The mock only ever reports [`OrderStatus::Shipped`] from the order lookup
/// endpoint; the full set exists so fixtures elsewhere stay on one enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum OrderStatus {
    Created,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

/// Canned order descriptor served to every caller of `GET /orders/{userId}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderRecord {
    pub order_id: String,
    pub status: OrderStatus,
    pub delivery_date: NaiveDate,
}

pub(crate) const MOCK_ORDER_ID: &str = "ORD12345";

impl OrderRecord {
    /// The fixed record, independent of the requested user id.
    pub fn mock() -> Self {
        Self {
            order_id: MOCK_ORDER_ID.to_string(),
            status: OrderStatus::Shipped,
            delivery_date: mock_delivery_date(),
        }
    }
}

/// Delivery date shared by the order and shipping fixtures.
pub(crate) fn mock_delivery_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 25).expect("valid calendar date")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mock_record_serializes_to_the_fixed_payload() {
        let json = serde_json::to_string(&OrderRecord::mock()).unwrap();
        assert_eq!(
            json,
            r#"{"orderId":"ORD12345","status":"SHIPPED","deliveryDate":"2025-10-25"}"#
        );
    }

    #[test]
    fn status_uses_screaming_snake_case_on_the_wire() {
        assert_eq!(serde_json::to_string(&OrderStatus::Created).unwrap(), r#""CREATED""#);
        assert_eq!(serde_json::to_string(&OrderStatus::Cancelled).unwrap(), r#""CANCELLED""#);
    }
}
