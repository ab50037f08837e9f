use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::server::model::order::OrderStatus;

/// Line item attached to the canned OMS order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderItem {
    pub sku: String,
    pub price: u32,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum PaymentStatus {
    Paid,
    Unpaid,
    Refunded,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderDetail {
    pub order_id: String,
    pub status: OrderStatus,
    pub order_date: NaiveDate,
    pub payment_status: PaymentStatus,
    pub items: Vec<OrderItem>,
}

/// Receipt for a cancel request; the id echoes the order it was raised for.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CancelReceipt {
    pub cancel_request_id: String,
    pub status: OrderStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderItemsResponse {
    pub order_id: String,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderException {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderExceptionsResponse {
    pub order_id: String,
    pub exceptions: Vec<OrderException>,
}

fn mock_items() -> Vec<OrderItem> {
    vec![OrderItem {
        sku: "SKU1001".to_string(),
        price: 2999,
        quantity: 1,
    }]
}

impl OrderDetail {
    pub fn mock(order_id: String) -> Self {
        Self {
            order_id,
            status: OrderStatus::Shipped,
            order_date: NaiveDate::from_ymd_opt(2025, 10, 10).expect("valid calendar date"),
            payment_status: PaymentStatus::Paid,
            items: mock_items(),
        }
    }
}

impl CancelReceipt {
    pub fn mock(order_id: &str) -> Self {
        Self {
            cancel_request_id: format!("CANCEL_REQ_{order_id}"),
            status: OrderStatus::Cancelled,
        }
    }
}

impl OrderItemsResponse {
    pub fn mock(order_id: String) -> Self {
        Self {
            order_id,
            items: mock_items(),
        }
    }
}

impl OrderExceptionsResponse {
    /// The canned order has no delivery exceptions.
    pub fn mock(order_id: String) -> Self {
        Self {
            order_id,
            exceptions: vec![],
        }
    }
}
