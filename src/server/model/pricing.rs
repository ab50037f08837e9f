use serde::{Deserialize, Serialize};

/// B2B contract price for a customer/sku pair.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContractPrice {
    pub customer_id: String,
    pub sku: String,
    pub contract_price: u32,
    pub min_order_qty: u32,
    pub discount_percent: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BulkPrice {
    pub sku: String,
    pub quantity: u32,
    pub unit_price: u32,
    pub discount_percent: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BulkPricingParams {
    pub sku: Option<String>,
    pub qty: Option<u32>,
}

impl ContractPrice {
    pub fn mock(customer_id: String, sku: String) -> Self {
        Self {
            customer_id,
            sku,
            contract_price: 2499,
            min_order_qty: 10,
            discount_percent: 15,
        }
    }
}

impl BulkPrice {
    pub fn mock(sku: String, quantity: u32) -> Self {
        Self {
            sku,
            quantity,
            unit_price: 2999,
            discount_percent: 10,
        }
    }
}
