use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum Availability {
    InStock,
    OutOfStock,
}

/// Catalog entry as returned from search.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Product {
    pub sku: String,
    pub name: String,
    pub price: u32,
    pub category: String,
    pub features: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductDetail {
    pub sku: String,
    pub description: String,
    pub availability: Availability,
    pub rating: f32,
    pub b2b_pricing_available: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchResponse {
    pub query: String,
    pub results: Vec<Product>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchParams {
    pub q: Option<String>,
}

impl ProductDetail {
    pub fn mock(sku: String) -> Self {
        Self {
            sku,
            description: "High-quality audio device with premium features.".to_string(),
            availability: Availability::InStock,
            rating: 4.5,
            b2b_pricing_available: true,
        }
    }
}

impl SearchResponse {
    /// Same two canned products for every query.
    pub fn mock(query: String) -> Self {
        Self {
            query,
            results: vec![
                Product {
                    sku: "SKU123".to_string(),
                    name: "Noise Cancelling Headphones".to_string(),
                    price: 2999,
                    category: "Electronics".to_string(),
                    features: vec![
                        "ANC".to_string(),
                        "Bluetooth".to_string(),
                        "40h Battery".to_string(),
                    ],
                },
                Product {
                    sku: "SKU456".to_string(),
                    name: "Wireless Earbuds Pro".to_string(),
                    price: 1999,
                    category: "Electronics".to_string(),
                    features: vec![
                        "Noise Reduction".to_string(),
                        "Fast Charging".to_string(),
                    ],
                },
            ],
        }
    }
}
