use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::PriceInfo;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub buy_price: Decimal,
    pub sell_price: Decimal,
    pub category: Option<String>,
    pub stock: i32,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Request types

#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub buy_price: Decimal,
    pub sell_price: Decimal,
    pub category: Option<String>,
    pub stock: i32,
    pub image_url: Option<String>,
}

// Response types

#[derive(Debug, Serialize)]
pub struct ProductWithPrice {
    #[serde(flatten)]
    pub product: Product,
    pub price: PriceInfo,
}
