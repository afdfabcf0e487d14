use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Product;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WeeklyOffer {
    pub id: i32,
    pub product_id: i32,
    pub offer_description: String,
    pub offer_price: Decimal,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct WeeklyOfferRequest {
    pub product_id: i32,
    pub offer_description: String,
    pub offer_price: Decimal,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct WeeklyOfferResponse {
    #[serde(flatten)]
    pub offer: WeeklyOffer,
    pub product: Product,
}
