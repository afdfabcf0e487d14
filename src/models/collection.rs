use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Product;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Collection {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CollectionRequest {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CollectionProductsRequest {
    pub product_ids: Vec<i32>,
}

#[derive(Debug, Serialize)]
pub struct CollectionResponse {
    #[serde(flatten)]
    pub collection: Collection,
    pub products: Vec<Product>,
}
