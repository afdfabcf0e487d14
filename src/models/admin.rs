use serde::Serialize;

use super::{Order, Product};

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub products_count: i64,
    pub orders_count: i64,
    pub pending_orders: i64,
    pub delivered_orders: i64,
    pub categories_count: i64,
    pub collections_count: i64,
    pub active_soldes_count: i64,
    pub active_offers_count: i64,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub recent_orders: Vec<Order>,
    pub low_stock: Vec<Product>,
}
