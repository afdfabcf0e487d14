use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// DB models

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: i32,
    pub product_id: i32,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_location: String,
    pub status: String,
    pub order_date: DateTime<Utc>,
    pub delivered_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(OrderStatus::Pending),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

// Request types

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub product_id: i32,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_location: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_statuses() {
        assert_eq!(OrderStatus::parse("pending"), Some(OrderStatus::Pending));
        assert_eq!(OrderStatus::parse("delivered"), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::parse("cancelled"), Some(OrderStatus::Cancelled));
    }

    #[test]
    fn rejects_unknown_status() {
        assert_eq!(OrderStatus::parse("shipped"), None);
        assert_eq!(OrderStatus::parse(""), None);
        assert_eq!(OrderStatus::parse("Pending"), None);
    }

    #[test]
    fn as_str_round_trips() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
    }
}
