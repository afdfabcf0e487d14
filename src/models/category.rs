use serde::Serialize;

/// A distinct product category label and how many products carry it.
/// Categories are free labels on products, not a table of their own.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CategoryFacet {
    pub category: String,
    pub count: i64,
}
