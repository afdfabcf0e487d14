use sqlx::PgPool;

use crate::{
    error::Result,
    models::{DashboardStats, Product},
};

#[derive(Debug, sqlx::FromRow)]
struct OrderCounts {
    total: i64,
    pending: i64,
    delivered: i64,
}

pub async fn get_dashboard_stats(pool: &PgPool) -> Result<DashboardStats> {
    let products_count =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(pool)
            .await?;

    let order_counts = sqlx::query_as::<_, OrderCounts>(
        "SELECT
            COUNT(*)::bigint AS total,
            (COUNT(*) FILTER (WHERE status = 'pending'))::bigint AS pending,
            (COUNT(*) FILTER (WHERE status = 'delivered'))::bigint AS delivered
         FROM orders",
    )
    .fetch_one(pool)
    .await?;

    let categories_count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(DISTINCT category) FROM products WHERE category IS NOT NULL",
    )
    .fetch_one(pool)
    .await?;

    let collections_count =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM collections")
            .fetch_one(pool)
            .await?;

    let active_soldes_count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM soldes
         WHERE is_active = true AND NOW() BETWEEN start_date AND end_date",
    )
    .fetch_one(pool)
    .await?;

    let active_offers_count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM weekly_offers
         WHERE is_active = true AND NOW() BETWEEN start_date AND end_date",
    )
    .fetch_one(pool)
    .await?;

    Ok(DashboardStats {
        products_count,
        orders_count: order_counts.total,
        pending_orders: order_counts.pending,
        delivered_orders: order_counts.delivered,
        categories_count,
        collections_count,
        active_soldes_count,
        active_offers_count,
    })
}

/// Products running low on stock, lowest first.
pub async fn get_low_stock(pool: &PgPool, threshold: i32, limit: i64) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT * FROM products WHERE stock < $1 ORDER BY stock ASC LIMIT $2",
    )
    .bind(threshold)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(products)
}
