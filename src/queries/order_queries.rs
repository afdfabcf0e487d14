use sqlx::PgPool;

use crate::{
    error::Result,
    models::{CreateOrderRequest, Order, OrderStatus},
};

pub async fn create_order(pool: &PgPool, req: &CreateOrderRequest) -> Result<Order> {
    let order = sqlx::query_as::<_, Order>(
        "INSERT INTO orders (product_id, customer_name, customer_phone, customer_location, status, order_date)
         VALUES ($1, $2, $3, $4, 'pending', NOW())
         RETURNING *",
    )
    .bind(req.product_id)
    .bind(&req.customer_name)
    .bind(&req.customer_phone)
    .bind(&req.customer_location)
    .fetch_one(pool)
    .await?;

    Ok(order)
}

/// Sets the order status. `delivered_date` is stamped when the order becomes
/// delivered and cleared on any other transition.
pub async fn update_status(
    pool: &PgPool,
    id: i32,
    status: OrderStatus,
) -> Result<Option<Order>> {
    let order = sqlx::query_as::<_, Order>(
        "UPDATE orders
         SET status = $1,
             delivered_date = CASE WHEN $1 = 'delivered' THEN NOW() ELSE NULL END
         WHERE id = $2
         RETURNING *",
    )
    .bind(status.as_str())
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(order)
}

pub async fn get_recent(pool: &PgPool, limit: i64) -> Result<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(
        "SELECT * FROM orders ORDER BY order_date DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(orders)
}

/// Whether any order references the product. Products with orders must not
/// be deleted.
pub async fn exists_for_product(pool: &PgPool, product_id: i32) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM orders WHERE product_id = $1)",
    )
    .bind(product_id)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}
