use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    error::Result,
    models::{CategoryFacet, Product, ProductRequest},
};

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

pub async fn find_by_ids(pool: &PgPool, ids: &[i32]) -> Result<HashMap<i32, Product>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let products = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(pool)
        .await?;

    Ok(products.into_iter().map(|p| (p.id, p)).collect())
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products =
        sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY created_at DESC")
            .fetch_all(pool)
            .await?;

    Ok(products)
}

pub async fn create_product(pool: &PgPool, req: &ProductRequest) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, description, buy_price, sell_price, category, stock, image_url)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING *",
    )
    .bind(&req.name)
    .bind(&req.description)
    .bind(req.buy_price)
    .bind(req.sell_price)
    .bind(&req.category)
    .bind(req.stock)
    .bind(&req.image_url)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

pub async fn update_product(
    pool: &PgPool,
    id: i32,
    req: &ProductRequest,
) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "UPDATE products
         SET name = $1,
             description = $2,
             buy_price = $3,
             sell_price = $4,
             category = $5,
             stock = $6,
             image_url = $7,
             updated_at = NOW()
         WHERE id = $8
         RETURNING *",
    )
    .bind(&req.name)
    .bind(&req.description)
    .bind(req.buy_price)
    .bind(req.sell_price)
    .bind(&req.category)
    .bind(req.stock)
    .bind(&req.image_url)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

pub async fn delete_product(pool: &PgPool, id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Distinct category labels with product counts, most used first.
pub async fn get_category_facets(pool: &PgPool) -> Result<Vec<CategoryFacet>> {
    let facets = sqlx::query_as::<_, CategoryFacet>(
        "SELECT
            category,
            COUNT(*)::bigint as count
         FROM products
         WHERE category IS NOT NULL
           AND category != ''
         GROUP BY category
         ORDER BY count DESC, category ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(facets)
}
