use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Collection, CollectionRequest, Product},
};

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Collection>> {
    let collection = sqlx::query_as::<_, Collection>("SELECT * FROM collections WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(collection)
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Collection>> {
    let collections =
        sqlx::query_as::<_, Collection>("SELECT * FROM collections ORDER BY created_at DESC")
            .fetch_all(pool)
            .await?;

    Ok(collections)
}

pub async fn get_collection_products(pool: &PgPool, collection_id: i32) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT p.* FROM products p
         JOIN collection_products cp ON p.id = cp.product_id
         WHERE cp.collection_id = $1
         ORDER BY p.created_at DESC",
    )
    .bind(collection_id)
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn create_collection(pool: &PgPool, req: &CollectionRequest) -> Result<Collection> {
    let collection = sqlx::query_as::<_, Collection>(
        "INSERT INTO collections (name, description, image_url)
         VALUES ($1, $2, $3)
         RETURNING *",
    )
    .bind(&req.name)
    .bind(&req.description)
    .bind(&req.image_url)
    .fetch_one(pool)
    .await?;

    Ok(collection)
}

pub async fn update_collection(
    pool: &PgPool,
    id: i32,
    req: &CollectionRequest,
) -> Result<Option<Collection>> {
    let collection = sqlx::query_as::<_, Collection>(
        "UPDATE collections
         SET name = $1,
             description = $2,
             image_url = $3
         WHERE id = $4
         RETURNING *",
    )
    .bind(&req.name)
    .bind(&req.description)
    .bind(&req.image_url)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(collection)
}

/// Deletes a collection. Membership rows cascade; the products survive.
pub async fn delete_collection(pool: &PgPool, id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM collections WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Replaces the member set of a collection.
pub async fn set_collection_products(
    pool: &PgPool,
    collection_id: i32,
    product_ids: &[i32],
) -> Result<()> {
    let mut product_ids = product_ids.to_vec();
    product_ids.sort_unstable();
    product_ids.dedup();

    sqlx::query("DELETE FROM collection_products WHERE collection_id = $1")
        .bind(collection_id)
        .execute(pool)
        .await?;

    if !product_ids.is_empty() {
        let mut query_builder = sqlx::QueryBuilder::new(
            "INSERT INTO collection_products (collection_id, product_id) ",
        );

        query_builder.push_values(product_ids, |mut b, product_id| {
            b.push_bind(collection_id).push_bind(product_id);
        });

        query_builder.build().execute(pool).await?;
    }

    Ok(())
}
