use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Product, Solde},
};

/// Soldes currently in their active window, newest first.
pub async fn get_active(pool: &PgPool) -> Result<Vec<Solde>> {
    let soldes = sqlx::query_as::<_, Solde>(
        "SELECT * FROM soldes
         WHERE is_active = true
           AND NOW() BETWEEN start_date AND end_date
         ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(soldes)
}

#[derive(Debug, sqlx::FromRow)]
struct SoldeProductRow {
    solde_id: i32,
    #[sqlx(flatten)]
    product: Product,
}

/// Member products for a batch of soldes, grouped by solde id.
pub async fn get_products_for_soldes(
    pool: &PgPool,
    solde_ids: &[i32],
) -> Result<HashMap<i32, Vec<Product>>> {
    if solde_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = sqlx::query_as::<_, SoldeProductRow>(
        "SELECT sp.solde_id, p.*
         FROM soldes_products sp
         JOIN products p ON sp.product_id = p.id
         WHERE sp.solde_id = ANY($1)
         ORDER BY sp.solde_id, p.created_at DESC",
    )
    .bind(solde_ids)
    .fetch_all(pool)
    .await?;

    let mut products_map: HashMap<i32, Vec<Product>> = HashMap::new();
    for row in rows {
        products_map.entry(row.solde_id).or_default().push(row.product);
    }

    Ok(products_map)
}
