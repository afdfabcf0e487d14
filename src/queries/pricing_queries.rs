use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Discount, Product, ProductWithPrice},
    pricing::{self, WeeklyTerms},
};

/// One product with the zero-or-one active promotion of each kind touching
/// it, as fetched by the catalog pricing query. The final price is computed
/// in Rust so the batch path and the single-product path share the exact
/// same resolution rule.
#[derive(Debug, sqlx::FromRow)]
pub struct CatalogPriceRow {
    #[sqlx(flatten)]
    pub product: Product,
    pub offer_price: Option<Decimal>,
    pub offer_description: Option<String>,
    pub discount_percent: Option<Decimal>,
    pub discount_fixed: Option<Decimal>,
}

impl CatalogPriceRow {
    fn weekly_terms(&self) -> Option<WeeklyTerms> {
        self.offer_price.map(|offer_price| WeeklyTerms {
            offer_price,
            // NOT NULL in the schema, but a degraded row must not abort
            // the whole listing
            description: self.offer_description.clone().unwrap_or_default(),
        })
    }

    fn sale_discount(&self) -> Option<Discount> {
        Discount::from_columns(self.discount_percent, self.discount_fixed)
    }

    pub fn into_product_with_price(self) -> ProductWithPrice {
        let price = pricing::resolve(
            self.product.sell_price,
            self.weekly_terms(),
            self.sale_discount(),
        );

        ProductWithPrice {
            product: self.product,
            price,
        }
    }
}

// Each CTE keeps at most one promotion per product (newest wins) so the LEFT
// JOINs cannot fan a product out into multiple rows.
const CATALOG_PRICE_QUERY: &str = "
    WITH active_offers AS (
        SELECT DISTINCT ON (wo.product_id)
            wo.product_id,
            wo.offer_price,
            wo.offer_description
        FROM weekly_offers wo
        WHERE wo.is_active = true
          AND NOW() BETWEEN wo.start_date AND wo.end_date
        ORDER BY wo.product_id, wo.created_at DESC
    ),
    active_soldes AS (
        SELECT DISTINCT ON (sp.product_id)
            sp.product_id,
            s.discount_percent,
            s.discount_fixed
        FROM soldes_products sp
        JOIN soldes s ON sp.solde_id = s.id
        WHERE s.is_active = true
          AND NOW() BETWEEN s.start_date AND s.end_date
        ORDER BY sp.product_id, s.created_at DESC
    )
    SELECT
        p.*,
        ao.offer_price,
        ao.offer_description,
        asl.discount_percent,
        asl.discount_fixed
    FROM products p
    LEFT JOIN active_offers ao ON p.id = ao.product_id
    LEFT JOIN active_soldes asl ON p.id = asl.product_id";

/// The full catalog with resolved prices, newest products first.
pub async fn get_catalog_with_prices(pool: &PgPool) -> Result<Vec<ProductWithPrice>> {
    let query = format!("{} ORDER BY p.created_at DESC", CATALOG_PRICE_QUERY);
    let rows = sqlx::query_as::<_, CatalogPriceRow>(&query)
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(CatalogPriceRow::into_product_with_price)
        .collect())
}

/// One product with its resolved price; `None` when the product id is
/// unknown (distinct from "exists but has no promotions").
pub async fn get_product_with_price(
    pool: &PgPool,
    product_id: i32,
) -> Result<Option<ProductWithPrice>> {
    let query = format!("{} WHERE p.id = $1", CATALOG_PRICE_QUERY);
    let row = sqlx::query_as::<_, CatalogPriceRow>(&query)
        .bind(product_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(CatalogPriceRow::into_product_with_price))
}
