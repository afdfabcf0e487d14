use sqlx::PgPool;

use crate::{
    error::Result,
    models::{WeeklyOffer, WeeklyOfferRequest},
};

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<WeeklyOffer>> {
    let offer = sqlx::query_as::<_, WeeklyOffer>("SELECT * FROM weekly_offers WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(offer)
}

/// Offers currently in their active window, soonest-ending first.
pub async fn get_active(pool: &PgPool) -> Result<Vec<WeeklyOffer>> {
    let offers = sqlx::query_as::<_, WeeklyOffer>(
        "SELECT * FROM weekly_offers
         WHERE is_active = true
           AND NOW() BETWEEN start_date AND end_date
         ORDER BY end_date ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(offers)
}

pub async fn create_offer(pool: &PgPool, req: &WeeklyOfferRequest) -> Result<WeeklyOffer> {
    let offer = sqlx::query_as::<_, WeeklyOffer>(
        "INSERT INTO weekly_offers (product_id, offer_description, offer_price, start_date, end_date, is_active)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING *",
    )
    .bind(req.product_id)
    .bind(&req.offer_description)
    .bind(req.offer_price)
    .bind(req.start_date)
    .bind(req.end_date)
    .bind(req.is_active.unwrap_or(true))
    .fetch_one(pool)
    .await?;

    Ok(offer)
}

pub async fn update_offer(
    pool: &PgPool,
    id: i32,
    req: &WeeklyOfferRequest,
) -> Result<Option<WeeklyOffer>> {
    let offer = sqlx::query_as::<_, WeeklyOffer>(
        "UPDATE weekly_offers
         SET product_id = $1,
             offer_description = $2,
             offer_price = $3,
             start_date = $4,
             end_date = $5,
             is_active = $6
         WHERE id = $7
         RETURNING *",
    )
    .bind(req.product_id)
    .bind(&req.offer_description)
    .bind(req.offer_price)
    .bind(req.start_date)
    .bind(req.end_date)
    .bind(req.is_active.unwrap_or(true))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(offer)
}

pub async fn delete_offer(pool: &PgPool, id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM weekly_offers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
