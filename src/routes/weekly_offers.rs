use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{WeeklyOffer, WeeklyOfferRequest, WeeklyOfferResponse},
    queries::{product_queries, weekly_offer_queries},
};

/// Active offers joined with their products, soonest-ending first.
pub async fn active_offers(
    State(state): State<AppState>,
) -> Result<Json<Vec<WeeklyOfferResponse>>> {
    let offers = weekly_offer_queries::get_active(&state.db).await?;

    let product_ids: Vec<i32> = offers.iter().map(|o| o.product_id).collect();
    let mut products = product_queries::find_by_ids(&state.db, &product_ids).await?;

    let response = offers
        .into_iter()
        .filter_map(|offer| {
            let product = products.remove(&offer.product_id)?;
            Some(WeeklyOfferResponse { offer, product })
        })
        .collect();

    Ok(Json(response))
}

pub async fn get_offer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<WeeklyOfferResponse>> {
    let offer = weekly_offer_queries::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Weekly offer not found".to_string()))?;

    let product = product_queries::find_by_id(&state.db, offer.product_id)
        .await?
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(WeeklyOfferResponse { offer, product }))
}

fn validate_offer_request(req: &WeeklyOfferRequest) -> Result<()> {
    if req.offer_description.trim().is_empty() {
        return Err(AppError::BadRequest(
            "offer_description is required".to_string(),
        ));
    }

    if req.offer_price < Decimal::ZERO {
        return Err(AppError::BadRequest(
            "offer_price must not be negative".to_string(),
        ));
    }

    if req.start_date > req.end_date {
        return Err(AppError::BadRequest(
            "start_date must not be after end_date".to_string(),
        ));
    }

    Ok(())
}

pub async fn create_offer(
    State(state): State<AppState>,
    Json(payload): Json<WeeklyOfferRequest>,
) -> Result<Json<WeeklyOffer>> {
    validate_offer_request(&payload)?;

    if product_queries::find_by_id(&state.db, payload.product_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    let offer = weekly_offer_queries::create_offer(&state.db, &payload).await?;

    Ok(Json(offer))
}

pub async fn update_offer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<WeeklyOfferRequest>,
) -> Result<Json<WeeklyOffer>> {
    validate_offer_request(&payload)?;

    if product_queries::find_by_id(&state.db, payload.product_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    let offer = weekly_offer_queries::update_offer(&state.db, id, &payload)
        .await?
        .ok_or(AppError::NotFound("Weekly offer not found".to_string()))?;

    Ok(Json(offer))
}

pub async fn delete_offer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    if !weekly_offer_queries::delete_offer(&state.db, id).await? {
        return Err(AppError::NotFound("Weekly offer not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::dec;

    use super::*;

    fn request() -> WeeklyOfferRequest {
        WeeklyOfferRequest {
            product_id: 1,
            offer_description: "Prix choc de la semaine".to_string(),
            offer_price: dec!(65),
            start_date: Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 7, 7, 23, 59, 59).unwrap(),
            is_active: None,
        }
    }

    #[test]
    fn accepts_a_valid_request() {
        assert!(validate_offer_request(&request()).is_ok());
    }

    #[test]
    fn rejects_blank_description() {
        let mut req = request();
        req.offer_description = " ".to_string();

        assert!(validate_offer_request(&req).is_err());
    }

    #[test]
    fn rejects_negative_price() {
        let mut req = request();
        req.offer_price = dec!(-5);

        assert!(validate_offer_request(&req).is_err());
    }

    #[test]
    fn rejects_inverted_window() {
        let mut req = request();
        std::mem::swap(&mut req.start_date, &mut req.end_date);

        assert!(validate_offer_request(&req).is_err());
    }

    #[test]
    fn start_equal_to_end_is_a_valid_one_instant_window() {
        let mut req = request();
        req.end_date = req.start_date;

        assert!(validate_offer_request(&req).is_ok());
    }
}
