use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{CategoryFacet, Product, ProductRequest, ProductWithPrice},
    queries::{order_queries, pricing_queries, product_queries},
};

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductWithPrice>>> {
    let products = pricing_queries::get_catalog_with_prices(&state.db).await?;

    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductWithPrice>> {
    let product = pricing_queries::get_product_with_price(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryFacet>>> {
    let facets = product_queries::get_category_facets(&state.db).await?;

    Ok(Json(facets))
}

fn validate_product_request(req: &ProductRequest) -> Result<()> {
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }

    if req.buy_price < Decimal::ZERO {
        return Err(AppError::BadRequest(
            "buy_price must not be negative".to_string(),
        ));
    }

    if req.sell_price < Decimal::ZERO {
        return Err(AppError::BadRequest(
            "sell_price must not be negative".to_string(),
        ));
    }

    if req.stock < 0 {
        return Err(AppError::BadRequest(
            "stock must not be negative".to_string(),
        ));
    }

    Ok(())
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<Product>> {
    validate_product_request(&payload)?;

    let product = product_queries::create_product(&state.db, &payload).await?;

    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<Product>> {
    validate_product_request(&payload)?;

    let product = product_queries::update_product(&state.db, id, &payload)
        .await?
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    if product_queries::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    if order_queries::exists_for_product(&state.db, id).await? {
        return Err(AppError::Conflict(
            "Cannot delete product that has existing orders".to_string(),
        ));
    }

    product_queries::delete_product(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    fn request() -> ProductRequest {
        ProductRequest {
            name: "Boubou brodé".to_string(),
            description: None,
            buy_price: dec!(20),
            sell_price: dec!(45),
            category: Some("Vêtements".to_string()),
            stock: 10,
            image_url: None,
        }
    }

    #[test]
    fn accepts_a_valid_request() {
        assert!(validate_product_request(&request()).is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        let mut req = request();
        req.name = "   ".to_string();

        assert!(matches!(
            validate_product_request(&req),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn rejects_negative_prices_and_stock() {
        let mut req = request();
        req.sell_price = dec!(-1);
        assert!(validate_product_request(&req).is_err());

        let mut req = request();
        req.buy_price = dec!(-0.01);
        assert!(validate_product_request(&req).is_err());

        let mut req = request();
        req.stock = -3;
        assert!(validate_product_request(&req).is_err());
    }
}
