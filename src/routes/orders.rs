use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{CreateOrderRequest, Order, OrderStatus, UpdateOrderStatusRequest},
    queries::{order_queries, product_queries},
};

fn validate_order_request(req: &CreateOrderRequest) -> Result<()> {
    if req.customer_name.trim().is_empty() {
        return Err(AppError::BadRequest("Le nom est obligatoire".to_string()));
    }

    if req.customer_phone.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Le numéro de téléphone est obligatoire".to_string(),
        ));
    }

    if req.customer_location.trim().is_empty() {
        return Err(AppError::BadRequest(
            "La localisation est obligatoire".to_string(),
        ));
    }

    Ok(())
}

pub async fn submit_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<Json<Order>> {
    validate_order_request(&payload)?;

    if product_queries::find_by_id(&state.db, payload.product_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Produit introuvable".to_string()));
    }

    let order = order_queries::create_order(&state.db, &payload).await?;

    tracing::info!("New order {} for product {}", order.id, order.product_id);

    Ok(Json(order))
}

pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> Result<Json<Order>> {
    let status = OrderStatus::parse(&payload.status).ok_or_else(|| {
        AppError::BadRequest(format!("Invalid order status: {}", payload.status))
    })?;

    let order = order_queries::update_status(&state.db, id, status)
        .await?
        .ok_or(AppError::NotFound("Order not found".to_string()))?;

    Ok(Json(order))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateOrderRequest {
        CreateOrderRequest {
            product_id: 1,
            customer_name: "Awa Diop".to_string(),
            customer_phone: "+221 77 123 45 67".to_string(),
            customer_location: "Dakar, Plateau".to_string(),
        }
    }

    #[test]
    fn accepts_a_complete_request() {
        assert!(validate_order_request(&request()).is_ok());
    }

    #[test]
    fn rejects_blank_required_fields() {
        let mut req = request();
        req.customer_name = String::new();
        assert!(matches!(
            validate_order_request(&req),
            Err(AppError::BadRequest(_))
        ));

        let mut req = request();
        req.customer_phone = "  ".to_string();
        assert!(validate_order_request(&req).is_err());

        let mut req = request();
        req.customer_location = "\t".to_string();
        assert!(validate_order_request(&req).is_err());
    }
}
