mod admin;
mod collections;
mod health;
mod orders;
mod products;
mod soldes;
mod weekly_offers;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/products", get(products::list_products))
        .route(
            "/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route("/categories", get(products::list_categories))
        .route(
            "/collections",
            get(collections::list_collections).post(collections::create_collection),
        )
        .route(
            "/collections/{id}",
            get(collections::get_collection)
                .put(collections::update_collection)
                .delete(collections::delete_collection),
        )
        .route(
            "/collections/{id}/products",
            put(collections::set_collection_products),
        )
        .route("/soldes/active", get(soldes::active_soldes))
        .route("/weekly-offers", post(weekly_offers::create_offer))
        .route("/weekly-offers/active", get(weekly_offers::active_offers))
        .route(
            "/weekly-offers/{id}",
            get(weekly_offers::get_offer)
                .put(weekly_offers::update_offer)
                .delete(weekly_offers::delete_offer),
        )
        .route("/orders", post(orders::submit_order))
        .route("/admin/products", post(products::create_product))
        .route("/admin/orders/{id}/status", put(orders::update_order_status))
        .route("/admin/dashboard", get(admin::dashboard))
}
