use axum::{Json, extract::State};

use crate::{
    AppState,
    error::Result,
    models::DashboardResponse,
    queries::{admin_queries, order_queries},
};

const LOW_STOCK_THRESHOLD: i32 = 10;
const RECENT_LIMIT: i64 = 5;

pub async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardResponse>> {
    let stats = admin_queries::get_dashboard_stats(&state.db).await?;
    let recent_orders = order_queries::get_recent(&state.db, RECENT_LIMIT).await?;
    let low_stock =
        admin_queries::get_low_stock(&state.db, LOW_STOCK_THRESHOLD, RECENT_LIMIT).await?;

    Ok(Json(DashboardResponse {
        stats,
        recent_orders,
        low_stock,
    }))
}
