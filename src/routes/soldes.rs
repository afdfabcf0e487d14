use axum::{Json, extract::State};

use crate::{
    AppState,
    error::Result,
    models::SoldeResponse,
    queries::solde_queries,
};

/// Active soldes with their member products. Activity is evaluated against
/// NOW() on every request.
pub async fn active_soldes(State(state): State<AppState>) -> Result<Json<Vec<SoldeResponse>>> {
    let soldes = solde_queries::get_active(&state.db).await?;

    let solde_ids: Vec<i32> = soldes.iter().map(|s| s.id).collect();
    let mut products_map = solde_queries::get_products_for_soldes(&state.db, &solde_ids).await?;

    let response = soldes
        .into_iter()
        .map(|solde| {
            let products = products_map.remove(&solde.id).unwrap_or_default();
            SoldeResponse { solde, products }
        })
        .collect();

    Ok(Json(response))
}
