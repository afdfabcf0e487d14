use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{Collection, CollectionProductsRequest, CollectionRequest, CollectionResponse},
    queries::{collection_queries, product_queries},
};

pub async fn list_collections(
    State(state): State<AppState>,
) -> Result<Json<Vec<Collection>>> {
    let collections = collection_queries::get_all(&state.db).await?;

    Ok(Json(collections))
}

pub async fn get_collection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CollectionResponse>> {
    let collection = collection_queries::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Collection not found".to_string()))?;

    let products = collection_queries::get_collection_products(&state.db, id).await?;

    Ok(Json(CollectionResponse {
        collection,
        products,
    }))
}

pub async fn create_collection(
    State(state): State<AppState>,
    Json(payload): Json<CollectionRequest>,
) -> Result<Json<Collection>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }

    let collection = collection_queries::create_collection(&state.db, &payload).await?;

    Ok(Json(collection))
}

pub async fn update_collection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CollectionRequest>,
) -> Result<Json<Collection>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }

    let collection = collection_queries::update_collection(&state.db, id, &payload)
        .await?
        .ok_or(AppError::NotFound("Collection not found".to_string()))?;

    Ok(Json(collection))
}

pub async fn delete_collection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    if !collection_queries::delete_collection(&state.db, id).await? {
        return Err(AppError::NotFound("Collection not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_collection_products(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CollectionProductsRequest>,
) -> Result<Json<CollectionResponse>> {
    let collection = collection_queries::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Collection not found".to_string()))?;

    let known = product_queries::find_by_ids(&state.db, &payload.product_ids).await?;
    if let Some(missing) = payload
        .product_ids
        .iter()
        .find(|pid| !known.contains_key(*pid))
    {
        return Err(AppError::BadRequest(format!(
            "Product {} does not exist",
            missing
        )));
    }

    collection_queries::set_collection_products(&state.db, id, &payload.product_ids).await?;
    let products = collection_queries::get_collection_products(&state.db, id).await?;

    Ok(Json(CollectionResponse {
        collection,
        products,
    }))
}
