use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::models::Recommendations;
use crate::services::recommend as engine;

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// All titles in table order, for populating the selector
pub async fn list_titles(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let titles = state.catalog.titles()?.to_vec();
    Ok(Json(titles))
}

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    title: String,
}

/// Computes recommendations for the selected title
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendQuery>,
) -> AppResult<Json<Recommendations>> {
    let recommendations = engine::recommend(
        &params.title,
        &state.catalog,
        state.posters.as_ref(),
    )
    .await?;
    Ok(Json(recommendations))
}
