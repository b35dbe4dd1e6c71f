use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{RecommendationResponse, UserInput},
    routes::AppState,
};

/// Handler for the recommendation endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<UserInput>, JsonRejection>,
) -> AppResult<Json<RecommendationResponse>> {
    let Json(input) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    tracing::info!(
        request_id = %request_id,
        prompt_chars = input.prompt.chars().count(),
        "Processing recommendation request"
    );

    let response = state.recommender.recommend(&input.prompt).await?;

    Ok(Json(response))
}
