use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};

use crate::classifier::ClassificationResult;
use crate::server::state::AppState;
use crate::types::api::{ClassifyQuery, DivisorInfo, DivisorsResponse, ErrorResponse};
use crate::types::divisor::DIVISOR_TABLE;

/// GET /api/classify?bound=N - Classify 0..=N
pub async fn classify(
    State(state): State<AppState>,
    Query(query): Query<ClassifyQuery>,
) -> Result<Json<Arc<ClassificationResult>>, (StatusCode, Json<ErrorResponse>)> {
    let result = state
        .calculator()
        .calculate(&query.bound)
        .await
        .map_err(|e| {
            (
                StatusCode::from(&e),
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
        })?;

    Ok(Json(result))
}

/// GET /api/divisors - The divisor table in priority order
pub async fn divisors() -> Json<DivisorsResponse> {
    Json(DivisorsResponse {
        divisors: DIVISOR_TABLE.iter().map(DivisorInfo::from).collect(),
    })
}
