//! Insight handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::{AppError, AppState};
use taskify_core::{ApplyOutcome, Insight, InsightId};

/// Response for an apply request
#[derive(Debug, Serialize)]
pub struct ApplyResponse {
    pub id: InsightId,
    pub outcome: ApplyOutcome,
}

/// GET /api/insights - Current insights for the task list
///
/// Regenerated only when tasks have changed since the last request.
pub async fn list_insights(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Insight>>, AppError> {
    let mut board = state.write_board()?;
    let insights = board.insights()?.to_vec();
    Ok(Json(insights))
}

/// POST /api/insights/:id/apply - Forward an insight to the apply handler
pub async fn apply_insight(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApplyResponse>, AppError> {
    let id: InsightId = id
        .parse()
        .map_err(|_| AppError::not_found("Insight not found"))?;

    let outcome = state.write_board()?.apply_insight(id)?;

    Ok(Json(ApplyResponse { id, outcome }))
}
