//! Dashboard handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{AppError, AppState};
use taskify_core::TaskStats;

/// GET /api/stats - Task counts and completion rate
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Result<Json<TaskStats>, AppError> {
    let stats = state.read_board()?.stats()?;
    Ok(Json(stats))
}

/// GET /api/categories - Predefined categories plus any in use
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, AppError> {
    let categories = state.read_board()?.categories()?;
    Ok(Json(categories))
}
