//! Task handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{AppError, AppState, SuccessResponse};
use taskify_core::{NewTask, Priority, Task, TaskFilter, TaskUpdate};

/// Query parameters for listing tasks
#[derive(Debug, Default, Deserialize)]
pub struct TaskQuery {
    /// Search query (matches title or description, case-insensitive)
    pub search: Option<String>,
    /// Filter by priority (low, medium, high)
    pub priority: Option<String>,
    /// Filter by category (exact match)
    pub category: Option<String>,
}

impl TaskQuery {
    fn to_filter(&self) -> Result<TaskFilter, AppError> {
        let mut filter = TaskFilter::new();

        if let Some(search) = &self.search {
            filter = filter.search(search.as_str());
        }

        // Blank values from a form mean "any"
        if let Some(priority) = self.priority.as_deref().filter(|p| !p.trim().is_empty()) {
            let priority: Priority = priority
                .parse()
                .map_err(|e: String| AppError::bad_request(&e))?;
            filter = filter.priority(priority);
        }

        if let Some(category) = self.category.as_deref().filter(|c| !c.trim().is_empty()) {
            filter = filter.category(category);
        }

        Ok(filter)
    }
}

/// GET /api/tasks - List tasks, newest first
pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TaskQuery>,
) -> Result<Json<Vec<Task>>, AppError> {
    let filter = params.to_filter()?;
    let tasks = state.read_board()?.filtered(&filter)?;
    Ok(Json(tasks))
}

/// POST /api/tasks - Create a task
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewTask>,
) -> Result<Json<Task>, AppError> {
    let task = state.write_board()?.create_task(body)?;
    Ok(Json(task))
}

/// GET /api/tasks/:id - Get a single task
pub async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, AppError> {
    let task = state.read_board()?.task(&id)?;
    Ok(Json(task))
}

/// PATCH /api/tasks/:id - Update some fields of a task
///
/// `description` and `due_date` may be sent as `null` to clear them.
pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<TaskUpdate>,
) -> Result<Json<Task>, AppError> {
    let task = state.write_board()?.update_task(&id, body)?;
    Ok(Json(task))
}

/// DELETE /api/tasks/:id - Delete a task
pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.write_board()?.delete_task(&id)?;
    Ok(Json(SuccessResponse { success: true }))
}

/// POST /api/tasks/:id/toggle - Flip the completed flag
pub async fn toggle_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, AppError> {
    let task = state.write_board()?.toggle_complete(&id)?;
    Ok(Json(task))
}
