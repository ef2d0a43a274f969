use axum::{
    extract::{Query, State},
    Json,
};
use common::models::{CreateTask, Task, UpdateTask};
use common::service::{CREATED, TASK_DELETED, TASK_UPDATED};
use serde::Deserialize;

use crate::handlers::{ErrorResponse, TransactionResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TaskIdQuery {
    pub task_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub user_id: i32,
}

/// List all tasks
#[tracing::instrument(skip(state))]
pub async fn all_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ErrorResponse> {
    let tasks = state.tasks.list().await?;

    tracing::debug!(count = tasks.len(), "Listed tasks");
    Ok(Json(tasks))
}

/// Get a single task
#[tracing::instrument(skip(state))]
pub async fn task_by_id(
    State(state): State<AppState>,
    Query(query): Query<TaskIdQuery>,
) -> Result<Json<Task>, ErrorResponse> {
    let task = state.tasks.get(query.task_id).await?;
    Ok(Json(task))
}

/// Create a task owned by `user_id`
#[tracing::instrument(skip(state, req))]
pub async fn create_task(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
    Json(req): Json<CreateTask>,
) -> Result<TransactionResponse, ErrorResponse> {
    let task = state.tasks.create(query.user_id, req).await?;

    tracing::info!(
        task_id = task.id,
        user_id = query.user_id,
        slug = %task.slug,
        "Task created successfully"
    );
    Ok(TransactionResponse::created(CREATED))
}

/// Update title, content and priority of a task
#[tracing::instrument(skip(state, req))]
pub async fn update_task(
    State(state): State<AppState>,
    Query(query): Query<TaskIdQuery>,
    Json(req): Json<UpdateTask>,
) -> Result<TransactionResponse, ErrorResponse> {
    state.tasks.update(query.task_id, req).await?;

    tracing::info!(task_id = query.task_id, "Task updated successfully");
    Ok(TransactionResponse::ok(TASK_UPDATED))
}

/// Delete a task
#[tracing::instrument(skip(state))]
pub async fn delete_task(
    State(state): State<AppState>,
    Query(query): Query<TaskIdQuery>,
) -> Result<TransactionResponse, ErrorResponse> {
    state.tasks.delete(query.task_id).await?;

    tracing::info!(task_id = query.task_id, "Task deleted successfully");
    Ok(TransactionResponse::ok(TASK_DELETED))
}
