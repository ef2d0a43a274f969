use axum::{
    extract::{Query, State},
    Json,
};
use common::models::{CreateUser, Task, UpdateUser, User};
use common::service::{CREATED, USER_DELETED, USER_UPDATED};
use serde::Deserialize;

use crate::handlers::{ErrorResponse, TransactionResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: i32,
}

/// List all users
#[tracing::instrument(skip(state))]
pub async fn all_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ErrorResponse> {
    let users = state.users.list().await?;

    tracing::debug!(count = users.len(), "Listed users");
    Ok(Json(users))
}

/// Get a single user
#[tracing::instrument(skip(state))]
pub async fn user_by_id(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<Json<User>, ErrorResponse> {
    let user = state.users.get(query.user_id).await?;
    Ok(Json(user))
}

/// List the tasks owned by a user
#[tracing::instrument(skip(state))]
pub async fn tasks_by_user_id(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<Json<Vec<Task>>, ErrorResponse> {
    let tasks = state.users.tasks(query.user_id).await?;
    Ok(Json(tasks))
}

/// Create a user
#[tracing::instrument(skip(state, req))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUser>,
) -> Result<TransactionResponse, ErrorResponse> {
    let user = state.users.create(req).await?;

    tracing::info!(
        user_id = user.id,
        username = %user.username,
        slug = %user.slug,
        "User created successfully"
    );
    Ok(TransactionResponse::created(CREATED))
}

/// Update name and age of a user
#[tracing::instrument(skip(state, req))]
pub async fn update_user(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
    Json(req): Json<UpdateUser>,
) -> Result<TransactionResponse, ErrorResponse> {
    state.users.update(query.user_id, req).await?;

    tracing::info!(user_id = query.user_id, "User updated successfully");
    Ok(TransactionResponse::ok(USER_UPDATED))
}

/// Delete a user and every task it owns
#[tracing::instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<TransactionResponse, ErrorResponse> {
    let removed_tasks = state.users.delete(query.user_id).await?;

    tracing::info!(
        user_id = query.user_id,
        removed_tasks,
        "User deleted successfully"
    );
    Ok(TransactionResponse::ok(USER_DELETED))
}
