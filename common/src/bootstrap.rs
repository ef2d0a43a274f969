// Bootstrap utilities for binary initialization

use crate::config::Settings;
use crate::db::repositories::{TaskRepository, UserRepository};
use crate::db::{schema, DbPool, TaskStore, UserStore};
use crate::service::{TaskService, UserService};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

/// Connect the PostgreSQL pool and make sure the tables exist
///
/// # Errors
/// Returns error if the pool cannot connect or the schema cannot be created
#[tracing::instrument(skip(settings))]
pub async fn init_database(settings: &Settings) -> Result<DbPool> {
    let db_pool = DbPool::connect(&settings.database)
        .await
        .context("Failed to create database pool")?;

    schema::ensure_schema(&db_pool)
        .await
        .context("Failed to ensure database schema")?;

    info!("Database ready");
    Ok(db_pool)
}

/// Wire the PostgreSQL repositories into the user and task services
pub fn init_services(db_pool: &DbPool) -> (UserService, TaskService) {
    let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(db_pool.clone()));
    let tasks: Arc<dyn TaskStore> = Arc::new(TaskRepository::new(db_pool.clone()));

    (
        UserService::new(users.clone(), tasks.clone()),
        TaskService::new(tasks, users),
    )
}
