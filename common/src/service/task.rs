// Task operations

use std::sync::Arc;

use tracing::instrument;

use crate::db::{TaskStore, UserStore};
use crate::errors::{DatabaseError, ServiceError};
use crate::models::{CreateTask, Task, UpdateTask};
use crate::service::user::not_found_as;
use crate::service::{task_conflict, TASKS_NOT_FOUND, TASK_NOT_FOUND, USER_NOT_FOUND};
use crate::telemetry;

/// Task service backed by task and user stores
#[derive(Clone)]
pub struct TaskService {
    tasks: Arc<dyn TaskStore>,
    users: Arc<dyn UserStore>,
}

impl TaskService {
    pub fn new(tasks: Arc<dyn TaskStore>, users: Arc<dyn UserStore>) -> Self {
        Self { tasks, users }
    }

    /// List every task. An empty table is reported as NotFound.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Task>, ServiceError> {
        let tasks = self.tasks.find_all().await?;
        if tasks.is_empty() {
            return Err(ServiceError::NotFound(TASKS_NOT_FOUND.to_string()));
        }
        Ok(tasks)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, task_id: i32) -> Result<Task, ServiceError> {
        self.tasks
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(TASK_NOT_FOUND.to_string()))
    }

    /// Create a task for `user_id`.
    ///
    /// The slug check runs before the owner check, so a duplicate title is
    /// reported as a conflict even when the user does not exist.
    #[instrument(skip(self, payload), fields(title = %payload.title))]
    pub async fn create(&self, user_id: i32, payload: CreateTask) -> Result<Task, ServiceError> {
        payload.validate()?;

        let slug = payload.slug();
        if self.tasks.find_by_slug(&slug).await?.is_some() {
            tracing::warn!(slug = %slug, "Task slug already taken");
            return Err(ServiceError::Conflict(task_conflict(&payload.title)));
        }

        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(ServiceError::NotFound(USER_NOT_FOUND.to_string()));
        }

        let title = payload.title.clone();
        let task = self
            .tasks
            .create(user_id, &payload.into_fields())
            .await
            .map_err(|e| match e {
                DatabaseError::DuplicateKey(_) => ServiceError::Conflict(task_conflict(&title)),
                DatabaseError::ForeignKeyViolation(_) => {
                    ServiceError::NotFound(USER_NOT_FOUND.to_string())
                }
                other => ServiceError::Database(other),
            })?;

        telemetry::record_entity_created("task");
        Ok(task)
    }

    /// Replace title, content and priority, recomputing the slug.
    /// Keeping the current title is not a conflict.
    #[instrument(skip(self, payload), fields(title = %payload.title))]
    pub async fn update(&self, task_id: i32, payload: UpdateTask) -> Result<(), ServiceError> {
        payload.validate()?;
        self.get(task_id).await?;

        let slug = payload.slug();
        if let Some(existing) = self.tasks.find_by_slug(&slug).await? {
            if existing.id != task_id {
                tracing::warn!(slug = %slug, other_task = existing.id, "Task slug already taken");
                return Err(ServiceError::Conflict(task_conflict(&payload.title)));
            }
        }

        let title = payload.title.clone();
        self.tasks
            .update(task_id, &payload.into_fields())
            .await
            .map_err(|e| match e {
                DatabaseError::DuplicateKey(_) => ServiceError::Conflict(task_conflict(&title)),
                other => not_found_as(TASK_NOT_FOUND)(other),
            })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, task_id: i32) -> Result<(), ServiceError> {
        self.get(task_id).await?;

        self.tasks
            .delete(task_id)
            .await
            .map_err(not_found_as(TASK_NOT_FOUND))?;

        telemetry::record_entity_deleted("task");
        Ok(())
    }
}
