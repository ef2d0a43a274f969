// User operations

use std::sync::Arc;

use tracing::instrument;

use crate::db::{TaskStore, UserStore};
use crate::errors::{DatabaseError, ServiceError};
use crate::models::{CreateUser, Task, UpdateUser, User};
use crate::service::{user_conflict, TASKS_NOT_FOUND, USERS_NOT_FOUND, USER_NOT_FOUND};
use crate::telemetry;

/// User service backed by user and task stores
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    tasks: Arc<dyn TaskStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, tasks: Arc<dyn TaskStore>) -> Self {
        Self { users, tasks }
    }

    /// List every user. An empty table is reported as NotFound.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<User>, ServiceError> {
        let users = self.users.find_all().await?;
        if users.is_empty() {
            return Err(ServiceError::NotFound(USERS_NOT_FOUND.to_string()));
        }
        Ok(users)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, user_id: i32) -> Result<User, ServiceError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// Tasks owned by a user. Both a missing user and a user without tasks
    /// are reported as NotFound.
    #[instrument(skip(self))]
    pub async fn tasks(&self, user_id: i32) -> Result<Vec<Task>, ServiceError> {
        self.get(user_id).await?;

        let tasks = self.tasks.find_by_user(user_id).await?;
        if tasks.is_empty() {
            return Err(ServiceError::NotFound(TASKS_NOT_FOUND.to_string()));
        }
        Ok(tasks)
    }

    /// Create a user with slug derived from the username
    #[instrument(skip(self, payload), fields(username = %payload.username))]
    pub async fn create(&self, payload: CreateUser) -> Result<User, ServiceError> {
        payload.validate()?;

        let slug = payload.slug();
        if self.users.find_by_slug(&slug).await?.is_some() {
            tracing::warn!(slug = %slug, "Username slug already taken");
            return Err(ServiceError::Conflict(user_conflict(&payload.username)));
        }

        let username = payload.username.clone();
        let user = self
            .users
            .create(&payload.into_new_user())
            .await
            .map_err(|e| match e {
                DatabaseError::DuplicateKey(_) => ServiceError::Conflict(user_conflict(&username)),
                other => ServiceError::Database(other),
            })?;

        telemetry::record_entity_created("user");
        Ok(user)
    }

    /// Update name and age. Username and slug are left untouched.
    #[instrument(skip(self, payload))]
    pub async fn update(&self, user_id: i32, payload: UpdateUser) -> Result<(), ServiceError> {
        payload.validate()?;
        self.get(user_id).await?;

        self.users
            .update(user_id, &payload)
            .await
            .map_err(not_found_as(USER_NOT_FOUND))
    }

    /// Delete a user together with every task it owns
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: i32) -> Result<u64, ServiceError> {
        self.get(user_id).await?;

        let removed = self
            .users
            .delete_with_tasks(user_id)
            .await
            .map_err(not_found_as(USER_NOT_FOUND))?;

        telemetry::record_entity_deleted("user");
        if removed > 0 {
            telemetry::record_entities_deleted("task", removed);
        }
        Ok(removed)
    }
}

/// Map a store-level NotFound onto the service's NotFound message
pub(crate) fn not_found_as(message: &'static str) -> impl Fn(DatabaseError) -> ServiceError {
    move |e| match e {
        DatabaseError::NotFound(_) => ServiceError::NotFound(message.to_string()),
        other => ServiceError::Database(other),
    }
}
