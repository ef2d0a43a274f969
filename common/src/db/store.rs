// Store traits implemented by the PostgreSQL repositories

use async_trait::async_trait;

use crate::errors::DatabaseError;
use crate::models::{NewUser, Task, TaskFields, UpdateUser, User};

/// Persistence operations over the `users` table
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users ordered by id
    async fn find_all(&self) -> Result<Vec<User>, DatabaseError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DatabaseError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<User>, DatabaseError>;

    /// Insert a user and return the stored row.
    /// A slug collision surfaces as `DatabaseError::DuplicateKey`.
    async fn create(&self, user: &NewUser) -> Result<User, DatabaseError>;

    /// Update name and age. Returns `DatabaseError::NotFound` when no row matched.
    async fn update(&self, id: i32, user: &UpdateUser) -> Result<(), DatabaseError>;

    /// Delete the user's tasks and then the user in one transaction.
    /// Returns the number of tasks removed.
    async fn delete_with_tasks(&self, id: i32) -> Result<u64, DatabaseError>;
}

/// Persistence operations over the `tasks` table
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// All tasks ordered by id
    async fn find_all(&self) -> Result<Vec<Task>, DatabaseError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Task>, DatabaseError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Task>, DatabaseError>;

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Task>, DatabaseError>;

    /// Insert a task owned by `user_id`.
    /// A slug collision surfaces as `DatabaseError::DuplicateKey`, a missing
    /// owner as `DatabaseError::ForeignKeyViolation`.
    async fn create(&self, user_id: i32, task: &TaskFields) -> Result<Task, DatabaseError>;

    async fn update(&self, id: i32, task: &TaskFields) -> Result<(), DatabaseError>;

    async fn delete(&self, id: i32) -> Result<(), DatabaseError>;
}
