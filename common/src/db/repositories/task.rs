// Task repository implementation

use crate::db::store::TaskStore;
use crate::db::DbPool;
use crate::errors::DatabaseError;
use crate::models::{Task, TaskFields};
use async_trait::async_trait;
use tracing::instrument;

const TASK_COLUMNS: &str = "id, title, content, priority, user_id, slug";

/// Repository for task-related database operations
#[derive(Clone)]
pub struct TaskRepository {
    pool: DbPool,
}

impl TaskRepository {
    /// Create a new TaskRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStore for TaskRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Task>, DatabaseError> {
        let tasks = sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks ORDER BY id",
            TASK_COLUMNS
        ))
        .fetch_all(self.pool.pool())
        .await?;

        Ok(tasks)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> Result<Option<Task>, DatabaseError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks WHERE id = $1",
            TASK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(task)
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Task>, DatabaseError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks WHERE slug = $1",
            TASK_COLUMNS
        ))
        .bind(slug)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(task)
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Task>, DatabaseError> {
        let tasks = sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks WHERE user_id = $1 ORDER BY id",
            TASK_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(self.pool.pool())
        .await?;

        tracing::debug!(user_id, count = tasks.len(), "Loaded tasks for user");
        Ok(tasks)
    }

    #[instrument(skip(self, task), fields(slug = %task.slug))]
    async fn create(&self, user_id: i32, task: &TaskFields) -> Result<Task, DatabaseError> {
        let mut tx = self.pool.pool().begin().await?;

        let created = sqlx::query_as::<_, Task>(&format!(
            r#"
            INSERT INTO tasks (title, content, priority, user_id, slug)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            TASK_COLUMNS
        ))
        .bind(&task.title)
        .bind(&task.content)
        .bind(task.priority)
        .bind(user_id)
        .bind(&task.slug)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit()
            .await
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        tracing::info!(task_id = created.id, user_id, "Task created");
        Ok(created)
    }

    #[instrument(skip(self, task), fields(slug = %task.slug))]
    async fn update(&self, id: i32, task: &TaskFields) -> Result<(), DatabaseError> {
        let mut tx = self.pool.pool().begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = $2,
                content = $3,
                priority = $4,
                slug = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&task.title)
        .bind(&task.content)
        .bind(task.priority)
        .bind(&task.slug)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("Task not found: {}", id)));
        }

        tx.commit()
            .await
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        tracing::info!(task_id = id, "Task updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> Result<(), DatabaseError> {
        let mut tx = self.pool.pool().begin().await?;

        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("Task not found: {}", id)));
        }

        tx.commit()
            .await
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        tracing::info!(task_id = id, "Task deleted");
        Ok(())
    }
}
