// User repository implementation

use crate::db::store::UserStore;
use crate::db::DbPool;
use crate::errors::DatabaseError;
use crate::models::{NewUser, UpdateUser, User};
use async_trait::async_trait;
use tracing::instrument;

const USER_COLUMNS: &str = "id, username, firstname, lastname, age, slug";

/// Repository for user-related database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: DbPool,
}

impl UserRepository {
    /// Create a new UserRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<User>, DatabaseError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users ORDER BY id",
            USER_COLUMNS
        ))
        .fetch_all(self.pool.pool())
        .await?;

        Ok(users)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE slug = $1",
            USER_COLUMNS
        ))
        .bind(slug)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(user)
    }

    #[instrument(skip(self, user), fields(slug = %user.slug))]
    async fn create(&self, user: &NewUser) -> Result<User, DatabaseError> {
        let mut tx = self.pool.pool().begin().await?;

        let created = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (username, firstname, lastname, age, slug)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(&user.username)
        .bind(&user.firstname)
        .bind(&user.lastname)
        .bind(user.age)
        .bind(&user.slug)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit()
            .await
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        tracing::info!(user_id = created.id, username = %created.username, "User created");
        Ok(created)
    }

    #[instrument(skip(self, user))]
    async fn update(&self, id: i32, user: &UpdateUser) -> Result<(), DatabaseError> {
        let mut tx = self.pool.pool().begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE users
            SET firstname = $2,
                lastname = $3,
                age = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&user.firstname)
        .bind(&user.lastname)
        .bind(user.age)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("User not found: {}", id)));
        }

        tx.commit()
            .await
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        tracing::info!(user_id = id, "User updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_with_tasks(&self, id: i32) -> Result<u64, DatabaseError> {
        let mut tx = self.pool.pool().begin().await?;

        let tasks = sqlx::query("DELETE FROM tasks WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        // Dropping the transaction rolls back the task deletion
        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("User not found: {}", id)));
        }

        tx.commit()
            .await
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        tracing::info!(
            user_id = id,
            tasks_deleted = tasks.rows_affected(),
            "User deleted with owned tasks"
        );
        Ok(tasks.rows_affected())
    }
}
