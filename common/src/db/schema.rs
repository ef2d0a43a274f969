// Table bootstrap for users and tasks.
// Creates missing tables on startup; existing tables are left untouched.

use crate::db::DbPool;
use crate::errors::DatabaseError;
use tracing::{info, instrument};

/// DDL statements executed in order inside one transaction
pub const SCHEMA_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        username VARCHAR(255) NOT NULL,
        firstname VARCHAR(255) NOT NULL,
        lastname VARCHAR(255) NOT NULL,
        age INTEGER NOT NULL,
        slug VARCHAR(255) NOT NULL,
        CONSTRAINT users_slug_key UNIQUE (slug)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS tasks (
        id SERIAL PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        content TEXT NOT NULL DEFAULT '',
        priority INTEGER NOT NULL DEFAULT 0,
        user_id INTEGER NOT NULL REFERENCES users (id),
        slug VARCHAR(255) NOT NULL,
        CONSTRAINT tasks_slug_key UNIQUE (slug)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS tasks_user_id_idx ON tasks (user_id)",
];

/// Ensure the `users` and `tasks` tables exist
///
/// # Errors
/// Returns `DatabaseError::SchemaFailed` if any statement fails
#[instrument(skip(pool))]
pub async fn ensure_schema(pool: &DbPool) -> Result<(), DatabaseError> {
    let mut tx = pool
        .pool()
        .begin()
        .await
        .map_err(|e| DatabaseError::SchemaFailed(e.to_string()))?;

    for statement in SCHEMA_STATEMENTS {
        sqlx::query(statement)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Schema statement failed");
                DatabaseError::SchemaFailed(e.to_string())
            })?;
    }

    tx.commit()
        .await
        .map_err(|e| DatabaseError::SchemaFailed(e.to_string()))?;

    info!(statements = SCHEMA_STATEMENTS.len(), "Database schema ensured");
    Ok(())
}
