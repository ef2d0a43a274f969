// Data models for users and tasks

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::ValidationError;
use crate::slug::slugify;

pub const MAX_NAME_LENGTH: usize = 255;
pub const MAX_CONTENT_LENGTH: usize = 10_000;
pub const MAX_AGE: i32 = 150;
pub const MAX_PRIORITY: i32 = 10;

/// User represents a persisted user row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
    pub slug: String,
}

/// Task represents a persisted task row owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub priority: i32,
    pub user_id: i32,
    pub slug: String,
}

/// Payload for creating a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
}

/// Payload for updating a user. Username and slug are immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
}

/// Payload for creating a task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub content: String,
    pub priority: i32,
}

/// Payload for updating a task. The slug is recomputed from the new title.
pub type UpdateTask = CreateTask;

/// A user row ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
    pub slug: String,
}

/// Task column values for an insert or an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub title: String,
    pub content: String,
    pub priority: i32,
    pub slug: String,
}

impl CreateUser {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("username", &self.username)?;
        validate_slug_source("username", &self.username)?;
        validate_name("firstname", &self.firstname)?;
        validate_name("lastname", &self.lastname)?;
        validate_range("age", self.age, 0, MAX_AGE)
    }

    pub fn slug(&self) -> String {
        slugify(&self.username)
    }

    pub fn into_new_user(self) -> NewUser {
        let slug = self.slug();
        NewUser {
            username: self.username,
            firstname: self.firstname,
            lastname: self.lastname,
            age: self.age,
            slug,
        }
    }
}

impl UpdateUser {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("firstname", &self.firstname)?;
        validate_name("lastname", &self.lastname)?;
        validate_range("age", self.age, 0, MAX_AGE)
    }
}

impl CreateTask {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("title", &self.title)?;
        validate_slug_source("title", &self.title)?;
        if self.content.chars().count() > MAX_CONTENT_LENGTH {
            return Err(ValidationError::InvalidFieldValue {
                field: "content".to_string(),
                reason: format!("must be at most {} characters", MAX_CONTENT_LENGTH),
            });
        }
        validate_range("priority", self.priority, 0, MAX_PRIORITY)
    }

    pub fn slug(&self) -> String {
        slugify(&self.title)
    }

    pub fn into_fields(self) -> TaskFields {
        let slug = self.slug();
        TaskFields {
            title: self.title,
            content: self.content,
            priority: self.priority,
            slug,
        }
    }
}

fn validate_name(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field.to_string()));
    }
    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::InvalidFieldValue {
            field: field.to_string(),
            reason: format!("must be at most {} characters", MAX_NAME_LENGTH),
        });
    }
    Ok(())
}

/// The slug must be non-empty and fit the `slug` column, which transliteration
/// can overrun even when the source is within `MAX_NAME_LENGTH`.
fn validate_slug_source(field: &str, value: &str) -> Result<(), ValidationError> {
    let slug = slugify(value);
    if slug.is_empty() {
        return Err(ValidationError::InvalidFieldValue {
            field: field.to_string(),
            reason: "must contain at least one letter or digit".to_string(),
        });
    }
    if slug.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::InvalidFieldValue {
            field: field.to_string(),
            reason: format!("slug must be at most {} characters", MAX_NAME_LENGTH),
        });
    }
    Ok(())
}

fn validate_range(field: &str, value: i32, min: i32, max: i32) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::InvalidFieldValue {
            field: field.to_string(),
            reason: format!("must be between {} and {}", min, max),
        });
    }
    Ok(())
}
