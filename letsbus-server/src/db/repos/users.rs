//! User repository
//!
//! Email uniqueness is enforced by the table; a duplicate insert or update
//! surfaces as `DbError::Conflict`.

use letsbus_core::{UserId, UserRecord};
use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::{NewUser, UserUpdate};

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        UserRecord {
            id: UserId::Number(row.id),
            name: row.name,
            email: row.email,
        }
    }
}

pub struct UserRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All users in insertion order
    pub async fn list(&self) -> Result<Vec<UserRecord>, DbError> {
        let rows: Vec<UserRow> = sqlx::query_as("SELECT id, name, email FROM users ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(rows.into_iter().map(UserRecord::from).collect())
    }

    pub async fn get(&self, id: i64) -> Result<UserRecord, DbError> {
        let row: UserRow = sqlx::query_as("SELECT id, name, email FROM users WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| not_found(id))?;
        Ok(row.into())
    }

    pub async fn create(&self, user: NewUser) -> Result<UserRecord, DbError> {
        let row: UserRow = sqlx::query_as(
            "INSERT INTO users (name, email) VALUES (?1, ?2) RETURNING id, name, email",
        )
        .bind(user.name.as_str())
        .bind(user.email.as_str())
        .fetch_one(self.pool)
        .await?;
        Ok(row.into())
    }

    /// Apply the fields that are set; untouched columns keep their value.
    pub async fn update(&self, id: i64, update: UserUpdate) -> Result<UserRecord, DbError> {
        let row: UserRow = sqlx::query_as(
            r#"
            UPDATE users
            SET name = COALESCE(?1, name),
                email = COALESCE(?2, email)
            WHERE id = ?3
            RETURNING id, name, email
            "#,
        )
        .bind(update.name.as_ref().map(|n| n.as_str()))
        .bind(update.email.as_ref().map(|e| e.as_str()))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| not_found(id))?;
        Ok(row.into())
    }
}

fn not_found(id: i64) -> DbError {
    DbError::NotFound {
        resource: "user",
        id: id.to_string(),
    }
}
