//! User account and profile operations.

use crate::DbResult;
use chrono::Utc;
use sf_types::{auth::UserAuthRecord, profile::ProfileRecord};
use sqlx::{Row, SqliteExecutor};

pub async fn create_user(
    executor: impl SqliteExecutor<'_>,
    username: &str,
    password_hash: &str,
    display_name: Option<&str>,
) -> DbResult<i64> {
    let result = sqlx::query("INSERT INTO users (username, password_hash, display_name, created_at) VALUES (?, ?, ?, ?)")
        .bind(username)
        .bind(password_hash)
        .bind(display_name)
        .bind(Utc::now())
        .execute(executor)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn fetch_user_id_by_name(executor: impl SqliteExecutor<'_>, username: &str) -> DbResult<Option<i64>> {
    let result = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(executor)
        .await?;
    Ok(result)
}

/// Fetch a user's auth record by ID (id, username, display name, password hash).
pub async fn fetch_user_auth_record(executor: impl SqliteExecutor<'_>, user_id: i64) -> DbResult<Option<UserAuthRecord>> {
    let row = sqlx::query("SELECT id, username, display_name, password_hash FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(executor)
        .await?;

    Ok(row.map(|r| UserAuthRecord {
        id: r.get("id"),
        username: r.get("username"),
        display_name: r.get("display_name"),
        password_hash: r.get("password_hash"),
    }))
}

pub async fn fetch_user_password_hash(executor: impl SqliteExecutor<'_>, username: &str) -> DbResult<Option<String>> {
    let row = sqlx::query("SELECT password_hash FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(executor)
        .await?;
    Ok(row.map(|r| r.get::<String, _>("password_hash")))
}

/// Fetch the profile fields for a user by username.
pub async fn fetch_profile(executor: impl SqliteExecutor<'_>, username: &str) -> DbResult<Option<ProfileRecord>> {
    let row = sqlx::query("SELECT id, username, display_name, bio, created_at FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(executor)
        .await?;

    Ok(row.map(|r| ProfileRecord {
        id: r.get("id"),
        username: r.get("username"),
        display_name: r.get("display_name"),
        bio: r.get("bio"),
        joined_at: r.get("created_at"),
    }))
}

/// Update a user's display name and bio by ID.
pub async fn update_profile(
    executor: impl SqliteExecutor<'_>,
    user_id: i64,
    display_name: Option<&str>,
    bio: Option<&str>,
) -> DbResult<()> {
    sqlx::query("UPDATE users SET display_name = ?, bio = ? WHERE id = ?")
        .bind(display_name)
        .bind(bio)
        .bind(user_id)
        .execute(executor)
        .await?;
    Ok(())
}
