//! Post storage and listing.
//!
//! Listings join the author row so the client gets a ready-to-render
//! `PostInfo`; the author name prefers the display name and falls back to
//! the username.

use crate::DbResult;
use chrono::Utc;
use sf_types::forum::{AuthorInfo, PostInfo};
use sqlx::{Row, SqliteExecutor, sqlite::SqliteRow};

fn post_from_row(row: &SqliteRow) -> PostInfo {
    PostInfo {
        id: row.get("id"),
        title: row.get("title"),
        subject: row.get("subject"),
        content: row.get("content"),
        author: AuthorInfo {
            id: row.get("author_id"),
            name: row.get("author_name"),
        },
        created_at: row.get("created_at"),
    }
}

pub async fn create_post(
    executor: impl SqliteExecutor<'_>,
    author_id: i64,
    title: &str,
    subject: &str,
    content: &str,
) -> DbResult<i64> {
    let result = sqlx::query("INSERT INTO posts (author_id, title, subject, content, created_at) VALUES (?, ?, ?, ?, ?)")
        .bind(author_id)
        .bind(title)
        .bind(subject)
        .bind(content)
        .bind(Utc::now())
        .execute(executor)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn fetch_post(executor: impl SqliteExecutor<'_>, post_id: i64) -> DbResult<Option<PostInfo>> {
    let row = sqlx::query(
        "SELECT p.id, p.title, p.subject, p.content, p.created_at, p.author_id, \
         COALESCE(u.display_name, u.username) AS author_name \
         FROM posts p JOIN users u ON u.id = p.author_id WHERE p.id = ?",
    )
    .bind(post_id)
    .fetch_optional(executor)
    .await?;
    Ok(row.as_ref().map(post_from_row))
}

/// List posts, newest first, optionally narrowed to one subject.
pub async fn list_posts(executor: impl SqliteExecutor<'_>, subject: Option<&str>) -> DbResult<Vec<PostInfo>> {
    let rows = match subject {
        Some(subject) => {
            sqlx::query(
                "SELECT p.id, p.title, p.subject, p.content, p.created_at, p.author_id, \
                 COALESCE(u.display_name, u.username) AS author_name \
                 FROM posts p JOIN users u ON u.id = p.author_id \
                 WHERE p.subject = ? ORDER BY p.id DESC",
            )
            .bind(subject)
            .fetch_all(executor)
            .await?
        }
        None => {
            sqlx::query(
                "SELECT p.id, p.title, p.subject, p.content, p.created_at, p.author_id, \
                 COALESCE(u.display_name, u.username) AS author_name \
                 FROM posts p JOIN users u ON u.id = p.author_id ORDER BY p.id DESC",
            )
            .fetch_all(executor)
            .await?
        }
    };
    Ok(rows.iter().map(post_from_row).collect())
}

/// List a user's posts, newest first.
pub async fn list_posts_by_author(executor: impl SqliteExecutor<'_>, author_id: i64) -> DbResult<Vec<PostInfo>> {
    let rows = sqlx::query(
        "SELECT p.id, p.title, p.subject, p.content, p.created_at, p.author_id, \
         COALESCE(u.display_name, u.username) AS author_name \
         FROM posts p JOIN users u ON u.id = p.author_id \
         WHERE p.author_id = ? ORDER BY p.id DESC",
    )
    .bind(author_id)
    .fetch_all(executor)
    .await?;
    Ok(rows.iter().map(post_from_row).collect())
}
