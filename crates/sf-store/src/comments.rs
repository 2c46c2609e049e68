//! Comment storage.
//!
//! Comments are returned oldest first (insertion order), so a client that
//! appends a freshly created comment at the end of its list matches what a
//! reload would show.

use crate::DbResult;
use chrono::Utc;
use sf_types::forum::{AuthorInfo, CommentInfo};
use sqlx::{Row, SqliteExecutor, sqlite::SqliteRow};

fn comment_from_row(row: &SqliteRow) -> CommentInfo {
    CommentInfo {
        id: row.get("id"),
        post_id: row.get("post_id"),
        content: row.get("content"),
        author: AuthorInfo {
            id: row.get("author_id"),
            name: row.get("author_name"),
        },
        created_at: row.get("created_at"),
    }
}

pub async fn create_comment(
    executor: impl SqliteExecutor<'_>,
    post_id: i64,
    author_id: i64,
    content: &str,
) -> DbResult<i64> {
    let result = sqlx::query("INSERT INTO comments (post_id, author_id, content, created_at) VALUES (?, ?, ?, ?)")
        .bind(post_id)
        .bind(author_id)
        .bind(content)
        .bind(Utc::now())
        .execute(executor)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn fetch_comment(executor: impl SqliteExecutor<'_>, comment_id: i64) -> DbResult<Option<CommentInfo>> {
    let row = sqlx::query(
        "SELECT c.id, c.post_id, c.content, c.created_at, c.author_id, \
         COALESCE(u.display_name, u.username) AS author_name \
         FROM comments c JOIN users u ON u.id = c.author_id WHERE c.id = ?",
    )
    .bind(comment_id)
    .fetch_optional(executor)
    .await?;
    Ok(row.as_ref().map(comment_from_row))
}

/// List a post's comments, oldest first.
pub async fn list_comments_for_post(executor: impl SqliteExecutor<'_>, post_id: i64) -> DbResult<Vec<CommentInfo>> {
    let rows = sqlx::query(
        "SELECT c.id, c.post_id, c.content, c.created_at, c.author_id, \
         COALESCE(u.display_name, u.username) AS author_name \
         FROM comments c JOIN users u ON u.id = c.author_id \
         WHERE c.post_id = ? ORDER BY c.id ASC",
    )
    .bind(post_id)
    .fetch_all(executor)
    .await?;
    Ok(rows.iter().map(comment_from_row).collect())
}

pub async fn count_comments_for_post(executor: impl SqliteExecutor<'_>, post_id: i64) -> DbResult<i64> {
    let row = sqlx::query("SELECT COUNT(*) as cnt FROM comments WHERE post_id = ?")
        .bind(post_id)
        .fetch_one(executor)
        .await?;
    Ok(row.get::<i64, _>("cnt"))
}
