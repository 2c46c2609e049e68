// Post server functions

use dioxus::prelude::*;
use sf_types::forum::{CreatePostRequest, PostDetailResponse, PostInfo};

use crate::error::ApiError;
#[cfg(feature = "server")]
use crate::server::auth::{WebAuthSession, ensure_authenticated};

/// List posts, newest first, optionally narrowed to one subject.
#[get("/api/posts")]
pub async fn get_posts(subject: Option<String>) -> Result<Vec<PostInfo>, ApiError> {
    let pool = crate::server::db_pool().await?;
    sf_store::list_posts(&pool, subject.as_deref()).await.map_err(ApiError::internal)
}

/// Fetch a post together with its comments, oldest comment first.
#[get("/api/posts/detail")]
pub async fn get_post(id: i64) -> Result<PostDetailResponse, ApiError> {
    let pool = crate::server::db_pool().await?;

    let post = sf_store::fetch_post(&pool, id)
        .await
        .map_err(ApiError::internal)?
        .ok_or_else(|| ApiError::not_found("post", id.to_string()))?;

    let comments = sf_store::list_comments_for_post(&pool, id).await.map_err(ApiError::internal)?;

    Ok(PostDetailResponse { post, comments })
}

#[post("/api/posts/create", auth: WebAuthSession)]
pub async fn create_post(request: CreatePostRequest) -> Result<PostInfo, ApiError> {
    use sf_types::validation::{PostValidationInput, format_errors};

    let user = ensure_authenticated(&auth)?;

    let errors = PostValidationInput {
        title: &request.title,
        subject: &request.subject,
        content: &request.content,
    }
    .validate();
    if !errors.is_empty() {
        return Err(ApiError::validation(format_errors(&errors)));
    }

    let pool = crate::server::db_pool().await?;
    let post_id = sf_store::create_post(&pool, user.id, request.title.trim(), &request.subject, request.content.trim())
        .await
        .map_err(ApiError::internal)?;

    tracing::info!(id = post_id, author = user.id, "post created");

    sf_store::fetch_post(&pool, post_id)
        .await
        .map_err(ApiError::internal)?
        .ok_or_else(|| ApiError::internal("created post vanished"))
}
