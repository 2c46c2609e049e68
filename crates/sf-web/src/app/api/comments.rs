// Comment server functions

use dioxus::prelude::*;
use sf_types::forum::{CommentInfo, CreateCommentRequest};

use crate::error::ApiError;
#[cfg(feature = "server")]
use crate::server::auth::{WebAuthSession, ensure_authenticated};

/// Create a comment on a post and return it as stored.
///
/// The returned comment is what the client appends to its local list.
#[post("/api/comments/create", auth: WebAuthSession)]
pub async fn create_comment(post_id: i64, request: CreateCommentRequest) -> Result<CommentInfo, ApiError> {
    use sf_types::validation::{CommentValidationInput, format_errors};

    let user = ensure_authenticated(&auth)?;

    let errors = CommentValidationInput { content: &request.content }.validate();
    if !errors.is_empty() {
        return Err(ApiError::validation(format_errors(&errors)));
    }

    let pool = crate::server::db_pool().await?;

    if sf_store::fetch_post(&pool, post_id)
        .await
        .map_err(ApiError::internal)?
        .is_none()
    {
        return Err(ApiError::not_found("post", post_id.to_string()));
    }

    let comment_id = sf_store::create_comment(&pool, post_id, user.id, request.content.trim())
        .await
        .map_err(ApiError::internal)?;

    tracing::debug!(id = comment_id, post = post_id, author = user.id, "comment created");

    sf_store::fetch_comment(&pool, comment_id)
        .await
        .map_err(ApiError::internal)?
        .ok_or_else(|| ApiError::internal("created comment vanished"))
}
