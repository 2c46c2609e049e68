// Profile server functions

use dioxus::prelude::*;
use sf_types::profile::{ProfileInfo, UpdateProfileRequest};

use crate::error::ApiError;
#[cfg(feature = "server")]
use crate::server::auth::{WebAuthSession, ensure_authenticated};

/// Fetch a user's public profile together with their posts, newest first.
#[get("/api/profile")]
pub async fn get_profile(username: String) -> Result<ProfileInfo, ApiError> {
    let pool = crate::server::db_pool().await?;

    let record = sf_store::fetch_profile(&pool, &username)
        .await
        .map_err(ApiError::internal)?
        .ok_or_else(|| ApiError::not_found("user", username.clone()))?;

    let posts = sf_store::list_posts_by_author(&pool, record.id).await.map_err(ApiError::internal)?;

    Ok(ProfileInfo {
        username: record.username,
        display_name: record.display_name,
        bio: record.bio,
        joined_at: record.joined_at,
        posts,
    })
}

/// Update the signed-in user's display name and bio.
#[post("/api/profile/update", auth: WebAuthSession)]
pub async fn update_profile(request: UpdateProfileRequest) -> Result<ProfileInfo, ApiError> {
    let user = ensure_authenticated(&auth)?;

    let pool = crate::server::db_pool().await?;
    sf_store::update_profile(&pool, user.id, request.display_name.as_deref(), request.bio.as_deref())
        .await
        .map_err(ApiError::internal)?;

    // Refresh the auth cache so the next current-user answer carries the new name
    auth.cache_clear_user(user.id);

    tracing::info!(user = user.id, "profile updated");

    let record = sf_store::fetch_profile(&pool, &user.username)
        .await
        .map_err(ApiError::internal)?
        .ok_or_else(|| ApiError::not_found("user", user.username.clone()))?;

    let posts = sf_store::list_posts_by_author(&pool, record.id).await.map_err(ApiError::internal)?;

    Ok(ProfileInfo {
        username: record.username,
        display_name: record.display_name,
        bio: record.bio,
        joined_at: record.joined_at,
        posts,
    })
}
