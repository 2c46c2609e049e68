use axum_session_auth::AuthSession;
use axum_session_sqlx::SessionSqlitePool;
use sqlx::SqlitePool;

use super::types::WebUser;
use crate::error::ApiError;

pub type WebAuthSession = AuthSession<WebUser, i64, SessionSqlitePool, SqlitePool>;

/// Result type for guard functions using ApiError.
pub type GuardResult<T> = Result<T, ApiError>;

pub fn ensure_authenticated(auth: &WebAuthSession) -> GuardResult<WebUser> {
    auth.current_user.clone().ok_or(ApiError::Unauthorized)
}
