// Authentication server functions
// These are Dioxus server functions that can be called from client code via RPC

use dioxus::prelude::*;
use sf_types::auth::{AuthUserInfo, LoginRequest, LoginResponse, RegisterRequest};

use crate::error::ApiError;
#[cfg(feature = "server")]
use crate::server::auth::WebAuthSession;
#[cfg(feature = "server")]
use axum_session_sqlx::SessionSqlitePool;

#[post(
    "/api/auth/login",
    auth: WebAuthSession,
    session: axum_session::Session<SessionSqlitePool>
)]
pub async fn login(request: LoginRequest) -> Result<LoginResponse, ApiError> {
    use sf_types::auth::AuthDecision;

    use crate::server::auth::authenticate_password;

    // Touch the session so the backing store entry exists before auth state mutates
    let _session_id = session.get_session_id();

    let pool = crate::server::db_pool().await?;

    match authenticate_password(&pool, &request.username, &request.password).await {
        AuthDecision::Accept => {
            let user_id = sf_store::fetch_user_id_by_name(&pool, &request.username)
                .await
                .map_err(ApiError::internal)?
                .ok_or(ApiError::Unauthorized)?;

            let record = sf_store::fetch_user_auth_record(&pool, user_id)
                .await
                .map_err(ApiError::internal)?
                .ok_or(ApiError::Unauthorized)?;

            // Clear the auth cache so a stale identity does not survive re-login
            auth.cache_clear_user(user_id);
            auth.login_user(user_id);

            tracing::info!(user = %record.username, id = user_id, "login succeeded");

            Ok(LoginResponse {
                success: true,
                message: "Login successful".to_string(),
                user: Some(AuthUserInfo {
                    id: record.id,
                    username: record.username,
                    display_name: record.display_name,
                }),
            })
        }
        AuthDecision::Reject => Ok(LoginResponse {
            success: false,
            message: "Invalid username or password".to_string(),
            user: None,
        }),
    }
}

#[post(
    "/api/auth/register",
    auth: WebAuthSession,
    session: axum_session::Session<SessionSqlitePool>
)]
pub async fn register(request: RegisterRequest) -> Result<LoginResponse, ApiError> {
    use sf_types::validation::{RegistrationValidationInput, format_errors};

    let _session_id = session.get_session_id();

    // The client runs the same checks; repeat them here so the endpoint
    // cannot be driven past them directly.
    let errors = RegistrationValidationInput {
        username: &request.username,
        password: &request.password,
    }
    .validate();
    if !errors.is_empty() {
        return Err(ApiError::validation(format_errors(&errors)));
    }

    let pool = crate::server::db_pool().await?;

    if sf_store::fetch_user_id_by_name(&pool, &request.username)
        .await
        .map_err(ApiError::internal)?
        .is_some()
    {
        return Ok(LoginResponse {
            success: false,
            message: format!("Username '{}' is already taken", request.username),
            user: None,
        });
    }

    let password_hash = crate::server::auth::hash_password(&request.password)?;
    let display_name = request.display_name.as_deref().filter(|name| !name.trim().is_empty());

    let user_id = sf_store::create_user(&pool, &request.username, &password_hash, display_name)
        .await
        .map_err(ApiError::internal)?;

    auth.cache_clear_user(user_id);
    auth.login_user(user_id);

    tracing::info!(user = %request.username, id = user_id, "account registered");

    Ok(LoginResponse {
        success: true,
        message: "Welcome to StudyForum".to_string(),
        user: Some(AuthUserInfo {
            id: user_id,
            username: request.username.clone(),
            display_name: display_name.map(|name| name.to_string()),
        }),
    })
}

#[post("/api/auth/logout", auth: WebAuthSession)]
pub async fn logout() -> Result<(), ApiError> {
    if auth.is_authenticated() {
        auth.logout_user();
    }

    Ok(())
}

#[get("/api/auth/current-user", auth: WebAuthSession)]
pub async fn get_current_user() -> Result<Option<AuthUserInfo>, ApiError> {
    if auth.is_authenticated() {
        if let Some(user) = auth.current_user {
            Ok(Some(user.0.clone()))
        } else {
            Ok(None)
        }
    } else {
        Ok(None)
    }
}
