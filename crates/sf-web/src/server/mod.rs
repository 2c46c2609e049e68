//! Server-only glue: the Axum server that serves the Dioxus application and
//! the session/auth layers the server functions rely on.

pub mod auth;
pub mod config;

use axum::Router;
use axum_session::{SessionConfig, SessionLayer, SessionStore};
use axum_session_auth::{AuthConfig, AuthSessionLayer};
use axum_session_sqlx::SessionSqlitePool;
use dioxus::prelude::*;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::server::auth::WebUser;
pub use config::WebServerConfig;

/// Pooled database handle for server function bodies.
pub async fn db_pool() -> Result<SqlitePool, ApiError> {
    let handle = sf_store::forum_db().await.map_err(ApiError::internal)?;
    Ok(handle.into_pool())
}

/// Start the Dioxus fullstack web server with Axum integration.
pub async fn run_web_server(config: WebServerConfig, app: fn() -> Element) -> anyhow::Result<()> {
    let handle = sf_store::forum_db().await?;
    sf_store::migrate(&handle).await?;
    let pool = handle.into_pool();

    let session_config = SessionConfig::default().with_table_name("web_sessions");
    let session_store = SessionStore::<SessionSqlitePool>::new(Some(pool.clone().into()), session_config).await?;
    session_store.initiate().await?;

    let addr = format!("{}:{}", config.bind, config.port);

    let router = Router::new()
        .serve_dioxus_application(ServeConfig::new(), app)
        .layer(
            AuthSessionLayer::<WebUser, i64, SessionSqlitePool, SqlitePool>::new(Some(pool.clone()))
                .with_config(AuthConfig::<i64>::default()),
        )
        .layer(SessionLayer::new(session_store))
        .into_make_service();

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(%addr, db = %sf_store::display_db_path(), "starting web server (HTTP) with Dioxus fullstack");
    axum::serve(listener, router).await?;

    Ok(())
}
