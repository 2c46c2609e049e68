use axum_session_auth::Authentication;
use sf_types::auth::AuthUserInfo;
use sqlx::SqlitePool;

#[derive(Clone, Debug)]
pub struct WebUser(pub AuthUserInfo);

use std::ops::{Deref, DerefMut};

impl Deref for WebUser {
    type Target = AuthUserInfo;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for WebUser {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[async_trait::async_trait]
impl Authentication<WebUser, i64, SqlitePool> for WebUser {
    async fn load_user(userid: i64, pool: Option<&SqlitePool>) -> Result<WebUser, anyhow::Error> {
        let pool = pool.ok_or_else(|| anyhow::anyhow!("No database pool provided"))?;

        let user = sf_store::fetch_user_auth_record(pool, userid)
            .await?
            .ok_or_else(|| anyhow::anyhow!("User not found"))?;

        tracing::debug!(username = user.username, id = user.id, "loaded session user");

        Ok(WebUser(AuthUserInfo {
            id: user.id,
            username: user.username,
            display_name: user.display_name,
        }))
    }

    fn is_authenticated(&self) -> bool {
        true
    }

    fn is_active(&self) -> bool {
        true
    }

    fn is_anonymous(&self) -> bool {
        false
    }
}
