use dioxus::prelude::*;
use sf_types::auth::AuthUserInfo;

use crate::app::{
    api::auth::get_current_user,
    storage::{BrowserStorage, StorageType},
};

const SESSION_KEY: &str = "sf_session";

/// Authentication state
#[derive(Clone, PartialEq, Debug)]
pub struct AuthState {
    pub user: Option<AuthUserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

/// Initialize auth state and revalidate it against the server session.
///
/// The last session snapshot is restored from local storage for the first
/// paint; the cookie session is the authority and overwrites it as soon as
/// `get_current_user` answers.
pub fn use_auth_provider() -> Signal<AuthState> {
    let mut auth = use_signal(|| AuthState {
        user: session_storage().get_json::<AuthUserInfo>(SESSION_KEY),
        loading: true,
    });

    // Fetch current user on mount
    use_effect(move || {
        spawn(async move {
            match get_current_user().await {
                Ok(user) => {
                    match &user {
                        Some(user) => persist_snapshot(user),
                        None => drop_snapshot(),
                    }
                    auth.set(AuthState { user, loading: false });
                }
                Err(_) => {
                    auth.set(AuthState { user: None, loading: false });
                }
            }
        });
    });

    auth
}

/// Record a new session. Together with [`clear_session`] this is the only
/// writer of the auth state.
pub fn set_session(auth: &mut Signal<AuthState>, user: AuthUserInfo) {
    persist_snapshot(&user);
    auth.set(AuthState {
        user: Some(user),
        loading: false,
    });
}

/// Drop the current session.
pub fn clear_session(auth: &mut Signal<AuthState>) {
    drop_snapshot();
    auth.set(AuthState { user: None, loading: false });
}

fn session_storage() -> BrowserStorage {
    BrowserStorage::new(StorageType::Local)
}

fn persist_snapshot(user: &AuthUserInfo) {
    if let Err(err) = session_storage().set_json(SESSION_KEY, user) {
        tracing::warn!(%err, "failed to persist session snapshot");
    }
}

fn drop_snapshot() {
    let _ = session_storage().remove(SESSION_KEY);
}
