use super::context::AuthState;
use dioxus::prelude::*;

/// Get current auth state from context
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}
