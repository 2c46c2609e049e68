use crate::app::auth::hooks::use_auth;
use dioxus::prelude::*;

/// Route guard component that requires an active session.
///
/// Redirects to /login when no session is present. Children are only mounted
/// for an authenticated user, so a protected page never starts its data
/// loads for a signed-out visitor.
///
/// # Examples
///
/// ```text
/// #[component]
/// pub fn CreatePostPage() -> Element {
///     rsx! { RequireAuth { CreatePostForm {} } }
/// }
/// ```
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let auth = use_auth();
    let nav = navigator();

    // Redirect to login if not authenticated
    use_effect(move || {
        let auth_state = auth.read();
        if !auth_state.loading && auth_state.user.is_none() {
            nav.push("/login");
        }
    });

    // Show loading while checking auth
    if auth.read().loading {
        return rsx! {
            div { class: "flex items-center justify-center min-h-screen",
                span { class: "loading loading-spinner loading-lg" }
            }
        };
    }

    // User not authenticated
    if auth.read().user.is_none() {
        return rsx! { div {} }; // Will redirect via effect
    }

    children
}
