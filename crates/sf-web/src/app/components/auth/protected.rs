use crate::app::auth::hooks::use_auth;
use dioxus::prelude::*;

/// Session-gated conditional rendering.
///
/// Shows children only while a user is signed in, otherwise shows the
/// fallback (or nothing).
///
/// # Examples
///
/// ```text
/// // Hide the new-post link for visitors
/// rsx! {
///     Protected {
///         li { Link { to: Routes::CreatePostPage {}, "New Post" } }
///     }
/// }
///
/// // Show a login prompt instead of the comment form
/// rsx! {
///     Protected {
///         fallback: rsx! { p { "Please login to join the discussion." } },
///         CommentForm {}
///     }
/// }
/// ```
#[component]
pub fn Protected(
    /// Content to show when no session is active
    fallback: Option<Element>,
    /// Content to show when a session is active
    children: Element,
) -> Element {
    let auth = use_auth();
    let is_authorized = auth.read().user.is_some();

    rsx! {
        if is_authorized {
            {children}
        } else if let Some(fallback_element) = fallback {
            {fallback_element}
        }
    }
}
