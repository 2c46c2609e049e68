use dioxus::prelude::*;
use sf_types::forum::PostInfo;

use crate::components::AvatarBadge;

const PREVIEW_CHARS: usize = 160;

/// Summary card used on the home page and in profile post lists.
#[component]
pub fn PostCard(post: PostInfo) -> Element {
    let preview = if post.content.chars().count() > PREVIEW_CHARS {
        let cut: String = post.content.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        post.content.clone()
    };
    let date = post.created_at.format("%Y-%m-%d").to_string();

    rsx! {
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body",
                div { class: "badge badge-outline badge-primary", "{post.subject}" }
                h2 { class: "card-title",
                    Link { to: crate::Routes::PostDetailPage { id: post.id }, "{post.title}" }
                }
                p { class: "text-sm opacity-80", "{preview}" }
                div { class: "flex items-center gap-2 text-sm opacity-70",
                    AvatarBadge { name: post.author.name.clone(), small: true }
                    span { class: "font-medium", "{post.author.name}" }
                    span { "{date}" }
                }
            }
        }
    }
}
