use dioxus::prelude::*;

use crate::{
    app::{api::profiles::get_profile, auth::hooks::use_auth},
    components::{AvatarBadge, Layout, PostCard},
};

#[component]
pub fn ProfilePage(username: ReadOnlySignal<String>) -> Element {
    let auth = use_auth();
    let profile = use_resource(move || async move { get_profile(username()).await });

    let body = match profile() {
        Some(Ok(profile)) => {
            let is_own = auth
                .read()
                .user
                .as_ref()
                .is_some_and(|user| user.username == profile.username);
            let label = profile.display_label().to_string();
            let joined = profile.joined_at.format("%B %Y").to_string();

            rsx! {
                div { class: "card bg-base-100 shadow-sm mb-6",
                    div { class: "card-body",
                        div { class: "flex items-center gap-4",
                            AvatarBadge { name: label.clone() }
                            div { class: "flex-1",
                                h1 { class: "text-2xl font-bold", "{label}" }
                                p { class: "opacity-70", "@{profile.username}" }
                                p { class: "text-sm opacity-70", "Joined {joined}" }
                            }
                            if is_own {
                                Link { class: "btn btn-outline btn-sm", to: crate::Routes::EditProfilePage {}, "Edit Profile" }
                            }
                        }
                        if let Some(bio) = profile.bio.as_ref() {
                            p { class: "mt-4", "{bio}" }
                        }
                    }
                }

                h2 { class: "text-xl font-bold mb-4", "Posts ({profile.posts.len()})" }

                if profile.posts.is_empty() {
                    div { class: "text-center py-8 opacity-70",
                        "No posts yet."
                    }
                } else {
                    div { class: "flex flex-col gap-3",
                        for post in profile.posts.clone() {
                            PostCard { post }
                        }
                    }
                }
            }
        }
        Some(Err(err)) if err.is_not_found() => rsx! {
            div { class: "text-center py-16",
                h3 { class: "text-2xl font-bold", "User not found" }
                p { class: "opacity-70 mt-2", "There is no user with that name." }
                Link { class: "btn btn-primary mt-6", to: crate::Routes::HomePage {}, "Back to discussions" }
            }
        },
        Some(Err(err)) => rsx! {
            div { class: "alert alert-error",
                span { "Error loading profile: {err}" }
            }
        },
        None => rsx! {
            div { class: "flex justify-center p-8",
                span { class: "loading loading-spinner loading-lg" }
            }
        },
    };

    rsx! {
        Layout {
            div { class: "max-w-3xl mx-auto", {body} }
        }
    }
}
