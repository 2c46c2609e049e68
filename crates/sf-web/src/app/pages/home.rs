use dioxus::prelude::*;
use sf_types::forum::SUBJECTS;

use crate::{
    app::api::posts::get_posts,
    components::{Layout, PostCard},
};

#[component]
pub fn HomePage() -> Element {
    let mut subject_filter = use_signal(|| None::<String>);

    // Reloads whenever the selected subject changes
    let posts = use_resource(move || async move { get_posts(subject_filter()).await });

    rsx! {
        Layout {
            div { class: "max-w-3xl mx-auto flex flex-col gap-4",
                h1 { class: "text-3xl font-bold", "Recent Discussions" }

                div { class: "flex flex-wrap gap-2",
                    button {
                        class: if subject_filter().is_none() { "btn btn-sm btn-primary" } else { "btn btn-sm btn-ghost" },
                        onclick: move |_| subject_filter.set(None),
                        "All"
                    }
                    for subject in SUBJECTS {
                        button {
                            class: if subject_filter().as_deref() == Some(*subject) { "btn btn-sm btn-primary" } else { "btn btn-sm btn-ghost" },
                            onclick: move |_| subject_filter.set(Some(subject.to_string())),
                            "{subject}"
                        }
                    }
                }

                match posts() {
                    Some(Ok(posts)) => rsx! {
                        if posts.is_empty() {
                            div { class: "text-center py-8 opacity-70",
                                "No posts yet. Start the first discussion!"
                            }
                        } else {
                            div { class: "flex flex-col gap-3",
                                for post in posts {
                                    PostCard { post }
                                }
                            }
                        }
                    },
                    Some(Err(e)) => rsx! {
                        div { class: "alert alert-error",
                            span { "Error loading posts: {e}" }
                        }
                    },
                    None => rsx! {
                        div { class: "flex justify-center p-8",
                            span { class: "loading loading-spinner loading-lg" }
                        }
                    }
                }
            }
        }
    }
}
