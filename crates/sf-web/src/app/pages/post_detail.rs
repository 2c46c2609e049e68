use dioxus::prelude::*;
use sf_types::{
    forum::{CommentInfo, CreateCommentRequest, avatar_initial},
    validation::CommentValidationInput,
};

use crate::{
    app::api::{comments::create_comment, posts::get_post},
    components::{AvatarBadge, Layout, Protected},
};

#[component]
pub fn PostDetailPage(id: ReadOnlySignal<i64>) -> Element {
    let detail = use_resource(move || async move { get_post(id()).await });

    // Comments live in local state so a successful submit can append the new
    // comment without re-fetching the post.
    let mut comments = use_signal(Vec::<CommentInfo>::new);
    use_effect(move || {
        if let Some(Ok(loaded)) = detail() {
            comments.set(loaded.comments);
        }
    });

    let mut new_comment = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut comment_error = use_signal(|| None::<String>);

    let on_submit_comment = move |evt: Event<FormData>| {
        evt.stop_propagation();
        evt.prevent_default();

        if submitting() {
            return;
        }

        comment_error.set(None);

        // Blank input never reaches the server; the draft stays in the box
        // either way.
        let draft = new_comment();
        let errors = CommentValidationInput { content: &draft }.validate();
        if let Some(err) = errors.get("content") {
            comment_error.set(Some(err.to_string()));
            return;
        }

        submitting.set(true);

        spawn(async move {
            let request = CreateCommentRequest { content: draft.clone() };

            match create_comment(id(), request).await {
                Ok(comment) => {
                    comments.write().push(comment);
                    new_comment.set(String::new());
                }
                Err(err) => {
                    comment_error.set(Some(format!("Failed to post comment: {}", err)));
                }
            }

            submitting.set(false);
        });
    };

    let body = match detail() {
        Some(Ok(loaded)) => {
            let post = loaded.post;
            let date = post.created_at.format("%Y-%m-%d").to_string();
            let initial = avatar_initial(&post.author.name);

            rsx! {
                div { class: "card bg-base-100 shadow-sm mb-6",
                    div { class: "card-body",
                        div {
                            span { class: "badge badge-outline badge-primary px-3", "{post.subject}" }
                        }

                        h1 { class: "text-3xl font-bold mt-2", "{post.title}" }

                        div { class: "flex items-center gap-2 text-sm opacity-70 mb-4",
                            div { class: "bg-primary text-primary-content rounded-full w-8 h-8 flex items-center justify-center",
                                "{initial}"
                            }
                            span { class: "font-medium", "{post.author.name}" }
                            span { "{date}" }
                        }

                        div { class: "flex flex-col gap-2",
                            for para in post.content.split('\n') {
                                p { "{para}" }
                            }
                        }
                    }
                }

                h2 { class: "text-xl font-bold mb-4", "Comments ({comments().len()})" }

                if comments().is_empty() {
                    div { class: "text-center py-4 opacity-70 bg-base-100 rounded-box mb-4 border border-base-300",
                        "No comments yet. Be the first to share your thoughts!"
                    }
                } else {
                    div { class: "flex flex-col gap-3 mb-4",
                        for comment in comments() {
                            div { class: "card bg-base-100 shadow-sm",
                                div { class: "card-body p-4",
                                    div { class: "flex justify-between items-center mb-2",
                                        div { class: "flex items-center gap-2",
                                            AvatarBadge { name: comment.author.name.clone(), small: true }
                                            span { class: "font-medium text-sm", "{comment.author.name}" }
                                        }
                                        span { class: "text-sm opacity-70",
                                            {comment.created_at.format("%Y-%m-%d").to_string()}
                                        }
                                    }
                                    p { class: "text-sm", "{comment.content}" }
                                }
                            }
                        }
                    }
                }

                Protected {
                    fallback: rsx! {
                        div { class: "alert alert-info",
                            span {
                                "Please "
                                Link { class: "link font-bold", to: crate::Routes::LoginPage {}, "login" }
                                " to join the discussion."
                            }
                        }
                    },
                    div { class: "card bg-base-100 shadow-sm",
                        div { class: "card-body",
                            h3 { class: "font-bold mb-2", "Leave a comment" }
                            form { onsubmit: on_submit_comment,
                                textarea {
                                    class: "textarea textarea-bordered w-full",
                                    rows: "3",
                                    placeholder: "What are your thoughts?",
                                    value: "{new_comment}",
                                    oninput: move |evt| new_comment.set(evt.value()),
                                }

                                if let Some(error) = comment_error() {
                                    div { class: "alert alert-error mt-2",
                                        span { "{error}" }
                                    }
                                }

                                button {
                                    r#type: "submit",
                                    class: "btn btn-primary btn-sm px-4 mt-3",
                                    disabled: submitting(),
                                    if submitting() { "Posting..." } else { "Post Comment" }
                                }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(err)) if err.is_not_found() => rsx! {
            div { class: "text-center py-16",
                h3 { class: "text-2xl font-bold", "Post not found" }
                p { class: "opacity-70 mt-2", "This post may have been removed." }
                Link { class: "btn btn-primary mt-6", to: crate::Routes::HomePage {}, "Back to discussions" }
            }
        },
        Some(Err(err)) => rsx! {
            div { class: "alert alert-error",
                span { "Error loading post: {err}" }
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
