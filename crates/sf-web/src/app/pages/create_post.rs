use std::collections::HashMap;

use dioxus::prelude::*;
use sf_types::{
    forum::{CreatePostRequest, SUBJECTS},
    validation::{PostValidationInput, ValidationError},
};

use crate::{
    app::api::posts::create_post,
    components::{Layout, RequireAuth},
};

#[component]
pub fn CreatePostPage() -> Element {
    rsx! {
        RequireAuth {
            CreatePostForm {}
        }
    }
}

#[component]
fn CreatePostForm() -> Element {
    let navigator = use_navigator();

    let mut title = use_signal(String::new);
    let mut subject = use_signal(|| SUBJECTS[0].to_string());
    let mut content = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);
    let mut validation_errors = use_signal(HashMap::<String, ValidationError>::new);

    let on_submit = move |evt: Event<FormData>| {
        evt.stop_propagation();
        evt.prevent_default();

        if submitting() {
            return;
        }

        error_message.set(None);

        let title_val = title();
        let subject_val = subject();
        let content_val = content();

        let errors = PostValidationInput {
            title: &title_val,
            subject: &subject_val,
            content: &content_val,
        }
        .validate();
        if !errors.is_empty() {
            // Show inline errors, skip the server call
            validation_errors.set(errors);
            return;
        }
        validation_errors.set(HashMap::new());

        submitting.set(true);

        spawn(async move {
            let request = CreatePostRequest {
                title: title_val.clone(),
                subject: subject_val.clone(),
                content: content_val.clone(),
            };

            match create_post(request).await {
                Ok(post) => {
                    navigator.push(crate::Routes::PostDetailPage { id: post.id });
                }
                Err(err) => {
                    error_message.set(Some(format!("Failed to create post: {}", err)));
                }
            }

            submitting.set(false);
        });
    };

    rsx! {
        Layout {
            div { class: "max-w-3xl mx-auto",
                div { class: "card bg-base-100 shadow-sm",
                    div { class: "card-body",
                        h1 { class: "card-title text-2xl mb-4", "Start a discussion" }

                        form { onsubmit: on_submit,
                            class: "flex flex-col gap-4",
                            div { class: "form-control flex flex-col gap-2",
                                label { class: "label",
                                    span { class: "label-text", "Title" }
                                }
                                input {
                                    r#type: "text",
                                    placeholder: "What is your question or topic?",
                                    class: "input input-bordered w-full",
                                    value: "{title}",
                                    oninput: move |evt| title.set(evt.value()),
                                }
                                if let Some(err) = validation_errors().get("title") {
                                    span { class: "label-text-alt text-error", "{err}" }
                                }
                            }

                            div { class: "form-control flex flex-col gap-2",
                                label { class: "label",
                                    span { class: "label-text", "Subject" }
                                }
                                select {
                                    class: "select select-bordered w-full max-w-xs",
                                    value: "{subject}",
                                    onchange: move |evt| subject.set(evt.value()),
                                    for s in SUBJECTS {
                                        option { value: "{s}", "{s}" }
                                    }
                                }
                            }

                            div { class: "form-control flex flex-col gap-2",
                                label { class: "label",
                                    span { class: "label-text", "Content" }
                                }
                                textarea {
                                    class: "textarea textarea-bordered w-full",
                                    rows: "8",
                                    placeholder: "Share the details...",
                                    value: "{content}",
                                    oninput: move |evt| content.set(evt.value()),
                                }
                                if let Some(err) = validation_errors().get("content") {
                                    span { class: "label-text-alt text-error", "{err}" }
                                }
                            }

                            if let Some(error) = error_message() {
                                div { class: "alert alert-error",
                                    span { "{error}" }
                                }
                            }

                            div { class: "card-actions justify-end",
                                button {
                                    r#type: "submit",
                                    class: "btn btn-primary px-6",
                                    disabled: submitting(),
                                    if submitting() {
                                        span { class: "loading loading-spinner" }
                                        span { "Publishing" }
                                    } else {
                                        span { "Publish Post" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
