use dioxus::prelude::*;
use sf_types::{auth::AuthUserInfo, profile::UpdateProfileRequest};

use crate::{
    app::{
        api::profiles::{get_profile, update_profile},
        auth::{context::set_session, hooks::use_auth},
    },
    components::{Layout, RequireAuth, use_toast},
};

#[component]
pub fn EditProfilePage() -> Element {
    rsx! {
        RequireAuth {
            EditProfileForm {}
        }
    }
}

#[component]
fn EditProfileForm() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let toast = use_toast();

    // RequireAuth only mounts this form with a session present
    let username = auth
        .read()
        .user
        .as_ref()
        .map(|user| user.username.clone())
        .unwrap_or_default();

    let profile = use_resource({
        let username = username.clone();
        move || {
            let username = username.clone();
            async move { get_profile(username).await }
        }
    });

    let mut display_name = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut prefilled = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    // Prefill the form once the profile loads; later edits are not clobbered
    use_effect(move || {
        if prefilled() {
            return;
        }
        if let Some(Ok(profile)) = profile() {
            display_name.set(profile.display_name.unwrap_or_default());
            bio.set(profile.bio.unwrap_or_default());
            prefilled.set(true);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.stop_propagation();
        evt.prevent_default();

        if submitting() {
            return;
        }

        error_message.set(None);
        submitting.set(true);

        let mut auth = auth;

        spawn(async move {
            let request = UpdateProfileRequest {
                display_name: none_if_blank(display_name()),
                bio: none_if_blank(bio()),
            };

            match update_profile(request).await {
                Ok(updated) => {
                    // Keep the navbar identity in sync with the new display name
                    let current = auth.read().user.clone();
                    if let Some(user) = current {
                        set_session(
                            &mut auth,
                            AuthUserInfo {
                                display_name: updated.display_name.clone(),
                                ..user
                            },
                        );
                    }

                    toast.success("Profile updated");
                    navigator.push(crate::Routes::ProfilePage {
                        username: updated.username.clone(),
                    });
                }
                Err(err) => {
                    error_message.set(Some(format!("Failed to update profile: {}", err)));
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
                        h1 { class: "card-title text-2xl mb-4", "Edit profile" }

                        if profile().is_none() {
                            div { class: "flex justify-center p-8",
                                span { class: "loading loading-spinner loading-lg" }
                            }
                        } else {
                            form { onsubmit: on_submit,
                                class: "flex flex-col gap-4",
                                div { class: "form-control flex flex-col gap-2",
                                    label { class: "label",
                                        span { class: "label-text", "Display name" }
                                    }
                                    input {
                                        r#type: "text",
                                        placeholder: "How others see you",
                                        class: "input input-bordered w-full max-w-xs",
                                        value: "{display_name}",
                                        oninput: move |evt| display_name.set(evt.value()),
                                    }
                                }

                                div { class: "form-control flex flex-col gap-2",
                                    label { class: "label",
                                        span { class: "label-text", "Bio" }
                                    }
                                    textarea {
                                        class: "textarea textarea-bordered w-full",
                                        rows: "4",
                                        placeholder: "A few words about yourself",
                                        value: "{bio}",
                                        oninput: move |evt| bio.set(evt.value()),
                                    }
                                }

                                if let Some(error) = error_message() {
                                    div { class: "alert alert-error",
                                        span { "{error}" }
                                    }
                                }

                                div { class: "card-actions justify-end",
                                    Link {
                                        class: "btn btn-ghost",
                                        to: crate::Routes::ProfilePage { username: username.clone() },
                                        "Cancel"
                                    }
                                    button {
                                        r#type: "submit",
                                        class: "btn btn-primary px-6",
                                        disabled: submitting(),
                                        if submitting() {
                                            span { class: "loading loading-spinner" }
                                            span { "Saving" }
                                        } else {
                                            span { "Save Changes" }
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
}

fn none_if_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}
