use std::collections::HashMap;

use crate::{
    app::{
        api::auth::register,
        auth::{context::set_session, hooks::use_auth},
    },
    components::Layout,
};
use dioxus::prelude::*;
use sf_types::{
    auth::RegisterRequest,
    validation::{RegistrationValidationInput, ValidationError},
};

#[component]
pub fn RegisterPage() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut display_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);
    let mut validation_errors = use_signal(HashMap::<String, ValidationError>::new);

    // Already signed in, nothing to register
    use_effect(move || {
        let state = auth.read();
        if !state.loading && state.user.is_some() {
            navigator.push("/");
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.stop_propagation();
        evt.prevent_default();

        if submitting() {
            return;
        }

        error_message.set(None);

        let username_val = username();
        let password_val = password();
        let display_name_val = display_name();

        let errors = RegistrationValidationInput {
            username: &username_val,
            password: &password_val,
        }
        .validate();
        if !errors.is_empty() {
            // Show inline errors, skip the server call
            validation_errors.set(errors);
            return;
        }
        validation_errors.set(HashMap::new());

        submitting.set(true);

        let mut auth = auth;

        spawn(async move {
            let request = RegisterRequest {
                username: username_val.trim().to_string(),
                password: password_val.clone(),
                display_name: if display_name_val.trim().is_empty() {
                    None
                } else {
                    Some(display_name_val.trim().to_string())
                },
            };

            match register(request).await {
                Ok(response) => {
                    if response.success {
                        if let Some(user) = response.user {
                            set_session(&mut auth, user);
                        }
                        navigator.push("/");
                    } else {
                        error_message.set(Some(response.message));
                    }
                }
                Err(err) => {
                    error_message.set(Some(format!("Registration failed: {}", err)));
                }
            }

            submitting.set(false);
        });
    };

    rsx! {
        Layout {
            div { class: "flex items-center justify-center min-h-[calc(100vh-16rem)]",
                div { class: "card w-96 bg-base-100 shadow-xl",
                    div { class: "card-body",
                        h2 { class: "card-title justify-center mb-4", "Create your account" }

                        form { onsubmit: on_submit,
                            class: "flex flex-col gap-4",
                            div { class: "form-control w-full max-w-xs flex flex-col gap-2",
                                label { class: "label",
                                    span { class: "label-text", "Username" }
                                }
                                input {
                                    r#type: "text",
                                    placeholder: "username",
                                    class: "input input-bordered w-full max-w-xs",
                                    value: "{username}",
                                    oninput: move |evt| username.set(evt.value()),
                                    autocomplete: "username",
                                }
                                if let Some(err) = validation_errors().get("username") {
                                    span { class: "label-text-alt text-error", "{err}" }
                                }
                            }

                            div { class: "form-control w-full max-w-xs flex flex-col gap-2",
                                label { class: "label",
                                    span { class: "label-text", "Display name (optional)" }
                                }
                                input {
                                    r#type: "text",
                                    placeholder: "How others see you",
                                    class: "input input-bordered w-full max-w-xs",
                                    value: "{display_name}",
                                    oninput: move |evt| display_name.set(evt.value()),
                                }
                            }

                            div { class: "form-control w-full max-w-xs flex flex-col gap-2",
                                label { class: "label",
                                    span { class: "label-text", "Password" }
                                }
                                input {
                                    r#type: "password",
                                    placeholder: "password",
                                    class: "input input-bordered w-full max-w-xs",
                                    value: "{password}",
                                    oninput: move |evt| password.set(evt.value()),
                                    autocomplete: "new-password",
                                }
                                if let Some(err) = validation_errors().get("password") {
                                    span { class: "label-text-alt text-error", "{err}" }
                                }
                            }

                            if let Some(error) = error_message() {
                                div { class: "alert alert-error mt-4",
                                    span { "{error}" }
                                }
                            }

                            div { class: "card-actions justify-end mt-6",
                                button {
                                    r#type: "submit",
                                    class: "btn btn-primary w-full",
                                    disabled: submitting(),
                                    if submitting() {
                                        span { class: "loading loading-spinner" }
                                        span { "Creating account" }
                                    } else {
                                        span { "Register" }
                                    }
                                }
                            }

                            div { class: "divider", "OR" }

                            div { class: "text-center text-sm",
                                "Already have an account? "
                                Link { class: "link link-primary", to: crate::Routes::LoginPage {}, "Login" }
                            }
                        }
                    }
                }
            }
        }
    }
}
