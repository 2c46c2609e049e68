use dioxus::prelude::*;
use sf_types::forum::avatar_initial;

use crate::app::auth::hooks::use_auth;

/// Circle showing the uppercased first letter of a name, `?` when the name
/// is unavailable.
#[component]
pub fn AvatarBadge(name: String, #[props(default = false)] small: bool) -> Element {
    let initial = avatar_initial(&name);
    let size_class = if small { "w-7 h-7 text-sm" } else { "w-10 h-10 text-xl" };

    rsx! {
        div { class: "bg-neutral text-neutral-content rounded-full flex items-center justify-center {size_class}",
            span { "{initial}" }
        }
    }
}

#[component]
pub fn AvatarDropDown() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let (username, label) = auth
        .read()
        .user
        .as_ref()
        .map(|u| (u.username.clone(), u.display_label().to_string()))
        .unwrap_or_else(|| ("User".to_string(), "User".to_string()));

    rsx! {
        div { class: "dropdown dropdown-end pl-2",
            div {
                tabindex: "0",
                role: "button",
                class: "btn btn-ghost btn-circle avatar placeholder",
                AvatarBadge { name: label.clone() }
            }
            ul {
                tabindex: "-1",
                class: "menu menu-sm dropdown-content bg-base-100 rounded-box z-1 mt-3 w-52 p-2 shadow",
                li {
                    a { class: "pointer-events-none font-bold", "{label}" }
                }
                div { class: "divider my-0" }
                li {
                    a {
                        onclick: {
                            let username = username.clone();
                            move |_| {
                                navigator.push(crate::Routes::ProfilePage { username: username.clone() });
                            }
                        },
                        "My Profile"
                    }
                }
                li {
                    a {
                        onclick: move |_| {
                            navigator.push(crate::Routes::EditProfilePage {});
                        },
                        "Edit Profile"
                    }
                }
                div { class: "divider my-0" }
                li {
                    a {
                        onclick: move |_| {
                            navigator.push(crate::Routes::LogoutPage {});
                        },
                        "Logout"
                    }
                }
            }
        }
    }
}
