use crate::{
    app::auth::hooks::use_auth,
    components::{AvatarDropDown, Protected},
};
use dioxus::prelude::*;

#[component]
pub fn NavBar() -> Element {
    let auth = use_auth();
    let logged_in = auth.read().user.is_some();

    rsx! {
        div { class: "navbar bg-base-200 shadow-sm",
            div { class: "flex-1",
                a { class: "btn btn-ghost text-xl", href: "/", "StudyForum" }
                ul { class: "menu menu-horizontal px-1",
                    li { Link { to: crate::Routes::HomePage {}, "Home" } }
                    Protected {
                        li { Link { to: crate::Routes::CreatePostPage {}, "New Post" } }
                    }
                }
            }

            div { class: "flex-none gap-2",
                if logged_in {
                    AvatarDropDown {}
                } else {
                    Link { class: "btn btn-ghost btn-sm", to: crate::Routes::LoginPage {}, "Login" }
                    Link { class: "btn btn-primary btn-sm", to: crate::Routes::RegisterPage {}, "Register" }
                }
            }
        }
    }
}
