use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer footer-center bg-base-200 text-base-content p-6 mt-8",
            nav { class: "grid grid-flow-col gap-4",
                Link { class: "link link-hover", to: crate::Routes::HomePage {}, "Home" }
                Link { class: "link link-hover", to: crate::Routes::LoginPage {}, "Login" }
                Link { class: "link link-hover", to: crate::Routes::RegisterPage {}, "Register" }
            }
            aside {
                p { "StudyForum: a place for students to share knowledge and grow together." }
                p { "Copyright © 2026 - All right reserved" }
            }
        }
    }
}
