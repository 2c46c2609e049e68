use dioxus::prelude::*;

use crate::components::Layout;

#[component]
pub fn NotFoundPage(route: Vec<String>) -> Element {
    let path = route.join("/");

    rsx! {
        Layout {
            div { class: "text-center py-16",
                h1 { class: "text-3xl font-bold", "Page not found" }
                p { class: "opacity-70 mt-2", "No such page: /{path}" }
                Link { class: "btn btn-primary mt-6", to: crate::Routes::HomePage {}, "Back to discussions" }
            }
        }
    }
}
