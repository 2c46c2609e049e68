use dioxus::prelude::*;

use crate::components::{Footer, NavBar, Toast};

#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
        div {
            class: "sf-layout min-h-screen flex flex-col",
            header {
                NavBar {}
            }
            main {
                class: "sf-main flex-grow p-4", {
                    children
                }
            }
            Footer {}
            Toast {}
        }
    }
}
