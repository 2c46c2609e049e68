use std::time::Duration;

use dioxus::prelude::*;
use gloo_timers::future::sleep;

/// Fullscreen splash shown on first load. The fade starts at 2.5s and the
/// parent is told to unmount the overlay at 3.3s, once the transition is done.
#[component]
pub fn Intro(on_complete: EventHandler<()>) -> Element {
    let mut fade_out = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            sleep(Duration::from_millis(2500)).await;
            fade_out.set(true);
            sleep(Duration::from_millis(800)).await;
            on_complete.call(());
        });
    });

    rsx! {
        div { class: if fade_out() { "sf-intro sf-intro-fade-out" } else { "sf-intro" },
            div { class: "sf-intro-content text-center",
                h1 { class: "text-4xl font-bold", "StudyForum" }
                p { class: "mt-2 opacity-70", "A place for students to share knowledge" }
                span { class: "loading loading-dots loading-lg mt-4" }
            }
        }
    }
}
