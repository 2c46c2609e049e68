use dioxus::prelude::*;

use crate::app::{
    self,
    auth::context::use_auth_provider,
    components::{Intro, use_toast_provider},
};

/// Root shell: wraps the router and global providers, and overlays the intro
/// splash until it reports completion.
#[component]
pub fn app_root() -> Element {
    let auth = use_auth_provider();
    use_context_provider(|| auth);
    use_toast_provider();

    let mut show_intro = use_signal(|| true);

    rsx! {
        document::Title { "StudyForum" }
        // FIXME: hash suffix is disabled for now because it breaks when we use cargo run
        document::Stylesheet { href: clean_asset_path(asset!("/assets/main.css", AssetOptions::builder().with_hash_suffix(false)).to_string()) }
        if show_intro() {
            Intro { on_complete: move |_| show_intro.set(false) }
        }
        div {
            app::routes::AppRouter {}
        }
    }
}

pub fn clean_asset_path(path: String) -> String {
    // When running via `cargo run`, the asset! macro returns an absolute path
    // We want to strip everything up to /assets/
    if let Some(idx) = path.find("/assets/") {
        path[idx..].to_string()
    } else {
        path
    }
}
