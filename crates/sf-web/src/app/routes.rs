use dioxus::prelude::*;

use crate::pages::{
    CreatePostPage, EditProfilePage, HomePage, LoginPage, LogoutPage, NotFoundPage, PostDetailPage, ProfilePage,
    RegisterPage,
};

#[component]
pub fn AppRouter() -> Element {
    rsx! {
        Router::<Routes> {}
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Routes {
    #[route("/")]
    HomePage {},
    #[route("/login")]
    LoginPage {},
    #[route("/register")]
    RegisterPage {},
    #[route("/logout")]
    LogoutPage {},
    #[route("/post/:id")]
    PostDetailPage { id: i64 },
    #[route("/profile/:username")]
    ProfilePage { username: String },
    #[route("/create-post")]
    CreatePostPage {},
    #[route("/edit-profile")]
    EditProfilePage {},
    #[route("/:..route")]
    NotFoundPage { route: Vec<String> },
}
