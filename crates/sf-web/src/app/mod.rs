pub mod auth;
pub mod components;
pub mod logging;
pub mod pages;
pub mod routes;
pub mod storage;

// Server functions need to be accessible from both client and server
pub mod api;
