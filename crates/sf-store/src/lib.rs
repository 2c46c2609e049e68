//! State management for StudyForum - database operations and persistence.
//!
//! This crate provides the SQLite-backed store the server functions call,
//! organized into focused submodules:
//!
//! - `db`: Database initialization, migration, and connection management
//! - `users`: User account and profile operations
//! - `posts`: Post storage and listing
//! - `comments`: Comment storage
//! - `error`: Error types and results

mod comments;
mod db;
mod error;
mod posts;
mod users;

pub use comments::*;
pub use db::*;
pub use error::{DbError, DbResult};
pub use posts::*;
// Re-export types from sf-types
pub use sf_types::{
    auth::UserAuthRecord,
    forum::{AuthorInfo, CommentInfo, PostInfo},
    profile::ProfileRecord,
};
pub use users::*;

#[cfg(test)]
mod tests_forum;
