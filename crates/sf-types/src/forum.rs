use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subjects a post can be filed under.
pub const SUBJECTS: &[&str] = &[
    "Math",
    "Science",
    "Programming",
    "Literature",
    "History",
    "General",
];

/// Author identity attached to posts and comments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorInfo {
    pub id: i64,
    pub name: String,
}

impl AuthorInfo {
    /// Uppercased first letter of the author name, `'?'` when unavailable.
    pub fn initial(&self) -> char {
        avatar_initial(&self.name)
    }
}

/// Uppercased first character used for avatar placeholders.
pub fn avatar_initial(name: &str) -> char {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// A single forum post.
pub struct PostInfo {
    pub id: i64,
    pub title: String,
    /// Subject tag, one of [`SUBJECTS`].
    pub subject: String,
    pub content: String,
    pub author: AuthorInfo,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// A comment on a post.
pub struct CommentInfo {
    pub id: i64,
    pub post_id: i64,
    pub content: String,
    pub author: AuthorInfo,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Payload for the post detail page: the post plus its comments, oldest first.
pub struct PostDetailResponse {
    pub post: PostInfo,
    pub comments: Vec<CommentInfo>,
}

// ===== Request DTOs =====

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub subject: String,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_initial_uses_first_letter_uppercased() {
        assert_eq!(avatar_initial("alice"), 'A');
        assert_eq!(avatar_initial("Bob"), 'B');
        assert_eq!(avatar_initial("  carol"), 'C');
    }

    #[test]
    fn avatar_initial_falls_back_to_placeholder() {
        assert_eq!(avatar_initial(""), '?');
        assert_eq!(avatar_initial("   "), '?');
    }
}
