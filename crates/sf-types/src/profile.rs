use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::forum::PostInfo;

/// Profile row as stored, without the user's posts attached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: i64,
    pub username: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub joined_at: DateTime<Utc>,
}

/// Profile payload for the profile page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileInfo {
    pub username: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub joined_at: DateTime<Utc>,
    /// The user's posts, newest first.
    pub posts: Vec<PostInfo>,
}

impl ProfileInfo {
    /// Name shown in the profile header.
    pub fn display_label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub display_name: Option<String>,
    pub bio: Option<String>,
}
