use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Login payload submitted to authentication endpoints.
pub struct LoginRequest {
    /// Username submitted by the client.
    pub username: String,
    /// Plaintext password submitted by the client.
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Registration payload for creating a new account.
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    /// Optional human-friendly name shown instead of the username.
    pub display_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Response returned after processing a login or registration request.
pub struct LoginResponse {
    /// Whether authentication succeeded.
    pub success: bool,
    /// Human-readable status or error message.
    pub message: String,
    /// Populated with user info when authentication succeeds.
    pub user: Option<AuthUserInfo>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Authenticated user details returned to clients.
pub struct AuthUserInfo {
    /// Stable user identifier.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Display name, when the user set one.
    pub display_name: Option<String>,
}

impl AuthUserInfo {
    /// Name shown in the navbar and on authored content.
    pub fn display_label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

impl std::fmt::Display for AuthUserInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.username)
    }
}

/// Simple auth decision enum used when validating credentials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthDecision {
    Accept,
    Reject,
}

/// Basic authentication row for a user.
#[derive(Debug, Clone)]
pub struct UserAuthRecord {
    pub id: i64,
    pub username: String,
    pub display_name: Option<String>,
    pub password_hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_label_falls_back_to_username() {
        let user = AuthUserInfo {
            id: 1,
            username: "alice".to_string(),
            display_name: None,
        };
        assert_eq!(user.display_label(), "alice");

        let user = AuthUserInfo {
            display_name: Some("Alice W.".to_string()),
            ..user
        };
        assert_eq!(user.display_label(), "Alice W.");
    }
}
