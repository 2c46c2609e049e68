use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use password_hash::{PasswordHash, PasswordVerifier};
use rand::rngs::OsRng;
use sf_types::auth::AuthDecision;
use sqlx::SqlitePool;

use crate::error::ApiError;

/// Check a username/password pair against the stored hash.
///
/// Lookup and parse failures are logged and treated as a rejection, so the
/// caller only ever sees Accept or Reject.
pub async fn authenticate_password(pool: &SqlitePool, username: &str, password: &str) -> AuthDecision {
    let stored = match sf_store::fetch_user_password_hash(pool, username).await {
        Ok(Some(hash)) => hash,
        Ok(None) => return AuthDecision::Reject,
        Err(err) => {
            tracing::error!(
                error = %err,
                user = %username,
                "failed to fetch user password hash"
            );
            return AuthDecision::Reject;
        }
    };
    if stored.is_empty() {
        return AuthDecision::Reject;
    }
    let parsed = match PasswordHash::new(&stored) {
        Ok(hash) => hash,
        Err(err) => {
            tracing::error!(
                error = %err,
                user = %username,
                "invalid stored password hash"
            );
            return AuthDecision::Reject;
        }
    };
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(_) => AuthDecision::Accept,
        Err(_) => AuthDecision::Reject,
    }
}

pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let hashed = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::internal(format!("failed to hash password: {e}")))?
        .to_string();
    Ok(hashed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_password("correct horse battery staple").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(
            Argon2::default()
                .verify_password(b"correct horse battery staple", &parsed)
                .is_ok()
        );
        assert!(Argon2::default().verify_password(b"wrong password", &parsed).is_err());
    }

    #[test]
    fn hashes_are_salted() {
        let first = hash_password("same password").unwrap();
        let second = hash_password("same password").unwrap();
        assert_ne!(first, second);
    }
}
