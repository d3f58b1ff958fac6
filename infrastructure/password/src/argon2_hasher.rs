use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHasher as _};
use async_trait::async_trait;

use business::domain::errors::ServiceError;
use business::domain::user::services::PasswordHasher;

/// Argon2id hasher producing PHC strings (`$argon2id$v=19$...`) with a random salt.
#[derive(Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    fn hash_blocking(password: &str) -> Result<String, ServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| ServiceError::Internal(format!("password.hash_failed: {e}")))
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, ServiceError> {
        let password = password.to_owned();
        // Argon2 is deliberately slow; keep it off the async workers.
        tokio::task::spawn_blocking(move || Self::hash_blocking(&password))
            .await
            .map_err(|e| ServiceError::Internal(format!("password.hash_failed: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use argon2::{PasswordHash, PasswordVerifier};

    use super::*;

    fn verify(password: &str, hash: &str) -> bool {
        PasswordHash::new(hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    #[tokio::test]
    async fn should_produce_verifiable_argon2_hash() {
        let hasher = Argon2PasswordHasher::new();

        let hash = hasher.hash("123456").await.unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("123456"));
        assert!(verify("123456", &hash));
        assert!(!verify("654321", &hash));
    }

    #[tokio::test]
    async fn should_salt_every_hash() {
        let hasher = Argon2PasswordHasher::new();

        let first = hasher.hash("123456").await.unwrap();
        let second = hasher.hash("123456").await.unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn should_not_verify_against_garbage_hash() {
        assert!(!verify("123456", "not-a-phc-string"));
    }
}
