use async_trait::async_trait;

use crate::domain::errors::ServiceError;

/// Service port for one-way password hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, ServiceError>;
}
