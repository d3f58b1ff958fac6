use async_trait::async_trait;

use crate::domain::errors::ServiceError;

use super::insert::InsertUserParams;
use super::update::UpdateUserParams;

/// Pre-service checks for user writes, one per write mode.
///
/// Both fail with `ServiceError::Validation` listing every rejected field,
/// including an `email` entry when any user already holds the address.
#[async_trait]
pub trait ValidateUserUseCase: Send + Sync {
    async fn validate_insert(&self, params: &InsertUserParams) -> Result<(), ServiceError>;
    async fn validate_update(&self, params: &UpdateUserParams) -> Result<(), ServiceError>;
}
