use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Role;

#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<Role, RepositoryError>;
}
