use std::sync::Arc;

use async_trait::async_trait;

use super::roles::resolve_roles;
use crate::domain::errors::ServiceError;
use crate::domain::logger::Logger;
use crate::domain::role::repository::RoleRepository;
use crate::domain::user::model::{User, validate_fields};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::update::{UpdateUserParams, UpdateUserUseCase};

pub struct UpdateUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub role_repository: Arc<dyn RoleRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateUserUseCase for UpdateUserUseCaseImpl {
    async fn execute(&self, params: UpdateUserParams) -> Result<User, ServiceError> {
        self.logger.info(&format!("Updating user: {}", params.id));

        validate_fields(&params.first_name, &params.email, None)?;

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ServiceError::lookup("User", params.id))?;

        let roles = resolve_roles(self.role_repository.as_ref(), &params.role_ids).await?;

        let user = User {
            id: existing.id,
            first_name: params.first_name,
            last_name: params.last_name,
            email: params.email,
            password_hash: existing.password_hash,
            roles,
        };

        let updated = self
            .repository
            .update(&user)
            .await
            .map_err(ServiceError::lookup("User", params.id))?;

        self.logger.info(&format!("User updated: {}", updated.id));
        Ok(updated)
    }
}
