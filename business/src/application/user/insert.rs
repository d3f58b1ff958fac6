use std::sync::Arc;

use async_trait::async_trait;

use super::roles::resolve_roles;
use crate::domain::errors::ServiceError;
use crate::domain::logger::Logger;
use crate::domain::role::repository::RoleRepository;
use crate::domain::user::model::{NewUser, User, validate_fields};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;
use crate::domain::user::use_cases::insert::{InsertUserParams, InsertUserUseCase};

pub struct InsertUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub role_repository: Arc<dyn RoleRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl InsertUserUseCase for InsertUserUseCaseImpl {
    async fn execute(&self, params: InsertUserParams) -> Result<User, ServiceError> {
        self.logger
            .info(&format!("Inserting user: {}", params.email));

        validate_fields(
            &params.first_name,
            &params.email,
            Some(params.password.as_str()),
        )?;

        let roles = resolve_roles(self.role_repository.as_ref(), &params.role_ids).await?;
        let password_hash = self.hasher.hash(&params.password).await?;

        let user = NewUser {
            first_name: params.first_name,
            last_name: params.last_name,
            email: params.email,
            password_hash,
            roles,
        };

        let saved = self.repository.insert(&user).await?;

        self.logger
            .info(&format!("User inserted with id: {}", saved.id));
        Ok(saved)
    }
}
