use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::ServiceError;
use crate::domain::logger::Logger;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_by_id::{GetUserByIdParams, GetUserByIdUseCase};

pub struct GetUserByIdUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserByIdUseCase for GetUserByIdUseCaseImpl {
    async fn execute(&self, params: GetUserByIdParams) -> Result<User, ServiceError> {
        self.logger.info(&format!("Fetching user: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(ServiceError::lookup("User", params.id))
    }
}
