use async_trait::async_trait;

use crate::domain::errors::ServiceError;
use crate::domain::shared::pagination::{Page, PageRequest};
use crate::domain::user::model::User;

pub struct GetAllUsersParams {
    pub page_request: PageRequest,
}

#[async_trait]
pub trait GetAllUsersUseCase: Send + Sync {
    async fn execute(&self, params: GetAllUsersParams) -> Result<Page<User>, ServiceError>;
}
