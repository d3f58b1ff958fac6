use async_trait::async_trait;

use crate::domain::errors::ServiceError;
use crate::domain::user::model::User;

pub struct GetUserByIdParams {
    pub id: i64,
}

#[async_trait]
pub trait GetUserByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetUserByIdParams) -> Result<User, ServiceError>;
}
