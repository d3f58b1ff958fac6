use async_trait::async_trait;

use crate::domain::errors::ServiceError;
use crate::domain::user::model::User;

pub struct UpdateUserParams {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role_ids: Vec<i64>,
}

#[async_trait]
pub trait UpdateUserUseCase: Send + Sync {
    async fn execute(&self, params: UpdateUserParams) -> Result<User, ServiceError>;
}
