use async_trait::async_trait;

use crate::domain::errors::ServiceError;

pub struct DeleteUserParams {
    pub id: i64,
}

#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    async fn execute(&self, params: DeleteUserParams) -> Result<(), ServiceError>;
}
