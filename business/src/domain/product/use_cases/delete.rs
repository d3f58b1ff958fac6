use async_trait::async_trait;

use crate::domain::errors::ServiceError;

pub struct DeleteProductParams {
    pub id: i64,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ServiceError>;
}
