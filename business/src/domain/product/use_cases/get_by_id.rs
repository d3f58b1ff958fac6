use async_trait::async_trait;

use crate::domain::errors::ServiceError;
use crate::domain::product::model::Product;

pub struct GetProductByIdParams {
    pub id: i64,
}

#[async_trait]
pub trait GetProductByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ServiceError>;
}
