use async_trait::async_trait;

use crate::domain::category::model::Category;
use crate::domain::errors::ServiceError;

pub struct GetCategoryByIdParams {
    pub id: i64,
}

#[async_trait]
pub trait GetCategoryByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetCategoryByIdParams) -> Result<Category, ServiceError>;
}
