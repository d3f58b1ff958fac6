use async_trait::async_trait;

use crate::domain::category::model::Category;
use crate::domain::errors::ServiceError;

pub struct UpdateCategoryParams {
    pub id: i64,
    pub name: String,
}

#[async_trait]
pub trait UpdateCategoryUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCategoryParams) -> Result<Category, ServiceError>;
}
