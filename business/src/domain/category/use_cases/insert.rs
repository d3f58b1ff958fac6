use async_trait::async_trait;

use crate::domain::category::model::Category;
use crate::domain::errors::ServiceError;

pub struct InsertCategoryParams {
    pub name: String,
}

#[async_trait]
pub trait InsertCategoryUseCase: Send + Sync {
    async fn execute(&self, params: InsertCategoryParams) -> Result<Category, ServiceError>;
}
