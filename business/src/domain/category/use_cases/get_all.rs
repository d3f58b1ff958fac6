use async_trait::async_trait;

use crate::domain::category::model::Category;
use crate::domain::errors::ServiceError;
use crate::domain::shared::pagination::{Page, PageRequest};

pub struct GetAllCategoriesParams {
    pub page_request: PageRequest,
}

#[async_trait]
pub trait GetAllCategoriesUseCase: Send + Sync {
    async fn execute(&self, params: GetAllCategoriesParams) -> Result<Page<Category>, ServiceError>;
}
