use async_trait::async_trait;

use crate::domain::errors::ServiceError;
use crate::domain::product::model::Product;
use crate::domain::shared::pagination::{Page, PageRequest};

pub struct GetAllProductsParams {
    pub page_request: PageRequest,
}

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Page<Product>, ServiceError>;
}
