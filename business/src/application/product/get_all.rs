use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::ServiceError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use crate::domain::shared::pagination::Page;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Page<Product>, ServiceError> {
        let request = params.page_request;
        self.logger.info(&format!(
            "Fetching products page {} (size {}, sort {} {})",
            request.page, request.size, request.sort.field, request.sort.direction
        ));

        let page = self.repository.find_all_paged(&request).await?;

        self.logger.info(&format!(
            "Found {} of {} products",
            page.content.len(),
            page.total_elements
        ));
        Ok(page)
    }
}
