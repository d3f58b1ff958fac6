use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::get_all::{GetAllCategoriesParams, GetAllCategoriesUseCase};
use crate::domain::errors::ServiceError;
use crate::domain::logger::Logger;
use crate::domain::shared::pagination::Page;

pub struct GetAllCategoriesUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCategoriesUseCase for GetAllCategoriesUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllCategoriesParams,
    ) -> Result<Page<Category>, ServiceError> {
        let request = params.page_request;
        self.logger.info(&format!(
            "Fetching categories page {} (size {}, sort {} {})",
            request.page, request.size, request.sort.field, request.sort.direction
        ));

        let page = self.repository.find_all_paged(&request).await?;

        self.logger.info(&format!(
            "Found {} of {} categories",
            page.content.len(),
            page.total_elements
        ));
        Ok(page)
    }
}
