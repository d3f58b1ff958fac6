use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::update::{UpdateCategoryParams, UpdateCategoryUseCase};
use crate::domain::errors::ServiceError;
use crate::domain::logger::Logger;

pub struct UpdateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCategoryUseCase for UpdateCategoryUseCaseImpl {
    async fn execute(&self, params: UpdateCategoryParams) -> Result<Category, ServiceError> {
        self.logger
            .info(&format!("Updating category: {}", params.id));

        let category = Category::with_changes(params.id, params.name)?;

        // Verify category exists
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(ServiceError::lookup("Category", params.id))?;

        let updated = self
            .repository
            .update(&category)
            .await
            .map_err(ServiceError::lookup("Category", params.id))?;

        self.logger
            .info(&format!("Category updated: {}", updated.id));
        Ok(updated)
    }
}
