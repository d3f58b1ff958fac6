use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::model::{Category, NewCategory};
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::insert::{InsertCategoryParams, InsertCategoryUseCase};
use crate::domain::errors::ServiceError;
use crate::domain::logger::Logger;

pub struct InsertCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl InsertCategoryUseCase for InsertCategoryUseCaseImpl {
    async fn execute(&self, params: InsertCategoryParams) -> Result<Category, ServiceError> {
        self.logger
            .info(&format!("Inserting category: {}", params.name));

        let category = NewCategory::new(params.name)?;
        let saved = self.repository.insert(&category).await?;

        self.logger
            .info(&format!("Category inserted with id: {}", saved.id));
        Ok(saved)
    }
}
