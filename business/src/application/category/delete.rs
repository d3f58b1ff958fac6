use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use crate::domain::errors::ServiceError;
use crate::domain::logger::Logger;

pub struct DeleteCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCategoryUseCase for DeleteCategoryUseCaseImpl {
    async fn execute(&self, params: DeleteCategoryParams) -> Result<(), ServiceError> {
        self.logger
            .info(&format!("Deleting category: {}", params.id));

        // Verify category exists before deleting
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(ServiceError::lookup("Category", params.id))?;

        self.repository.delete(params.id).await.map_err(|e| {
            self.logger
                .warn(&format!("Category {} delete rejected: {}", params.id, e));
            ServiceError::from_delete("Category", params.id, e)
        })?;

        self.logger
            .info(&format!("Category deleted: {}", params.id));
        Ok(())
    }
}
