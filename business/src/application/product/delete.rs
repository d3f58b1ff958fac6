use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::ServiceError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ServiceError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // Verify product exists before deleting
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(ServiceError::lookup("Product", params.id))?;

        self.repository.delete(params.id).await.map_err(|e| {
            self.logger
                .warn(&format!("Product {} delete rejected: {}", params.id, e));
            ServiceError::from_delete("Product", params.id, e)
        })?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
