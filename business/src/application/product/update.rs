use std::sync::Arc;

use async_trait::async_trait;

use super::categories::resolve_categories;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::ServiceError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{Product, validate_fields};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ServiceError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        validate_fields(&params.name, params.price)?;

        // Verify product exists
        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ServiceError::lookup("Product", params.id))?;

        let categories =
            resolve_categories(self.category_repository.as_ref(), &params.category_ids).await?;

        let product = Product {
            id: existing.id,
            name: params.name,
            description: params.description,
            price: params.price,
            img_url: params.img_url,
            date: params.date.unwrap_or(existing.date),
            categories,
        };

        let updated = self
            .repository
            .update(&product)
            .await
            .map_err(ServiceError::lookup("Product", params.id))?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
