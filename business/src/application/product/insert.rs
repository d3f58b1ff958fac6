use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::categories::resolve_categories;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::ServiceError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{NewProduct, Product, validate_fields};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::insert::{InsertProductParams, InsertProductUseCase};

pub struct InsertProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl InsertProductUseCase for InsertProductUseCaseImpl {
    async fn execute(&self, params: InsertProductParams) -> Result<Product, ServiceError> {
        self.logger
            .info(&format!("Inserting product: {}", params.name));

        validate_fields(&params.name, params.price)?;

        let categories =
            resolve_categories(self.category_repository.as_ref(), &params.category_ids).await?;

        let product = NewProduct {
            name: params.name,
            description: params.description,
            price: params.price,
            img_url: params.img_url,
            date: params.date.unwrap_or_else(Utc::now),
            categories,
        };

        let saved = self.repository.insert(&product).await?;

        self.logger
            .info(&format!("Product inserted with id: {}", saved.id));
        Ok(saved)
    }
}
