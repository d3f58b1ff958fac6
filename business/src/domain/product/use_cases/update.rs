use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::errors::ServiceError;
use crate::domain::product::model::Product;

pub struct UpdateProductParams {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub img_url: Option<String>,
    /// Keeps the stored date when absent.
    pub date: Option<DateTime<Utc>>,
    pub category_ids: Vec<i64>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ServiceError>;
}
