use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::errors::ServiceError;
use crate::domain::product::model::Product;

pub struct InsertProductParams {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub img_url: Option<String>,
    /// Defaults to the insertion time when absent.
    pub date: Option<DateTime<Utc>>,
    pub category_ids: Vec<i64>,
}

#[async_trait]
pub trait InsertProductUseCase: Send + Sync {
    async fn execute(&self, params: InsertProductParams) -> Result<Product, ServiceError>;
}
