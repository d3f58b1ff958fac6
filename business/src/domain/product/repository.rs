use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::{Page, PageRequest};

use super::model::{NewProduct, Product};

/// Store access for products. Writes persist the scalar fields and the whole
/// category association in one transaction.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all_paged(&self, request: &PageRequest) -> Result<Page<Product>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
