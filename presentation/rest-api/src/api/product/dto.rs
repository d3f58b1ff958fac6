use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;

use crate::api::category::dto::CategoryResponse;
use crate::api::pagination::PageMetadata;

/// Reference to an existing category; only the id is read
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CategoryRef {
    pub id: i64,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductRequest {
    /// Ignored on insert and update
    pub id: Option<i64>,
    #[oai(default)]
    pub name: String,
    pub description: Option<String>,
    #[oai(default)]
    pub price: f64,
    pub img_url: Option<String>,
    /// Defaults to now on insert; keeps the stored value on update
    pub date: Option<DateTime<Utc>>,
    #[oai(default)]
    pub categories: Vec<CategoryRef>,
}

impl ProductRequest {
    pub fn category_ids(&self) -> Vec<i64> {
        self.categories.iter().map(|c| c.id).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub img_url: Option<String>,
    pub date: DateTime<Utc>,
    pub categories: Vec<CategoryResponse>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            img_url: product.img_url,
            date: product.date,
            categories: product
                .categories
                .into_iter()
                .map(CategoryResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Object)]
pub struct ProductPageResponse {
    pub content: Vec<ProductResponse>,
    #[oai(flatten)]
    pub page: PageMetadata,
}
