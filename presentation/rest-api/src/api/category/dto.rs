use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::category::model::Category;

use crate::api::pagination::PageMetadata;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CategoryRequest {
    /// Ignored on insert and update; the store and the path decide the id
    pub id: Option<i64>,
    #[oai(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

#[derive(Debug, Object)]
pub struct CategoryPageResponse {
    pub content: Vec<CategoryResponse>,
    #[oai(flatten)]
    pub page: PageMetadata,
}
