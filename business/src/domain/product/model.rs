use chrono::{DateTime, Utc};

use crate::domain::category::model::Category;
use crate::domain::errors::ServiceError;
use crate::domain::shared::pagination::SortFields;
use crate::domain::shared::validation::FieldErrors;

pub const PRODUCT_SORT: SortFields = SortFields {
    sortable: &["id", "name", "price", "date"],
    default_field: "name",
};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub img_url: Option<String>,
    pub date: DateTime<Utc>,
    pub categories: Vec<Category>,
}

/// A product that has not been stored yet. Its categories are already resolved
/// against the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub img_url: Option<String>,
    pub date: DateTime<Utc>,
    pub categories: Vec<Category>,
}

impl NewProduct {
    pub fn with_id(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            img_url: self.img_url,
            date: self.date,
            categories: self.categories,
        }
    }
}

/// Checks the scalar fields shared by insert and update.
pub fn validate_fields(name: &str, price: f64) -> Result<(), ServiceError> {
    let mut errors = FieldErrors::new();
    errors.require_not_blank("name", name);
    if !(price.is_finite() && price > 0.0) {
        errors.add("price", "Price must be a positive value");
    }
    errors.into_result()
}

/// Removes repeated ids while keeping the order in which they were first given.
pub fn distinct_ids(ids: &[i64]) -> Vec<i64> {
    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(id) {
            seen.push(*id);
        }
    }
    seen
}
