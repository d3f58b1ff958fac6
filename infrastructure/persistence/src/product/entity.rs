use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::category::model::Category;
use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub img_url: Option<String>,
    pub date: DateTime<Utc>,
}

/// A category joined to the product that lists it.
#[derive(Debug, FromRow)]
pub struct ProductCategoryEntity {
    pub product_id: i64,
    pub id: i64,
    pub name: String,
}

impl ProductEntity {
    pub fn into_domain(self, categories: Vec<Category>) -> Product {
        Product {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            img_url: self.img_url,
            date: self.date,
            categories,
        }
    }
}

/// Groups joined category rows by product id, keeping row order within each group.
pub fn group_categories(rows: Vec<ProductCategoryEntity>) -> HashMap<i64, Vec<Category>> {
    let mut grouped: HashMap<i64, Vec<Category>> = HashMap::new();
    for row in rows {
        grouped.entry(row.product_id).or_default().push(Category {
            id: row.id,
            name: row.name,
        });
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(product_id: i64, id: i64, name: &str) -> ProductCategoryEntity {
        ProductCategoryEntity {
            product_id,
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn should_group_categories_per_product() {
        let rows = vec![
            row(1, 2, "Electronics"),
            row(2, 1, "Books"),
            row(1, 3, "Computers"),
        ];

        let grouped = group_categories(rows);

        let ids: Vec<i64> = grouped[&1].iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(grouped[&2].len(), 1);
        assert!(!grouped.contains_key(&3));
    }
}
