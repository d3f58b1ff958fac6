use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use business::domain::category::model::Category;
use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::shared::pagination::{Page, PageRequest};

use super::entity::{ProductCategoryEntity, ProductEntity, group_categories};
use crate::errors::map_sqlx_error;
use crate::sorting::product_order;

const PRODUCT_COLUMNS: &str = "id, name, description, price, img_url, date";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn categories_of(
        &self,
        product_ids: &[i64],
    ) -> Result<Vec<ProductCategoryEntity>, RepositoryError> {
        sqlx::query_as::<_, ProductCategoryEntity>(
            r#"SELECT pc.product_id, c.id, c.name
            FROM tb_product_category pc
            JOIN tb_category c ON c.id = pc.category_id
            WHERE pc.product_id = ANY($1)
            ORDER BY c.name, c.id"#,
        )
        .bind(product_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error("product.categories"))
    }
}

/// Rewrites the whole category association of a product.
async fn replace_categories(
    tx: &mut Transaction<'_, Postgres>,
    product_id: i64,
    categories: &[Category],
) -> Result<(), RepositoryError> {
    sqlx::query("DELETE FROM tb_product_category WHERE product_id = $1")
        .bind(product_id)
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx_error("product.clear_categories"))?;

    let ids: Vec<i64> = categories.iter().map(|c| c.id).collect();
    sqlx::query(
        r#"INSERT INTO tb_product_category (product_id, category_id)
        SELECT $1, UNNEST($2::BIGINT[])"#,
    )
    .bind(product_id)
    .bind(&ids)
    .execute(&mut **tx)
    .await
    .map_err(map_sqlx_error("product.link_categories"))?;

    Ok(())
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find_all_paged(
        &self,
        request: &PageRequest,
    ) -> Result<Page<Product>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM tb_product {} LIMIT $1 OFFSET $2",
            PRODUCT_COLUMNS,
            product_order(&request.sort)?
        );
        let entities = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(i64::from(request.size))
            .bind(i64::try_from(request.offset()).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error("product.find_all_paged"))?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tb_product")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error("product.count"))?;

        let ids: Vec<i64> = entities.iter().map(|e| e.id).collect();
        let mut categories = group_categories(self.categories_of(&ids).await?);

        let content = entities
            .into_iter()
            .map(|e| {
                let own = categories.remove(&e.id).unwrap_or_default();
                e.into_domain(own)
            })
            .collect();

        Ok(Page::new(content, request, total.max(0) as u64))
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let sql = format!("SELECT {} FROM tb_product WHERE id = $1", PRODUCT_COLUMNS);
        let entity = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error("product.get_by_id"))?
            .ok_or(RepositoryError::NotFound)?;

        let categories = self
            .categories_of(&[id])
            .await?
            .into_iter()
            .map(|row| Category {
                id: row.id,
                name: row.name,
            })
            .collect();

        Ok(entity.into_domain(categories))
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(map_sqlx_error("product.begin"))?;

        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO tb_product (name, description, price, img_url, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id"#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.img_url)
        .bind(product.date)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx_error("product.insert"))?;

        replace_categories(&mut tx, id, &product.categories).await?;

        tx.commit()
            .await
            .map_err(map_sqlx_error("product.commit"))?;

        Ok(product.clone().with_id(id))
    }

    async fn update(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(map_sqlx_error("product.begin"))?;

        let result = sqlx::query(
            r#"UPDATE tb_product
            SET name = $2, description = $3, price = $4, img_url = $5, date = $6
            WHERE id = $1"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.img_url)
        .bind(product.date)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error("product.update"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        replace_categories(&mut tx, product.id, &product.categories).await?;

        tx.commit()
            .await
            .map_err(map_sqlx_error("product.commit"))?;

        Ok(product.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        // Category links go with the product (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM tb_product WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error("product.delete"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
