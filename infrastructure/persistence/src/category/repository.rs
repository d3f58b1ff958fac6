use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::category::model::{Category, NewCategory};
use business::domain::category::repository::CategoryRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::pagination::{Page, PageRequest};

use super::entity::CategoryEntity;
use crate::errors::map_sqlx_error;
use crate::sorting::category_order;

pub struct CategoryRepositoryPostgres {
    pool: PgPool,
}

impl CategoryRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn find_all_paged(
        &self,
        request: &PageRequest,
    ) -> Result<Page<Category>, RepositoryError> {
        let sql = format!(
            "SELECT id, name FROM tb_category {} LIMIT $1 OFFSET $2",
            category_order(&request.sort)?
        );
        let entities = sqlx::query_as::<_, CategoryEntity>(&sql)
            .bind(i64::from(request.size))
            .bind(i64::try_from(request.offset()).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error("category.find_all_paged"))?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tb_category")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error("category.count"))?;

        Ok(Page::new(
            entities.into_iter().map(Category::from).collect(),
            request,
            total.max(0) as u64,
        ))
    }

    async fn get_by_id(&self, id: i64) -> Result<Category, RepositoryError> {
        let entity =
            sqlx::query_as::<_, CategoryEntity>("SELECT id, name FROM tb_category WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error("category.get_by_id"))?
                .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into())
    }

    async fn insert(&self, category: &NewCategory) -> Result<Category, RepositoryError> {
        let entity = sqlx::query_as::<_, CategoryEntity>(
            "INSERT INTO tb_category (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&category.name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error("category.insert"))?;

        Ok(entity.into())
    }

    async fn update(&self, category: &Category) -> Result<Category, RepositoryError> {
        let entity = sqlx::query_as::<_, CategoryEntity>(
            "UPDATE tb_category SET name = $2 WHERE id = $1 RETURNING id, name",
        )
        .bind(category.id)
        .bind(&category.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error("category.update"))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM tb_category WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error("category.delete"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "./migrations")]
    async fn should_refuse_delete_of_category_still_linked_to_products(pool: PgPool) {
        let repository = CategoryRepositoryPostgres::new(pool);

        let result = repository.delete(3).await;

        assert_eq!(result, Err(RepositoryError::IntegrityViolation));
        assert_eq!(repository.get_by_id(3).await.unwrap().name, "Computers");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn should_delete_unlinked_category(pool: PgPool) {
        let repository = CategoryRepositoryPostgres::new(pool);
        let garden = repository
            .insert(&NewCategory {
                name: "Garden".to_string(),
            })
            .await
            .unwrap();

        repository.delete(garden.id).await.unwrap();

        assert_eq!(
            repository.get_by_id(garden.id).await,
            Err(RepositoryError::NotFound)
        );
        assert_eq!(
            repository.delete(garden.id).await,
            Err(RepositoryError::NotFound)
        );
    }
}
