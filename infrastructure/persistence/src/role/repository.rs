use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::role::model::Role;
use business::domain::role::repository::RoleRepository;

use super::entity::RoleEntity;
use crate::errors::map_sqlx_error;

pub struct RoleRepositoryPostgres {
    pool: PgPool,
}

impl RoleRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for RoleRepositoryPostgres {
    async fn get_by_id(&self, id: i64) -> Result<Role, RepositoryError> {
        let entity =
            sqlx::query_as::<_, RoleEntity>("SELECT id, authority FROM tb_role WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error("role.get_by_id"))?
                .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into())
    }
}
