use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use business::domain::errors::RepositoryError;
use business::domain::role::model::Role;
use business::domain::shared::pagination::{Page, PageRequest};
use business::domain::user::model::{NewUser, User};
use business::domain::user::repository::UserRepository;

use super::entity::UserEntity;
use crate::errors::map_sqlx_error;
use crate::role::entity::UserRoleEntity;
use crate::sorting::user_order;

const USER_COLUMNS: &str = "id, first_name, last_name, email, password";

pub struct UserRepositoryPostgres {
    pool: PgPool,
}

impl UserRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn roles_of(&self, user_ids: &[i64]) -> Result<HashMap<i64, Vec<Role>>, RepositoryError> {
        let rows = sqlx::query_as::<_, UserRoleEntity>(
            r#"SELECT ur.user_id, r.id, r.authority
            FROM tb_user_role ur
            JOIN tb_role r ON r.id = ur.role_id
            WHERE ur.user_id = ANY($1)
            ORDER BY r.id"#,
        )
        .bind(user_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error("user.roles"))?;

        let mut grouped: HashMap<i64, Vec<Role>> = HashMap::new();
        for row in rows {
            grouped.entry(row.user_id).or_default().push(Role {
                id: row.id,
                authority: row.authority,
            });
        }
        Ok(grouped)
    }

    async fn with_roles(&self, entity: UserEntity) -> Result<User, RepositoryError> {
        let roles = self
            .roles_of(&[entity.id])
            .await?
            .remove(&entity.id)
            .unwrap_or_default();
        Ok(entity.into_domain(roles))
    }
}

/// Rewrites the whole role set of a user.
async fn replace_roles(
    tx: &mut Transaction<'_, Postgres>,
    user_id: i64,
    roles: &[Role],
) -> Result<(), RepositoryError> {
    sqlx::query("DELETE FROM tb_user_role WHERE user_id = $1")
        .bind(user_id)
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx_error("user.clear_roles"))?;

    let ids: Vec<i64> = roles.iter().map(|r| r.id).collect();
    sqlx::query("INSERT INTO tb_user_role (user_id, role_id) SELECT $1, UNNEST($2::BIGINT[])")
        .bind(user_id)
        .bind(&ids)
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx_error("user.link_roles"))?;

    Ok(())
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn find_all_paged(&self, request: &PageRequest) -> Result<Page<User>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM tb_user {} LIMIT $1 OFFSET $2",
            USER_COLUMNS,
            user_order(&request.sort)?
        );
        let entities = sqlx::query_as::<_, UserEntity>(&sql)
            .bind(i64::from(request.size))
            .bind(i64::try_from(request.offset()).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error("user.find_all_paged"))?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tb_user")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error("user.count"))?;

        let ids: Vec<i64> = entities.iter().map(|e| e.id).collect();
        let mut roles = self.roles_of(&ids).await?;

        let content = entities
            .into_iter()
            .map(|e| {
                let own = roles.remove(&e.id).unwrap_or_default();
                e.into_domain(own)
            })
            .collect();

        Ok(Page::new(content, request, total.max(0) as u64))
    }

    async fn get_by_id(&self, id: i64) -> Result<User, RepositoryError> {
        let sql = format!("SELECT {} FROM tb_user WHERE id = $1", USER_COLUMNS);
        let entity = sqlx::query_as::<_, UserEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error("user.get_by_id"))?
            .ok_or(RepositoryError::NotFound)?;

        self.with_roles(entity).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let sql = format!("SELECT {} FROM tb_user WHERE email = $1", USER_COLUMNS);
        let entity = sqlx::query_as::<_, UserEntity>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error("user.find_by_email"))?;

        match entity {
            Some(entity) => Ok(Some(self.with_roles(entity).await?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(map_sqlx_error("user.begin"))?;

        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO tb_user (first_name, last_name, email, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id"#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx_error("user.insert"))?;

        replace_roles(&mut tx, id, &user.roles).await?;

        tx.commit().await.map_err(map_sqlx_error("user.commit"))?;

        Ok(User {
            id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            roles: user.roles.clone(),
        })
    }

    async fn update(&self, user: &User) -> Result<User, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(map_sqlx_error("user.begin"))?;

        let result = sqlx::query(
            "UPDATE tb_user SET first_name = $2, last_name = $3, email = $4 WHERE id = $1",
        )
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error("user.update"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        replace_roles(&mut tx, user.id, &user.roles).await?;

        tx.commit().await.map_err(map_sqlx_error("user.commit"))?;

        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM tb_user WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error("user.delete"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
