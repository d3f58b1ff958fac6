use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::{Page, PageRequest};

use super::model::{NewUser, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all_paged(&self, request: &PageRequest) -> Result<Page<User>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<User, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError>;
    /// Replaces names, email and roles. The stored password hash is left untouched.
    async fn update(&self, user: &User) -> Result<User, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
