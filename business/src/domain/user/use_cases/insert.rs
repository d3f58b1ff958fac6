use async_trait::async_trait;

use crate::domain::errors::ServiceError;
use crate::domain::user::model::User;

pub struct InsertUserParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Plaintext; hashed before it reaches the store.
    pub password: String,
    pub role_ids: Vec<i64>,
}

#[async_trait]
pub trait InsertUserUseCase: Send + Sync {
    async fn execute(&self, params: InsertUserParams) -> Result<User, ServiceError>;
}
