use sqlx::FromRow;

use business::domain::role::model::Role;
use business::domain::user::model::User;

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl UserEntity {
    pub fn into_domain(self, roles: Vec<Role>) -> User {
        User {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password_hash: self.password,
            roles,
        }
    }
}
