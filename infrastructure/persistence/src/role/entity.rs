use sqlx::FromRow;

use business::domain::role::model::Role;

#[derive(Debug, FromRow)]
pub struct RoleEntity {
    pub id: i64,
    pub authority: String,
}

impl From<RoleEntity> for Role {
    fn from(entity: RoleEntity) -> Self {
        Role {
            id: entity.id,
            authority: entity.authority,
        }
    }
}

/// A role joined to the user holding it.
#[derive(Debug, FromRow)]
pub struct UserRoleEntity {
    pub user_id: i64,
    pub id: i64,
    pub authority: String,
}
