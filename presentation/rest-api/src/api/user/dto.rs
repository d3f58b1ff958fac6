use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::role::model::Role;
use business::domain::user::model::User;

use crate::api::pagination::PageMetadata;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RoleDto {
    pub id: i64,
    /// Read-only; ignored in request bodies
    pub authority: Option<String>,
}

impl From<Role> for RoleDto {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            authority: Some(role.authority),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
pub struct UserInsertRequest {
    #[oai(default)]
    pub first_name: String,
    #[oai(default)]
    pub last_name: String,
    #[oai(default)]
    pub email: String,
    #[oai(default)]
    pub password: String,
    #[oai(default)]
    pub roles: Vec<RoleDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
pub struct UserUpdateRequest {
    #[oai(default)]
    pub first_name: String,
    #[oai(default)]
    pub last_name: String,
    #[oai(default)]
    pub email: String,
    #[oai(default)]
    pub roles: Vec<RoleDto>,
}

pub fn role_ids(roles: &[RoleDto]) -> Vec<i64> {
    roles.iter().map(|r| r.id).collect()
}

/// User as exposed over HTTP. There is no password field.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub roles: Vec<RoleDto>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            roles: user.roles.into_iter().map(RoleDto::from).collect(),
        }
    }
}

#[derive(Debug, Object)]
pub struct UserPageResponse {
    pub content: Vec<UserResponse>,
    #[oai(flatten)]
    pub page: PageMetadata,
}
