use crate::domain::errors::ServiceError;
use crate::domain::role::model::Role;
use crate::domain::shared::pagination::SortFields;
use crate::domain::shared::validation::{FieldErrors, is_valid_email};

pub const USER_SORT: SortFields = SortFields {
    sortable: &["id", "firstName", "lastName", "email"],
    default_field: "firstName",
};

/// A stored user. `password_hash` never leaves the service boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub roles: Vec<Role>,
}

/// Field rules for a user write. `password` is only checked on insert, where it is `Some`.
pub fn field_errors(first_name: &str, email: &str, password: Option<&str>) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.require_not_blank("firstName", first_name);
    if !is_valid_email(email) {
        errors.add("email", "Invalid email");
    }
    if let Some(password) = password {
        errors.require_not_blank("password", password);
    }
    errors
}

pub fn validate_fields(
    first_name: &str,
    email: &str,
    password: Option<&str>,
) -> Result<(), ServiceError> {
    field_errors(first_name, email, password).into_result()
}
