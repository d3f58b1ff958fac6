use crate::domain::errors::ServiceError;
use crate::domain::shared::pagination::SortFields;
use crate::domain::shared::validation::FieldErrors;

pub const CATEGORY_SORT: SortFields = SortFields {
    sortable: &["id", "name"],
    default_field: "name",
};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A category that has not been stored yet; the store assigns its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    pub fn new(name: String) -> Result<Self, ServiceError> {
        validate_name(&name)?;
        Ok(Self { name })
    }
}

impl Category {
    /// Applies new attribute values to a stored category, keeping its id.
    pub fn with_changes(id: i64, name: String) -> Result<Self, ServiceError> {
        validate_name(&name)?;
        Ok(Self { id, name })
    }
}

fn validate_name(name: &str) -> Result<(), ServiceError> {
    let mut errors = FieldErrors::new();
    errors.require_not_blank("name", name);
    errors.into_result()
}
