use crate::domain::shared::validation::FieldMessage;

/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.integrity_violation")]
    IntegrityViolation,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn integrity_violation() -> Self {
        RepositoryError::IntegrityViolation
    }
    pub fn duplicated() -> Self {
        RepositoryError::Duplicated
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
}

/// Failures surfaced by every use case.
///
/// The presentation layer owns the translation of each variant into an HTTP
/// status and error body; use cases never format responses themselves.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    ResourceNotFound(String),
    #[error("{0}")]
    Database(String),
    #[error("validation.failed")]
    Validation(Vec<FieldMessage>),
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i64) -> Self {
        ServiceError::ResourceNotFound(format!("{} {} not found", entity, id))
    }

    /// Maps a store failure raised while deleting a row.
    ///
    /// A missing row stays a not-found; every other store failure is a
    /// database error, whether it came from a dependent row or not.
    pub fn from_delete(entity: &str, id: i64, err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::not_found(entity, id),
            RepositoryError::IntegrityViolation => {
                ServiceError::Database(format!("{} {} is referenced by other records", entity, id))
            }
            other => ServiceError::Database(other.to_string()),
        }
    }

    /// Convenience for lookups where a missing row means the requested resource is absent.
    pub fn lookup(entity: &str, id: i64) -> impl FnOnce(RepositoryError) -> Self + '_ {
        move |err| match err {
            RepositoryError::NotFound => ServiceError::not_found(entity, id),
            other => other.into(),
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::ResourceNotFound("Entity not found".into()),
            RepositoryError::IntegrityViolation => {
                ServiceError::Database("Integrity violation".into())
            }
            RepositoryError::Duplicated => ServiceError::Database("Duplicated entry".into()),
            RepositoryError::DatabaseError => ServiceError::Internal(err.to_string()),
        }
    }
}
