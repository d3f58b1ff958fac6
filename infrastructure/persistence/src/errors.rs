use business::domain::errors::RepositoryError;

/// Classifies a sqlx failure by its Postgres error kind.
pub(crate) fn classify(err: &sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::RowNotFound => RepositoryError::not_found(),
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            RepositoryError::integrity_violation()
        }
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::duplicated(),
        _ => RepositoryError::database_error(),
    }
}

/// Logs the raw failure and maps it for the port boundary.
pub(crate) fn map_sqlx_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> RepositoryError {
    move |err| {
        tracing::error!(target: "persistence", "{}: {}", context, err);
        classify(&err)
    }
}
