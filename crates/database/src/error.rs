use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid database configuration: {0}")]
    ConnectionConfigError(String),

    #[error("Database query failed: {0}")]
    ConnectionError(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    /// A unique constraint rejected the insert (e.g. an email that is already signed up).
    #[error("The record already exists.")]
    Duplicate,
}

impl DbError {
    /// Maps unique-constraint violations to [`DbError::Duplicate`], everything else verbatim.
    pub(crate) fn from_insert(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => DbError::Duplicate,
            _ => DbError::ConnectionError(err),
        }
    }
}
