use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Notification error: {0}")]
    Notification(String),
    #[error("Callback error: {0}")]
    Callback(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

// Convert from sqlx errors
impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DomainError::NotFound("Record not found".to_string()),
            sqlx::Error::ColumnNotFound(column) => {
                DomainError::Storage(format!("Stored record is missing column '{}'", column))
            }
            sqlx::Error::ColumnDecode { index, source } => DomainError::Storage(format!(
                "Stored column {} has an unexpected type: {}",
                index, source
            )),
            sqlx::Error::Database(db_err) => {
                DomainError::Storage(format!("Database error: {}", db_err.message()))
            }
            other => DomainError::Storage(other.to_string()),
        }
    }
}
