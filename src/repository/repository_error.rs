use crate::model::validation::SchemaError;

/// Failures reported by the storage collaborator.
///
/// `Display` yields only the underlying description, which is what callers
/// surface to clients on a 500.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    DatabaseError(String),
    #[error("{0}")]
    ConnectionError(String),
    #[error("{0}")]
    SerializationError(String),
}

// Convenient constructors
impl RepositoryError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        RepositoryError::ValidationError(msg.into())
    }

    pub fn database<T: Into<String>>(msg: T) -> Self {
        RepositoryError::DatabaseError(msg.into())
    }

    pub fn connection<T: Into<String>>(msg: T) -> Self {
        RepositoryError::ConnectionError(msg.into())
    }
}

impl From<SchemaError> for RepositoryError {
    fn from(err: SchemaError) -> Self {
        RepositoryError::validation(err.to_string())
    }
}

// MongoDB-specific conversions
impl From<mongodb::error::Error> for RepositoryError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;

        match err.kind.as_ref() {
            ErrorKind::Authentication { .. } | ErrorKind::Io(_) | ErrorKind::ServerSelection { .. } => {
                RepositoryError::connection(err.to_string())
            }
            ErrorKind::InvalidArgument { .. } => RepositoryError::validation(err.to_string()),
            ErrorKind::BsonSerialization(_) | ErrorKind::BsonDeserialization(_) => {
                RepositoryError::SerializationError(err.to_string())
            }
            _ => RepositoryError::database(err.to_string()),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
