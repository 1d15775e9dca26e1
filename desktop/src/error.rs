use thiserror::Error;

/// Main error type for the VSchema editor
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("{0} already exists")]
    DuplicateKeyspace(String),

    #[error("Seed schema arrived after the schema was edited")]
    SeedConflict,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Schema error: {0}")]
    SchemaError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for editor operations
pub type Result<T> = std::result::Result<T, EditorError>;

impl EditorError {
    /// Create a duplicate keyspace error for the given name
    pub fn duplicate_keyspace(name: impl Into<String>) -> Self {
        Self::DuplicateKeyspace(name.into())
    }

    /// Create a schema error with a custom message
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::SchemaError(msg.into())
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::DuplicateKeyspace(_) => self.to_string(),
            Self::SeedConflict => {
                "The seed schema finished loading after you started editing. Your edits were kept; Reset switches to the seed schema."
                    .to_string()
            }
            Self::SchemaError(_) | Self::SerializationError(_) => {
                "The schema file could not be read. Please check that it is valid VSchema JSON."
                    .to_string()
            }
            Self::ConfigError(_) => {
                "Unable to load settings. Defaults will be used instead.".to_string()
            }
            Self::IoError(_) => "An unexpected error occurred. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_keyspace_message() {
        let err = EditorError::duplicate_keyspace("user");
        assert_eq!(err.to_string(), "user already exists");
        assert_eq!(err.user_message(), "user already exists");
    }

    #[test]
    fn test_io_error_conversion() {
        let err: EditorError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, EditorError::IoError(_)));
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn test_seed_conflict_message_mentions_kept_edits() {
        let err = EditorError::SeedConflict;
        assert_eq!(err.to_string(), "Seed schema arrived after the schema was edited");
        assert!(err.user_message().contains("edits were kept"));
    }
}
