//! Error types for quoth

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the quoth application
#[derive(Debug, Error)]
pub enum QuothError {
    #[error("Not a quoth store: {0}")]
    NotQuothStore(PathBuf),

    #[error("Invalid import: {0}")]
    InvalidImport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuothError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QuothError::NotQuothStore(_) => 2,
            QuothError::InvalidImport(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            QuothError::NotQuothStore(path) => {
                format!(
                    "Not a quoth store: {}\n\n\
                    Suggestions:\n\
                    • Run 'quoth init' in this directory to create a new store\n\
                    • Navigate to an existing quoth store\n\
                    • Set QUOTH_ROOT environment variable to your store path",
                    path.display()
                )
            }
            QuothError::InvalidImport(msg) => {
                format!(
                    "Invalid import: {}\n\n\
                    Expected a JSON array of objects with string fields:\n\
                    [\n  {{ \"text\": \"...\", \"category\": \"...\" }}\n]\n\n\
                    Entries with missing, non-string, or blank fields are skipped;\n\
                    the import is rejected when no valid entries remain.",
                    msg
                )
            }
            QuothError::Config(msg) => msg.clone(),
            _ => self.to_string(),
        }
    }
}

/// Result type using QuothError
pub type Result<T> = std::result::Result<T, QuothError>;
