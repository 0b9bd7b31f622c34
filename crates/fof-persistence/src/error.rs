//! Persistence error types.
//!
//! All persistence operations return structured errors that provide
//! user-friendly messages and optional remediation hints.

use std::path::PathBuf;

use fof_common::AtomicWriteError;
use fof_ingest::IngestError;
use thiserror::Error;

/// Persistence operation error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("failed to {operation} file {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The project file is not valid JSON.
    #[error("invalid project file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but lacks a field every project must have.
    #[error("project file {path} is missing required field '{field}'")]
    MissingRequiredField { field: &'static str, path: PathBuf },

    #[error("failed to serialize project: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Write(#[from] AtomicWriteError),

    /// Reading or writing one of the league CSV files failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("no project loaded")]
    NoProject,

    #[error("no project path set")]
    NoProjectPath,
}

impl PersistenceError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => format!("Could not {} the file at {}", operation, path.display()),
            Self::Parse { path, source } => format!(
                "The file at {} is not a valid project file (line {}, column {}).",
                path.display(),
                source.line(),
                source.column()
            ),
            Self::MissingRequiredField { field, path } => format!(
                "The project file at {} does not define '{}'.",
                path.display(),
                field
            ),
            Self::Serialize { .. } => {
                "An error occurred while saving the project data.".to_string()
            }
            Self::Write(err) => format!(
                "Could not save the file to {}. Please check disk space and permissions.",
                err.path().display()
            ),
            Self::Ingest(err) => format!("A league data file could not be processed: {err}"),
            Self::NoProject => "No project is open.".to_string(),
            Self::NoProjectPath => "The project has not been saved to a file yet.".to_string(),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::Parse { .. } => Some("Make sure you selected a .fof9proj project file.".into()),
            Self::MissingRequiredField { .. } => {
                Some("Add the missing field to the project file or create a new project.".into())
            }
            Self::Serialize { .. } => None,
            Self::Write(_) => {
                Some("Free up disk space or try saving to a different location.".into())
            }
            Self::Ingest(IngestError::FileNotFound { .. }) => {
                Some("Check the csvFiles entries in the project file.".into())
            }
            Self::Ingest(_) => Some("Fix the reported row and reload the project.".into()),
            Self::NoProject => Some("Open or create a project first.".into()),
            Self::NoProjectPath => Some("Choose where to save the project.".into()),
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_file() {
        let err = PersistenceError::MissingRequiredField {
            field: "leagueName",
            path: PathBuf::from("league.fof9proj"),
        };
        assert_eq!(
            err.to_string(),
            "project file league.fof9proj is missing required field 'leagueName'"
        );
        assert!(err.user_message().contains("leagueName"));
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn parse_message_has_position() {
        let source = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").unwrap_err();
        let err = PersistenceError::Parse {
            path: PathBuf::from("bad.fof9proj"),
            source,
        };
        assert!(err.user_message().contains("line 2"));
    }
}
