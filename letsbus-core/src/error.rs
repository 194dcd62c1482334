/// Structured error types for letsbus-core.
///
/// Library consumers get `thiserror` enums; the CLI wraps them in `anyhow`.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::flow::{FlowEvent, FlowState};

/// Main error type for letsbus-core operations
#[derive(Error, Debug)]
pub enum LetsbusError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Config file exists but could not be parsed
    #[error("Invalid config file {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },

    /// Event does not apply to the current report flow state
    #[error("Cannot apply {event} while {state}")]
    InvalidTransition {
        state: &'static str,
        event: &'static str,
    },

    /// Line or station numbers must be positive
    #[error("Invalid {field}: {value}")]
    InvalidNumber { field: &'static str, value: u32 },

    /// Station is not on the line's schedule
    #[error("Station '{station}' is not on the schedule of line '{line}'")]
    UnknownStation { line: String, station: String },

    /// Malformed row in a schedule or arrivals file
    #[error("Malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },
}

/// Result type alias for letsbus-core operations
pub type Result<T> = std::result::Result<T, LetsbusError>;

impl LetsbusError {
    pub fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_transition(state: &FlowState, event: &FlowEvent) -> Self {
        Self::InvalidTransition {
            state: state.name(),
            event: event.name(),
        }
    }

    pub fn malformed_row(row: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            row,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LetsbusError::InvalidTransition {
            state: "awaiting line number",
            event: "submit",
        };
        assert_eq!(err.to_string(), "Cannot apply submit while awaiting line number");

        let err = LetsbusError::UnknownStation {
            line: "12".into(),
            station: "400".into(),
        };
        assert!(err.to_string().contains("'400'"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: LetsbusError = io_err.into();

        assert!(matches!(err, LetsbusError::Io { .. }));
    }
}
