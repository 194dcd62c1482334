//! Field-level validation failures, all reported as 400

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field}: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },

    #[error("{field} must be a positive number")]
    NotPositive { field: &'static str },

    /// Partial update that sets nothing
    #[error("at least one value needs to be provided: {fields}")]
    NothingToUpdate { fields: &'static str },

    /// Body isn't JSON of the expected shape
    #[error("invalid request body: {reason}")]
    Body { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "name",
            max: 50,
        };
        assert_eq!(err.to_string(), "name exceeds maximum length of 50 characters");

        let err = ValidationError::NothingToUpdate {
            fields: "name, email",
        };
        assert_eq!(
            err.to_string(),
            "at least one value needs to be provided: name, email"
        );
    }
}
