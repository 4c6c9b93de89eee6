//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is absent (or null) in the request
    Missing { field: &'static str },

    /// Field is present but empty
    Empty { field: &'static str },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field } | Self::Empty { field } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Missing { field: "nome" };
        assert_eq!(err.to_string(), "nome is required");

        let err = ValidationError::Empty { field: "mensagem" };
        assert_eq!(err.to_string(), "mensagem cannot be empty");
    }

    #[test]
    fn field_accessor() {
        assert_eq!(ValidationError::Empty { field: "nome" }.field(), "nome");
    }
}
