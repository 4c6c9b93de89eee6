//! Review input validation
//!
//! Only presence is checked: a field must exist and be non-empty.
//! Content is stored exactly as submitted.

use super::ValidationError;

/// Validated author name (`nome` column)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName(String);

impl AuthorName {
    /// Create a new author name.
    ///
    /// # Example
    /// ```
    /// use avaliacoes_server::models::AuthorName;
    ///
    /// assert!(AuthorName::new("Ana").is_ok());
    /// assert!(AuthorName::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "nome" });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated review message (`mensagem` column)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewMessage(String);

impl ReviewMessage {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "mensagem" });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A review ready to be inserted. Id and timestamp are assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub name: AuthorName,
    pub message: ReviewMessage,
}

impl NewReview {
    /// Build from optional request fields.
    ///
    /// `nome` is checked before `mensagem`; the first failure is returned.
    pub fn from_fields(name: Option<&str>, message: Option<&str>) -> Result<Self, ValidationError> {
        let name = name.ok_or(ValidationError::Missing { field: "nome" })?;
        let name = AuthorName::new(name)?;

        let message = message.ok_or(ValidationError::Missing { field: "mensagem" })?;
        let message = ReviewMessage::new(message)?;

        Ok(Self { name, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_review() {
        let review = NewReview::from_fields(Some("Ana"), Some("Ótimo serviço")).unwrap();
        assert_eq!(review.name.as_str(), "Ana");
        assert_eq!(review.message.as_str(), "Ótimo serviço");
    }

    #[test]
    fn missing_name() {
        let err = NewReview::from_fields(None, Some("ok")).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "nome" });
    }

    #[test]
    fn missing_message() {
        let err = NewReview::from_fields(Some("Ana"), None).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "mensagem" });
    }

    #[test]
    fn both_empty_reports_name_first() {
        let err = NewReview::from_fields(Some(""), Some("")).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "nome" });
    }

    #[test]
    fn whitespace_is_kept_as_is() {
        // presence check only, no trimming
        let review = NewReview::from_fields(Some(" "), Some("  x ")).unwrap();
        assert_eq!(review.name.as_str(), " ");
        assert_eq!(review.message.as_str(), "  x ");
    }
}
