//! Accumulated validation outcome.

use std::fmt;

use serde::Serialize;

/// A single failed rule for a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered list of violations; valid iff the list is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Append every violation from `other`, keeping order.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    /// First message recorded for `field`.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    pub fn errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |error| error.field == field)
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl IntoIterator for ValidationResult {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_by_field() {
        let mut result = ValidationResult::new();
        assert!(result.is_valid());
        result.add_error("Height", "must be between 60 and 90");
        result.add_error("Weight", "must be between 150 and 400");
        result.add_error("Height", "second");

        assert!(!result.is_valid());
        assert!(result.has_error("Height"));
        assert!(!result.has_error("Uniform"));
        assert_eq!(result.error("Height"), Some("must be between 60 and 90"));
        assert_eq!(result.error("Uniform"), None);
        assert_eq!(result.errors_for("Height").count(), 2);
        assert_eq!(
            result.errors()[1].to_string(),
            "Weight: must be between 150 and 400"
        );
    }

    #[test]
    fn merging_valid_result_changes_nothing() {
        let mut result = ValidationResult::new();
        result.add_error("Team", "must be between 0 and 31");
        let before = result.clone();
        result.merge(ValidationResult::new());
        assert_eq!(result, before);
    }
}
