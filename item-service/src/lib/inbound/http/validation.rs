use std::fmt;

use serde::Serialize;

/// One rejected request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Accumulates field errors while a request body is parsed into a command.
///
/// Request types validate every field before giving up, so the caller sees
/// all problems at once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the error of `result` against `field`, if any.
    pub fn check<T, E: fmt::Display>(&mut self, field: &str, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.0.push(FieldError::new(field, e.to_string()));
                None
            }
        }
    }

    /// Like [`check`](Self::check) for optional fields: `None` stays `None`.
    pub fn check_optional<T, E: fmt::Display>(
        &mut self,
        field: &str,
        result: Option<Result<T, E>>,
    ) -> Option<T> {
        result.and_then(|r| self.check(field, r))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_every_failure() {
        let mut errors = ValidationErrors::new();

        let a: Option<u8> = errors.check("a", "x".parse::<u8>());
        let b: Option<u8> = errors.check("b", "7".parse::<u8>());
        let c: Option<u8> = errors.check("c", "-1".parse::<u8>());

        assert_eq!(a, None);
        assert_eq!(b, Some(7));
        assert_eq!(c, None);

        let fields: Vec<String> = errors.into_inner().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["a", "c"]);
    }

    #[test]
    fn test_optional_absent_is_not_an_error() {
        let mut errors = ValidationErrors::new();

        let value: Option<u8> = errors.check_optional("a", None::<Result<u8, String>>);

        assert_eq!(value, None);
        assert!(errors.is_empty());
    }
}
