//! Field-level input validation.
//!
//! A [`Validator`] accumulates one message per field. Once every check has
//! run, an invalid validator's errors are handed to
//! [`AppState::failed_validation`](crate::api::AppState::failed_validation)
//! and rendered as the `422` envelope.

use std::collections::HashSet;
use std::hash::Hash;

use crate::api::envelope::FieldErrors;

/// Collects validation errors keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    /// Create an empty validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no errors have been recorded.
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record an error for `key`. The first message for a key wins.
    pub fn add_error(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(key.into())
            .or_insert_with(|| message.into());
    }

    /// Record an error for `key` unless `ok` holds.
    pub fn check(&mut self, ok: bool, key: impl Into<String>, message: impl Into<String>) {
        if !ok {
            self.add_error(key, message);
        }
    }

    /// Recorded errors.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Consume the validator, returning its errors.
    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }
}

/// True if `value` is one of `permitted`.
pub fn permitted_value<T: PartialEq>(value: &T, permitted: &[T]) -> bool {
    permitted.contains(value)
}

/// True if every element of `values` is distinct.
pub fn unique<T: Eq + Hash>(values: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().all(|v| seen.insert(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validator_is_valid() {
        assert!(Validator::new().valid());
    }

    #[test]
    fn first_error_for_a_key_wins() {
        let mut v = Validator::new();
        v.add_error("title", "must be provided");
        v.add_error("title", "must not be more than 500 bytes long");

        assert!(!v.valid());
        assert_eq!(v.errors().len(), 1);
        assert_eq!(v.errors()["title"], "must be provided");
    }

    #[test]
    fn check_only_records_failures() {
        let mut v = Validator::new();
        v.check(true, "year", "must be provided");
        v.check(false, "runtime", "must be a positive integer");

        let errors = v.into_errors();
        assert!(!errors.contains_key("year"));
        assert_eq!(errors["runtime"], "must be a positive integer");
    }

    #[test]
    fn permitted_value_matches_list() {
        assert!(permitted_value(&"staging", &["development", "staging"]));
        assert!(!permitted_value(&"qa", &["development", "staging"]));
    }

    #[test]
    fn unique_detects_duplicates() {
        assert!(unique(&["drama", "comedy"]));
        assert!(!unique(&["drama", "comedy", "drama"]));
        assert!(unique::<&str>(&[]));
    }
}
