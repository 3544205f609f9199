//! Builder argument assertions.
//!
//! Validates and defaults builder inputs in a single place:
//!
//! ```
//! use url_validator::utils::require::Require;
//!
//! let limit = Require::mandatory(Some(2048usize))
//!     .is_some("'max_url_length' must be set")?
//!     .satisfies(|n| *n > 0, "'max_url_length' must be > 0")?
//!     .get()?;
//! assert_eq!(limit, 2048);
//! # Ok::<(), url_validator::ArgumentError>(())
//! ```

use crate::error_handling::ArgumentError;

/// A value under assertion.
///
/// Every check either passes the value through or fails with an
/// [`ArgumentError`] carrying the caller's message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Require<T> {
    value: Option<T>,
}

impl<T> Require<T> {
    /// A value without a default. Nothing is checked implicitly, combine with
    /// [`Require::is_some`] to reject absence.
    pub fn mandatory(value: Option<T>) -> Self {
        Self { value }
    }

    /// A value that is known to be present; same as `mandatory(Some(value))`.
    pub fn assert_that(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// A value with a default used when `value` is `None`. The default has to pass
    /// every subsequent check too.
    pub fn optional(value: Option<T>, default: T) -> Self {
        Self {
            value: Some(value.unwrap_or(default)),
        }
    }

    pub fn is_some(self, message: &str) -> Result<Self, ArgumentError> {
        if self.value.is_none() {
            return Err(ArgumentError(message.to_string()));
        }
        Ok(self)
    }

    pub fn is_true(self, condition: bool, message: &str) -> Result<Self, ArgumentError> {
        if !condition {
            return Err(ArgumentError(message.to_string()));
        }
        Ok(self)
    }

    pub fn is_false(self, condition: bool, message: &str) -> Result<Self, ArgumentError> {
        self.is_true(!condition, message)
    }

    /// Fails unless the value is present and matches `predicate`.
    pub fn satisfies<P>(self, predicate: P, message: &str) -> Result<Self, ArgumentError>
    where
        P: FnOnce(&T) -> bool,
    {
        match &self.value {
            Some(v) if predicate(v) => Ok(self),
            _ => Err(ArgumentError(message.to_string())),
        }
    }

    /// Fails if the value is present and matches `predicate`.
    pub fn rejects<P>(self, predicate: P, message: &str) -> Result<Self, ArgumentError>
    where
        P: FnOnce(&T) -> bool,
    {
        match &self.value {
            Some(v) if predicate(v) => Err(ArgumentError(message.to_string())),
            _ => Ok(self),
        }
    }

    pub fn get(self) -> Result<T, ArgumentError> {
        self.value
            .ok_or_else(|| ArgumentError("Required value is missing".to_string()))
    }

    pub fn map<U, F>(self, f: F) -> Result<U, ArgumentError>
    where
        F: FnOnce(T) -> U,
    {
        self.get().map(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_mandatory_value_valid() {
        assert_eq!(Require::assert_that("ok1").get().unwrap(), "ok1");
        assert_eq!(Require::mandatory(Some(111)).get().unwrap(), 111);

        let from_builder = 10;
        let checked = Require::mandatory(Some(from_builder))
            .is_some("'from_builder' must not be None")
            .and_then(|r| r.is_true(true, "'from_builder' must be > 0"))
            .and_then(|r| r.satisfies(|n| *n > 0, "'from_builder' must be > 0"))
            .and_then(|r| r.is_false(false, "'from_builder' must be > 0"))
            .and_then(|r| r.rejects(|n| *n < 0, "'from_builder' must be > 0"))
            .and_then(Require::get)
            .unwrap();
        assert_eq!(checked, 10);
    }

    #[test]
    fn test_mandatory_value_invalid() {
        let err = Require::<i32>::mandatory(None)
            .is_some("'from_builder' must not be None")
            .unwrap_err();
        assert_eq!(err.0, "'from_builder' must not be None");

        assert!(Require::assert_that(0)
            .is_true(false, "Passed boolean must be true")
            .is_err());
        assert!(Require::assert_that(0)
            .is_false(true, "Passed boolean must be false")
            .is_err());
        assert!(Require::assert_that(0)
            .satisfies(|n| *n > 0, "'from_builder' must be > 0")
            .is_err());
        assert!(Require::assert_that(1)
            .rejects(|n| *n > 0, "'from_builder' must be < 0")
            .is_err());
    }

    #[test]
    fn test_satisfies_fails_on_absent_value() {
        assert!(Require::<u8>::mandatory(None)
            .satisfies(|_| true, "absent")
            .is_err());
        // rejects() only looks at present values
        assert!(Require::<u8>::mandatory(None).rejects(|_| true, "absent").is_ok());
    }

    #[test]
    fn test_optional_value_valid() {
        assert_eq!(Require::optional(None, "ok1").get().unwrap(), "ok1");
        assert_eq!(Require::optional(None, 111).get().unwrap(), 111);
        assert_eq!(Require::optional(Some(5), 111).get().unwrap(), 5);

        let checked = Require::optional(None, 10)
            .is_some("'from_builder' must not be None")
            .and_then(|r| r.satisfies(|n| *n > 0, "'from_builder' must be > 0"))
            .and_then(Require::get)
            .unwrap();
        assert_eq!(checked, 10);
    }

    #[test]
    fn test_map() {
        let path = Require::assert_that("/etc").map(PathBuf::from).unwrap();
        assert_eq!(path, Path::new("/etc"));
    }

    #[test]
    fn test_get_missing_value() {
        assert!(Require::<String>::mandatory(None).get().is_err());
    }
}
