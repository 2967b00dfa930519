//! Result type definition and extension traits.
//!
//! Lets the UI edge fall back on a failure while keeping a trace of it.

use crate::error::Error;

/// The standard Result type for waypost operations.
///
/// # Examples
///
/// ```ignore
/// fn operation() -> Result<RoutePath> {
///     let path = RoutePath::new("/tasks")?;
///     Ok(path)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait providing logging combinators for Results.
pub trait ResultExt<T> {
    /// Convert a Result to an Option, logging the error if present.
    fn into_option_logged(self) -> Option<T>;

    /// Get the value or a default, logging the error if present.
    fn or_default_logged(self, default: T) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Operation failed: {}", e);
                None
            }
        }
    }

    fn or_default_logged(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Operation failed, using default: {}", e);
                default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_into_option_ok() {
        let result: Result<i32> = Ok(42);
        assert_eq!(result.into_option_logged(), Some(42));
    }

    #[test]
    fn test_result_into_option_err() {
        let result: Result<i32> = Err(Error::EmptyLabel);
        assert_eq!(result.into_option_logged(), None);
    }

    #[test]
    fn test_or_default_logged() {
        let result: Result<i32> = Err(Error::WindowUnavailable);
        assert_eq!(result.or_default_logged(7), 7);

        let result: Result<i32> = Ok(3);
        assert_eq!(result.or_default_logged(7), 3);
    }
}
