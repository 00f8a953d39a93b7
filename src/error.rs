use thiserror::Error;
use tracing::{error, warn};

/// Domain-specific errors for the Zero Garden behavior layer.
///
/// Most behaviors degrade silently on missing elements or capabilities; the
/// errors here come from the durable edge of the crate, the file-backed
/// store.
#[derive(Error, Debug)]
pub enum UiError {
    #[error("Failed to load store from '{path}': {source}")]
    StoreLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save store to '{path}': {source}")]
    StoreSave {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Store data is not valid JSON: {0}")]
    StoreParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, UiError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the caller doesn't need the error.
///
/// # Examples
///
/// ```ignore
/// use zero_garden_ui::error::ResultExt;
///
/// // Log and continue if the store fails to persist
/// store.save().log_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_err_returns_value_on_ok() {
        let result: std::result::Result<u32, String> = Ok(7);
        assert_eq!(result.log_err(), Some(7));
    }

    #[test]
    fn test_log_err_returns_none_on_err() {
        let result: std::result::Result<u32, String> = Err("boom".into());
        assert_eq!(result.log_err(), None);
    }

    #[test]
    fn test_error_display_includes_path() {
        let err = UiError::StoreLoad {
            path: "/tmp/state.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/tmp/state.json"));
    }
}
