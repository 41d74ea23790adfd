//! Error types for the action adapter

use thiserror::Error;

use crate::core::Point;

/// Failures raised by a [`TextBuffer`](crate::core::TextBuffer)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Position outside the buffer's storage
    #[error("position {position} is outside the {width}x{height} buffer")]
    OutOfBounds {
        position: Point,
        width: usize,
        height: usize,
    },

    /// Operation the buffer cannot perform
    #[error("unsupported buffer operation: {0}")]
    Unsupported(String),
}

/// Adapter error type
///
/// The adapter has no failure modes of its own; every variant wraps a
/// collaborator failure together with the action that hit it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The buffer rejected an action
    #[error("{action} failed: {source}")]
    Buffer {
        action: &'static str,
        #[source]
        source: BufferError,
    },
}

impl Error {
    pub(crate) fn buffer(action: &'static str) -> impl FnOnce(BufferError) -> Error {
        move |source| Error::Buffer { action, source }
    }

    /// Name of the action that failed
    pub fn action(&self) -> &'static str {
        match self {
            Error::Buffer { action, .. } => *action,
        }
    }
}

/// Result type for adapter actions
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_action() {
        let err = Error::buffer("erase_characters")(BufferError::OutOfBounds {
            position: Point::new(90, 3),
            width: 80,
            height: 24,
        });
        assert_eq!(err.action(), "erase_characters");
        assert_eq!(
            err.to_string(),
            "erase_characters failed: position (90, 3) is outside the 80x24 buffer"
        );
    }
}
