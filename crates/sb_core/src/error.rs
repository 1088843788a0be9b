use thiserror::Error;

/// Boundary errors.
///
/// The board state machine itself never fails: out-of-range operator input
/// is clamped or silently ignored so the console stays usable mid-bout.
/// Errors only arise at the edges (JSON parsing, display transport).
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            BoardError::Serialization(err.to_string())
        } else {
            BoardError::Deserialization(err.to_string())
        }
    }
}

/// Error reported by a display sink implementation.
///
/// Sinks wrap whatever transport failure they hit in a message; the session
/// logs it and moves on — a dead display never blocks the operator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("display transport error: {0}")]
pub struct DisplayError(pub String);

impl DisplayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialization_error_from_bad_json() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let board_err = BoardError::from(err);
        assert!(matches!(board_err, BoardError::Deserialization(_)));
    }

    #[test]
    fn test_display_error_message() {
        let err = DisplayError::new("socket closed");
        assert_eq!(err.to_string(), "display transport error: socket closed");
    }
}
