use thiserror::Error;

/// Errors raised by reading construction and mutation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReadingError {
    #[error("Invalid direction code {code} (expected 0, 1 or 2)")]
    InvalidDirection { code: u8 },
}
