//! Error types for row parsing, selection and classification.

use thiserror::Error;

/// Error codes reported alongside [`SonorityError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: A partially resting 3-voice row left more than one sounding interval
    MalformedRow,
    /// E002: A cell is neither `Rest` nor a `[-]<quality><1-8>` interval
    UnrecognizedToken,
    /// E003: A row has fewer columns than the voice count requires
    ShortRow,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::MalformedRow => "E001",
            ErrorCode::UnrecognizedToken => "E002",
            ErrorCode::ShortRow => "E003",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Top-level error type for sonority operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SonorityError {
    /// Two of three voices were expected to rest, but more intervals survived.
    #[error("malformed row: expected at most one sounding interval beside a rest, found {surviving}")]
    MalformedRow {
        /// Number of non-rest cells left in the row.
        surviving: usize,
    },

    /// The cell text does not encode an interval.
    #[error("unrecognized interval token: {token:?}")]
    UnrecognizedToken {
        /// Raw cell text.
        token: String,
    },

    /// Not enough columns to build a row.
    #[error("row has {found} column(s), expected at least {expected}")]
    ShortRow {
        /// Columns required by the voice count.
        expected: usize,
        /// Columns actually present.
        found: usize,
    },
}

impl SonorityError {
    /// Returns the [`ErrorCode`] for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SonorityError::MalformedRow { .. } => ErrorCode::MalformedRow,
            SonorityError::UnrecognizedToken { .. } => ErrorCode::UnrecognizedToken,
            SonorityError::ShortRow { .. } => ErrorCode::ShortRow,
        }
    }
}
