//! Error types for marga

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Terrain file decoding failures.
///
/// Any of these aborts the parse; no partial grid is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The first six bytes are not the GAT signature
    #[error("invalid signature: found {found:02x?}")]
    InvalidSignature {
        /// Bytes found at offset 0
        found: [u8; 6],
    },

    /// The buffer ends before the header or the declared cell blocks
    #[error("truncated data: expected {expected} bytes, got {available}")]
    TruncatedData {
        /// Bytes required by the header (saturates at `usize::MAX`)
        expected: usize,
        /// Bytes actually available
        available: usize,
    },

    /// Header declares an empty grid
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
    },
}

/// marga error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("Coordinate ({x},{y}) outside {width}x{height} grid")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl Error {
    /// True for [`Error::Format`] failures
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }

    /// The underlying format error, if any
    pub fn as_format(&self) -> Option<&FormatError> {
        match self {
            Error::Format(e) => Some(e),
            _ => None,
        }
    }
}
