//! Error types for the edidinfo library

use std::io;
use thiserror::Error;

/// Main error type for edidinfo operations
///
/// Decoding itself can only fail with [`EdidError::InsufficientData`]. The
/// remaining variants belong to the input and report helpers around it.
#[derive(Error, Debug)]
pub enum EdidError {
    /// Buffer is shorter than one EDID base block
    #[error("Insufficient EDID data: expected at least {expected} bytes, got {actual}")]
    InsufficientData {
        /// Required length
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Failed to read the input
    #[error("Failed to read EDID input: {0}")]
    Io(#[from] io::Error),

    /// Input text is not valid hexadecimal
    #[error("Invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EdidError {
    /// Returns `true` for the single decode-time failure
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, EdidError::InsufficientData { .. })
    }
}

/// Result type for edidinfo operations
pub type EdidResult<T> = std::result::Result<T, EdidError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_message() {
        let err = EdidError::InsufficientData { expected: 128, actual: 12 };
        assert!(err.is_insufficient_data());
        assert_eq!(
            err.to_string(),
            "Insufficient EDID data: expected at least 128 bytes, got 12"
        );
    }

    #[test]
    fn test_hex_error_conversion() {
        let err: EdidError = hex::decode("zz").unwrap_err().into();
        assert!(matches!(err, EdidError::InvalidHex(_)));
        assert!(!err.is_insufficient_data());
    }
}
