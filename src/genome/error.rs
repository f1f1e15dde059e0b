//! Genome error types

use thiserror::Error;

/// Errors raised while encoding, decoding, or parsing a genome
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Buffer shorter than a full encoding
    #[error("buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall {
        /// Needed size
        needed: usize,
        /// Actual size
        got: usize,
    },

    /// Byte count other than the exact encoding size
    #[error("invalid encoding length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Expected size
        expected: usize,
        /// Actual size
        got: usize,
    },

    /// Version byte is not a supported format version
    #[error("unsupported format version: expected 0, got {found}")]
    UnsupportedVersion {
        /// Found version byte
        found: u8,
    },

    /// Malformed hexadecimal string
    #[error("invalid hex string: {reason}")]
    InvalidHex {
        /// What was wrong with the input
        reason: &'static str,
    },

    /// Seed pattern string is not 8 binary digits
    #[error("invalid pattern {pattern:?}: expected 8 characters of '0' or '1'")]
    InvalidPattern {
        /// Offending input
        pattern: String,
    },

    /// Field value does not fit its wire width
    #[error("field {field} out of range: {value} (max {max})")]
    FieldOutOfRange {
        /// Field name
        field: &'static str,
        /// Supplied value
        value: u32,
        /// Largest encodable value
        max: u32,
    },

    /// Document does not hold the fixed number of layers
    #[error("expected {expected} layers, got {got}")]
    LayerCount {
        /// Required layer count
        expected: usize,
        /// Supplied layer count
        got: usize,
    },
}

impl Error {
    /// Whether this error concerns the shape of an encoding rather than a field value
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::BufferTooSmall { .. }
                | Self::InvalidLength { .. }
                | Self::UnsupportedVersion { .. }
                | Self::InvalidHex { .. }
                | Self::InvalidPattern { .. }
        )
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classes() {
        assert!(Error::UnsupportedVersion { found: 1 }.is_format_error());
        assert!(Error::InvalidHex { reason: "odd length" }.is_format_error());
        assert!(
            !Error::FieldOutOfRange {
                field: "colors[0]",
                value: 16,
                max: 15
            }
            .is_format_error()
        );
    }

    #[test]
    fn test_error_display() {
        let err = Error::BufferTooSmall { needed: 32, got: 10 };
        assert_eq!(err.to_string(), "buffer too small: need 32 bytes, got 10");
    }
}
