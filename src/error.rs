//! Error types shared by every codec in the crate.

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by layout construction, encoding and decoding.
///
/// A decode that silently picks the wrong codeword because two or more
/// bits flipped is not represented here: a distance-3 code cannot tell
/// that case apart from a single-bit error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A codeword longer than the layout's total bit count was supplied
    #[error("input of {length} bits exceeds the maximum of {max_length} bits")]
    InputTooLong { length: usize, max_length: usize },

    /// A data unit does not fit in the configured data width
    #[error("value {value:#x} does not fit in {width} data bits")]
    InputWidthMismatch { value: u64, width: usize },

    /// The requested data width cannot be represented
    #[error("data width {width} is not supported (maximum {max_width})")]
    UnsupportedWidth { width: usize, max_width: usize },

    /// Malformed arguments or text
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InputTooLong {
            length: 16,
            max_length: 15,
        };
        assert_eq!(
            err.to_string(),
            "input of 16 bits exceeds the maximum of 15 bits"
        );

        let err = Error::InputWidthMismatch {
            value: 128,
            width: 7,
        };
        assert_eq!(err.to_string(), "value 0x80 does not fit in 7 data bits");

        assert_eq!(
            Error::invalid("bad digit").to_string(),
            "invalid input: bad digit"
        );
    }
}
