//! Standard base64 codec (`A-Z a-z 0-9 + /`, `=` padding).
//!
//! Encoding works on 3-byte groups. Decoding has two entry points that must
//! agree byte for byte on every input, including the error they report:
//!
//! - [`from_base64_bin_quantum`] decodes one 4-character quantum at a time and
//!   defines the accepted grammar (embedded CR/LF skipped, padding only at the
//!   very end).
//! - [`from_base64_bin`] takes 8- and 4-byte blocks in one step while they are
//!   pure alphabet and hands anything else to the quantum decoder.
//!
//! # Example
//!
//! ```
//! use json_script_base64::{to_base64, from_base64};
//!
//! let encoded = to_base64(b"hello world").unwrap();
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
//! assert_eq!(from_base64(&encoded).unwrap(), b"hello world");
//! ```

mod constants;
mod decode_quantum;
mod from_base64;
mod to_base64;

pub use constants::{ALPHABET_BYTES, DECODE_TABLE, INVALID, PAD};
pub use from_base64::{from_base64, from_base64_bin, from_base64_bin_quantum};
pub use to_base64::to_base64;

/// Error type for base64 operations.
///
/// Offsets are byte positions in the encoded input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// Nothing to encode.
    EmptyInput,
    /// A byte that is neither alphabet, padding, nor CR/LF.
    InvalidByte { offset: usize, byte: u8 },
    /// Padding where it is not allowed, or too little of it.
    InvalidPadding { offset: usize },
    /// Non-newline input after the padding.
    TrailingData { offset: usize },
    /// The input ends one character into a quantum.
    Truncated { offset: usize },
}

impl std::fmt::Display for Base64Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Base64Error::EmptyInput => write!(f, "cannot encode empty input"),
            Base64Error::InvalidByte { offset, byte } => {
                write!(f, "illegal base64 byte 0x{:02x} at offset {}", byte, offset)
            }
            Base64Error::InvalidPadding { offset } => {
                write!(f, "invalid base64 padding at offset {}", offset)
            }
            Base64Error::TrailingData { offset } => {
                write!(f, "unexpected data after base64 padding at offset {}", offset)
            }
            Base64Error::Truncated { offset } => {
                write!(f, "truncated base64 input at offset {}", offset)
            }
        }
    }
}

impl std::error::Error for Base64Error {}
