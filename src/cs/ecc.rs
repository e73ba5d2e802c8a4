//! Error correction code implementations.
//!
//! This module provides single-character Hamming codes: a data unit of a
//! fixed bit width (a 7-bit ASCII character by default) is spread over the
//! non-parity positions of a codeword, and parity bits at the power-of-two
//! positions let the decoder locate and flip any single erroneous bit.
//!
//! # Error Correction Algorithms
//!
//! Error correction codes are used to detect and correct errors in data
//! transmission and storage, making digital communications more reliable.
//!
//! # Examples
//!
//! ```rust
//! use hamcode::cs::ecc::hamming::HammingCode;
//!
//! let code = HammingCode::ascii();
//! let word = code.encode_char('a').unwrap();
//! assert_eq!(word.to_string(), "000011000000110");
//! assert_eq!(code.decode_char(&word).unwrap(), 'a');
//! ```

/// Result type for error correction operations
pub type Result<T> = crate::error::Result<T>;

/// Trait for block codes that map one fixed-width data unit to one codeword
pub trait BlockCode {
    /// Codeword representation produced by the code
    type Word;

    /// Number of data bits carried by one codeword
    fn data_bits(&self) -> usize;

    /// Total length of one codeword in bits
    fn code_bits(&self) -> usize;

    /// Encode a single data unit
    fn encode_unit(&self, data: u64) -> Result<Self::Word>;

    /// Decode a single codeword, correcting errors if possible
    ///
    /// The result covers every data position the code carries, so it may be wider than
    /// `data_bits` when a multi-bit error was miscorrected.
    fn decode_unit(&self, word: &Self::Word) -> Result<u128>;
}

/// Hamming codes over single data units
pub mod hamming;
pub use hamming::{
    decode_batch, decode_to_string, encode_batch, encode_str, inject_errors, Codeword, Decoded,
    ErrorInjector, HammingCode, Layout,
};
