//! Hamming error correction code implementation.
//!
//! Hamming codes are a family of linear error-correcting codes developed by Richard Hamming in 1950.
//! A code with `k` parity bits protects up to `2^k - k - 1` data bits in a codeword of `2^k - 1`
//! bits. Parity bits sit at positions 1, 2, 4, 8, ...; parity bit `p` covers every position whose
//! index has bit `p` set. On decode, recomputing those checks yields a syndrome equal to the index
//! of a single flipped bit, or 0 when no error is present.
//!
//! This implementation provides:
//! - A [`Layout`] computed once per data width and shared by every encode/decode call
//! - Encoding of a single data unit (for example one ASCII character) into a [`Codeword`]
//! - Decoding with single-bit error correction, including errors in the parity bits
//! - Order-preserving batch helpers that run in parallel
//! - Random error injection for exercising the codec
//!
//! The code has minimum distance 3. Two or more flipped bits produce a nonzero syndrome that points
//! at the wrong position, so the decoder "corrects" a bit that was fine and returns a different
//! data unit. That outcome is deterministic and is not reported as an error.
//!
//! # Applications
//!
//! - Computer memory (ECC RAM)
//! - Satellite communications
//! - Teaching and demonstrating channel coding

pub mod batch;
pub mod codec;
pub mod codeword;
pub mod layout;
pub mod noise;

pub use batch::{decode_batch, decode_to_string, encode_batch, encode_str};
pub use codec::{to_char, Decoded, HammingCode, ASCII_BITS};
pub use codeword::{Codeword, MAX_CODEWORD_BITS};
pub use layout::{BitPosition, Layout, MAX_DATA_BITS};
pub use noise::{inject_errors, ErrorInjector};
