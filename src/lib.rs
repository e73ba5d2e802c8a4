pub mod cs;
pub mod error;

pub use cs::ecc;
pub use cs::ecc::hamming::{Codeword, Decoded, HammingCode, Layout};
pub use error::{Error, Result};
