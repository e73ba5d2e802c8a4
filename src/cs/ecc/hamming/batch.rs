//! Order-preserving batch encode/decode, one parallel task per data unit.

use crate::cs::ecc::hamming::codec::to_char;
use crate::cs::ecc::{BlockCode, Result};
use rayon::prelude::*;

/// Encodes every unit in `units`, preserving order.
///
/// Stops at the first unit that fails to encode.
pub fn encode_batch<C>(code: &C, units: &[u64]) -> Result<Vec<C::Word>>
where
    C: BlockCode + Sync,
    C::Word: Send,
{
    units.par_iter().map(|&unit| code.encode_unit(unit)).collect()
}

/// Decodes every codeword in `words`, preserving order
pub fn decode_batch<C>(code: &C, words: &[C::Word]) -> Result<Vec<u128>>
where
    C: BlockCode + Sync,
    C::Word: Sync,
{
    words.par_iter().map(|word| code.decode_unit(word)).collect()
}

/// Encodes each character of `text` as one codeword.
///
/// ```
/// use hamcode::cs::ecc::hamming::{decode_to_string, encode_str, HammingCode};
///
/// let code = HammingCode::ascii();
/// let words = encode_str(&code, "Praise").unwrap();
/// assert_eq!(words.len(), 6);
/// assert_eq!(decode_to_string(&code, &words).unwrap(), "Praise");
/// ```
pub fn encode_str<C>(code: &C, text: &str) -> Result<Vec<C::Word>>
where
    C: BlockCode + Sync,
    C::Word: Send,
{
    let units: Vec<u64> = text.chars().map(u64::from).collect();
    encode_batch(code, &units)
}

/// Decodes `words` and concatenates the characters they carry
pub fn decode_to_string<C>(code: &C, words: &[C::Word]) -> Result<String>
where
    C: BlockCode + Sync,
    C::Word: Sync,
{
    decode_batch(code, words)?.into_iter().map(to_char).collect()
}
