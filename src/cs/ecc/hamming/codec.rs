//! Encoding and syndrome decoding over a shared [`Layout`].

use crate::cs::ecc::hamming::codeword::Codeword;
use crate::cs::ecc::hamming::layout::Layout;
use crate::cs::ecc::{BlockCode, Result};
use crate::error::Error;
use log::{debug, trace};
use std::sync::Arc;

/// Data width of a 7-bit ASCII character
pub const ASCII_BITS: usize = 7;

/// Odd parity of the set bits in `bits`
fn parity(bits: u128) -> bool {
    bits.count_ones() & 1 == 1
}

/// Outcome of decoding one codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// Every data position read back, least-significant first. Bits at or above the
    /// data width are zero unless a multi-bit error was miscorrected into the padding.
    pub value: u128,
    /// Syndrome computed from the received codeword; 0 means every check passed
    pub syndrome: usize,
    /// Position that was flipped before reading the data bits, if any
    pub corrected: Option<usize>,
}

/// A single-error-correcting Hamming code for data units of a fixed width.
///
/// Cloning is cheap: clones share one immutable [`Layout`].
#[derive(Debug, Clone)]
pub struct HammingCode {
    layout: Arc<Layout>,
}

impl HammingCode {
    /// Creates a code for `data_bits`-bit data units.
    pub fn new(data_bits: usize) -> Result<Self> {
        Ok(Self::from_layout(Arc::new(Layout::new(data_bits)?)))
    }

    /// Creates a code for 7-bit ASCII characters (15-bit codewords)
    pub fn ascii() -> Self {
        Self::from_layout(Arc::new(Layout::build(ASCII_BITS)))
    }

    /// Wraps an existing layout, sharing it with any other holders
    pub fn from_layout(layout: Arc<Layout>) -> Self {
        HammingCode { layout }
    }

    /// The layout this code encodes and decodes with
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Encodes one data unit.
    ///
    /// Data bits fill the non-parity positions in increasing order, starting from the
    /// least-significant bit of `value`; parity bit `p` (at position `2^p`) is then set to the
    /// XOR of every data bit whose position has bit `p` set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputWidthMismatch`] if `value` does not fit in the data width.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamcode::cs::ecc::hamming::HammingCode;
    ///
    /// let code = HammingCode::new(4).unwrap();
    /// let word = code.encode(0b1011).unwrap();
    /// assert_eq!(word.width(), 7);
    /// assert_eq!(code.decode(&word).unwrap(), 0b1011);
    /// ```
    pub fn encode(&self, value: u64) -> Result<Codeword> {
        let layout = &*self.layout;
        let width = layout.data_bits();
        if width < u64::BITS as usize && value >> width != 0 {
            return Err(Error::InputWidthMismatch { value, width });
        }

        let mut bits = 0u128;
        for (offset, &position) in layout.data_positions().iter().take(width).enumerate() {
            if (value >> offset) & 1 == 1 {
                bits |= 1u128 << (position - 1);
            }
        }

        for group in 0..layout.parity_bits() {
            if let Some(position) = layout.parity_position(group) {
                if parity(bits & layout.group_mask(group)) {
                    bits |= 1u128 << (position - 1);
                }
            }
        }

        let word = Codeword::from_raw(bits, layout.total_bits());
        trace!("encoded {:#x} as {}", value, word);
        Ok(word)
    }

    /// Encodes one character; its scalar value must fit in the data width
    pub fn encode_char(&self, c: char) -> Result<Codeword> {
        self.encode(u64::from(c))
    }

    /// Computes the syndrome of `codeword` without correcting it.
    ///
    /// Bit `p` of the result is the parity of every position covered by group `p`, parity
    /// positions included. A clean codeword gives 0; a single flipped bit gives its position.
    pub fn syndrome(&self, codeword: &Codeword) -> Result<usize> {
        self.check_length(codeword)?;
        Ok(self.syndrome_of(codeword.bits()))
    }

    fn syndrome_of(&self, bits: u128) -> usize {
        (0..self.layout.parity_bits())
            .filter(|&group| parity(bits & self.layout.group_mask(group)))
            .fold(0, |syndrome, group| syndrome | (1 << group))
    }

    fn check_length(&self, codeword: &Codeword) -> Result<()> {
        let max_length = self.layout.total_bits();
        if codeword.width() > max_length {
            return Err(Error::InputTooLong {
                length: codeword.width(),
                max_length,
            });
        }
        Ok(())
    }

    /// Decodes one codeword, correcting a single-bit error and reporting what was done.
    ///
    /// Codewords shorter than the layout are zero-extended at the high end. A nonzero syndrome
    /// always names a position inside the codeword, so it is flipped unconditionally. With two
    /// or more errors the syndrome names the wrong position (or none), and the returned value
    /// may differ from the one encoded. Every data position is read back, padding included, so a
    /// miscorrection that lands on a padding position shows up as a value wider than the data
    /// width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputTooLong`] if `codeword` is longer than the layout's total bits.
    pub fn decode_report(&self, codeword: &Codeword) -> Result<Decoded> {
        self.check_length(codeword)?;
        let layout = &*self.layout;

        let mut bits = codeword.bits();
        let syndrome = self.syndrome_of(bits);
        let corrected = if syndrome == 0 {
            None
        } else {
            bits ^= 1u128 << (syndrome - 1);
            debug!("syndrome {} in {}, flipped that position", syndrome, codeword);
            Some(syndrome)
        };

        let value = layout
            .data_positions()
            .iter()
            .enumerate()
            .filter(|&(_, &position)| (bits >> (position - 1)) & 1 == 1)
            .fold(0u128, |value, (offset, _)| value | (1u128 << offset));

        trace!("decoded {} as {:#x}", codeword, value);
        Ok(Decoded {
            value,
            syndrome,
            corrected,
        })
    }

    /// Decodes one codeword, correcting a single-bit error
    pub fn decode(&self, codeword: &Codeword) -> Result<u128> {
        self.decode_report(codeword).map(|decoded| decoded.value)
    }

    /// Decodes a codeword given as `'0'`/`'1'` text, highest position first.
    ///
    /// ```
    /// use hamcode::cs::ecc::hamming::HammingCode;
    ///
    /// let code = HammingCode::ascii();
    /// // 'a' with position 5 flipped
    /// assert_eq!(code.decode_str("000011000010110").unwrap(), 97);
    /// ```
    pub fn decode_str(&self, text: &str) -> Result<u128> {
        let length = text.chars().count();
        let max_length = self.layout.total_bits();
        if length > max_length {
            return Err(Error::InputTooLong { length, max_length });
        }
        self.decode(&text.parse::<Codeword>()?)
    }

    /// Decodes one codeword into a character
    pub fn decode_char(&self, codeword: &Codeword) -> Result<char> {
        to_char(self.decode(codeword)?)
    }
}

/// Interprets a decoded value as a character.
pub fn to_char(value: u128) -> Result<char> {
    u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| Error::invalid(format!("{:#x} is not a Unicode scalar value", value)))
}

impl BlockCode for HammingCode {
    type Word = Codeword;

    fn data_bits(&self) -> usize {
        self.layout.data_bits()
    }

    fn code_bits(&self) -> usize {
        self.layout.total_bits()
    }

    fn encode_unit(&self, data: u64) -> Result<Codeword> {
        self.encode(data)
    }

    fn decode_unit(&self, word: &Codeword) -> Result<u128> {
        self.decode(word)
    }
}
