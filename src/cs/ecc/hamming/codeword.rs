//! Fixed-width codeword value.
//!
//! Position 1 is the least-significant bit; in text and bit-sequence form the
//! highest position comes first.

use crate::cs::ecc::Result;
use crate::error::Error;
use bitvec::prelude::*;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Longest codeword that can be held in a [`Codeword`]
pub const MAX_CODEWORD_BITS: usize = 128;

/// A sequence of `width` bits; bit `i - 1` of the backing integer is position `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Codeword {
    bits: u128,
    width: usize,
}

fn width_mask(width: usize) -> u128 {
    if width >= MAX_CODEWORD_BITS {
        u128::MAX
    } else {
        (1u128 << width) - 1
    }
}

impl Codeword {
    /// Creates a codeword of `width` bits from its integer form.
    ///
    /// # Errors
    ///
    /// Fails if `width` exceeds [`MAX_CODEWORD_BITS`] or `bits` has set bits above `width`.
    pub fn new(bits: u128, width: usize) -> Result<Self> {
        if width > MAX_CODEWORD_BITS {
            return Err(Error::InputTooLong {
                length: width,
                max_length: MAX_CODEWORD_BITS,
            });
        }
        if bits & !width_mask(width) != 0 {
            return Err(Error::invalid(format!(
                "bits {:#x} do not fit in a {}-bit codeword",
                bits, width
            )));
        }
        Ok(Codeword { bits, width })
    }

    pub(crate) fn from_raw(bits: u128, width: usize) -> Self {
        Codeword {
            bits: bits & width_mask(width),
            width,
        }
    }

    /// Builds a codeword from a bit sequence whose first element is the highest position.
    ///
    /// ```
    /// use bitvec::prelude::*;
    /// use hamcode::cs::ecc::hamming::Codeword;
    ///
    /// let word = Codeword::from_bitslice(bits![u8, Msb0; 1, 1, 0]).unwrap();
    /// assert_eq!(word.bits(), 0b110);
    /// assert!(word.bit(3) && word.bit(2) && !word.bit(1));
    /// ```
    pub fn from_bitslice(bits: &BitSlice<u8, Msb0>) -> Result<Self> {
        if bits.len() > MAX_CODEWORD_BITS {
            return Err(Error::InputTooLong {
                length: bits.len(),
                max_length: MAX_CODEWORD_BITS,
            });
        }
        let value = bits
            .iter()
            .by_vals()
            .fold(0u128, |acc, bit| (acc << 1) | u128::from(bit));
        Ok(Codeword {
            bits: value,
            width: bits.len(),
        })
    }

    /// The bit sequence form, highest position first
    pub fn to_bitvec(&self) -> BitVec<u8, Msb0> {
        (1..=self.width).rev().map(|position| self.bit(position)).collect()
    }

    /// Integer form; bit `i - 1` is position `i`
    pub fn bits(&self) -> u128 {
        self.bits
    }

    /// Number of positions in the codeword
    pub fn width(&self) -> usize {
        self.width
    }

    /// Value at the 1-indexed `position`; positions outside the codeword read as 0
    pub fn bit(&self, position: usize) -> bool {
        position >= 1 && position <= self.width && (self.bits >> (position - 1)) & 1 == 1
    }

    /// Flips the bit at the 1-indexed `position`.
    pub fn flip(&mut self, position: usize) -> Result<()> {
        if position == 0 || position > self.width {
            return Err(Error::invalid(format!(
                "position {} is outside a {}-bit codeword",
                position, self.width
            )));
        }
        self.bits ^= 1u128 << (position - 1);
        Ok(())
    }

    /// Copy of this codeword with `position` flipped
    pub fn flipped(&self, position: usize) -> Result<Self> {
        let mut word = *self;
        word.flip(position)?;
        Ok(word)
    }

    /// Number of set bits
    pub fn count_ones(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Number of positions at which the two codewords differ
    pub fn distance(&self, other: &Codeword) -> u32 {
        (self.bits ^ other.bits).count_ones()
    }
}

impl Display for Codeword {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for position in (1..=self.width).rev() {
            f.write_str(if self.bit(position) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Codeword {
    type Err = Error;

    /// Parses `'0'`/`'1'` digits, most significant (highest position) first.
    fn from_str(s: &str) -> Result<Self> {
        let length = s.chars().count();
        if length > MAX_CODEWORD_BITS {
            return Err(Error::InputTooLong {
                length,
                max_length: MAX_CODEWORD_BITS,
            });
        }
        let mut bits = 0u128;
        for c in s.chars() {
            let bit = match c {
                '0' => 0,
                '1' => 1,
                other => {
                    return Err(Error::invalid(format!(
                        "unexpected character {:?} in codeword",
                        other
                    )))
                }
            };
            bits = (bits << 1) | bit;
        }
        Ok(Codeword {
            bits,
            width: length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_form() {
        let word: Codeword = "000011000000110".parse().unwrap();
        assert_eq!(word.width(), 15);
        assert_eq!(word.bits(), 1542);
        assert_eq!(word.to_string(), "000011000000110");
        assert!(word.bit(2));
        assert!(word.bit(3));
        assert!(!word.bit(1));
        assert!(!word.bit(16));
        assert!(!word.bit(0));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "0102".parse::<Codeword>(),
            Err(Error::InvalidInput(_))
        ));
        let long = "1".repeat(MAX_CODEWORD_BITS + 1);
        assert_eq!(
            long.parse::<Codeword>(),
            Err(Error::InputTooLong {
                length: MAX_CODEWORD_BITS + 1,
                max_length: MAX_CODEWORD_BITS
            })
        );
        let empty: Codeword = "".parse().unwrap();
        assert_eq!(empty.width(), 0);
        assert_eq!(empty.to_string(), "");
    }

    #[test]
    fn test_new_checks_width() {
        assert!(Codeword::new(0b111, 3).is_ok());
        assert!(matches!(
            Codeword::new(0b1000, 3),
            Err(Error::InvalidInput(_))
        ));
        assert!(Codeword::new(u128::MAX, 128).is_ok());
        assert!(matches!(
            Codeword::new(0, 129),
            Err(Error::InputTooLong { .. })
        ));
    }

    #[test]
    fn test_bitvec_form() {
        let word: Codeword = "1001101".parse().unwrap();
        let bits = word.to_bitvec();
        assert_eq!(bits.len(), 7);
        assert_eq!(bits.as_bitslice(), bits![u8, Msb0; 1, 0, 0, 1, 1, 0, 1]);
        assert_eq!(Codeword::from_bitslice(&bits).unwrap(), word);
    }

    #[test]
    fn test_flip_and_distance() {
        let word: Codeword = "0000".parse().unwrap();
        let flipped = word.flipped(1).unwrap().flipped(4).unwrap();
        assert_eq!(flipped.to_string(), "1001");
        assert_eq!(flipped.count_ones(), 2);
        assert_eq!(word.distance(&flipped), 2);
        assert!(word.flipped(0).is_err());
        assert!(word.flipped(5).is_err());
    }
}
