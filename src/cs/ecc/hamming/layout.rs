//! Codeword layout: which positions hold parity, which groups cover which positions.

use crate::cs::ecc::Result;
use crate::error::Error;
use log::debug;

/// Widest data unit a layout can describe (data units are `u64`)
pub const MAX_DATA_BITS: usize = 64;

/// Metadata for one 1-indexed codeword position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitPosition {
    /// Position within the codeword, in `1..=total_bits`
    index: usize,
    /// Number of binary digits used to render the index (the parity bit count)
    digits: usize,
    /// Parity check stored at this position, if it is a parity position
    parity_group: Option<usize>,
}

impl BitPosition {
    /// Position within the codeword
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether this position stores a parity bit
    pub fn is_parity(&self) -> bool {
        self.parity_group.is_some()
    }

    /// Parity check stored here; `None` for data positions
    pub fn parity_group(&self) -> Option<usize> {
        self.parity_group
    }

    /// Whether parity group `group` covers this position (digit `group` of the binary index is 1)
    pub fn covered_by(&self, group: usize) -> bool {
        group < self.digits && (self.index >> group) & 1 == 1
    }

    /// The index as a zero-padded binary string, most significant digit first.
    ///
    /// ```
    /// use hamcode::cs::ecc::hamming::Layout;
    ///
    /// let layout = Layout::new(7).unwrap();
    /// assert_eq!(layout.position(5).unwrap().binary_index(), "0101");
    /// ```
    pub fn binary_index(&self) -> String {
        format!("{:0width$b}", self.index, width = self.digits)
    }
}

/// Position table for a Hamming code protecting `data_bits` bits.
///
/// Built once per data width and immutable afterwards, so one layout can be
/// shared by any number of concurrent encode and decode calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    data_bits: usize,
    parity_bits: usize,
    total_bits: usize,
    positions: Vec<BitPosition>,
    /// Bit `i - 1` of `group_masks[p]` is set when group `p` covers position `i`
    group_masks: Vec<u128>,
    /// Non-parity positions in increasing order
    data_positions: Vec<usize>,
}

impl Layout {
    /// Builds the layout for data units of `data_bits` bits.
    ///
    /// The parity bit count `k` is the smallest `k >= 1` with `2^k >= data_bits + k + 1`, so the
    /// syndrome can name every position plus the "no error" value 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedWidth`] if `data_bits` exceeds [`MAX_DATA_BITS`].
    pub fn new(data_bits: usize) -> Result<Self> {
        if data_bits > MAX_DATA_BITS {
            return Err(Error::UnsupportedWidth {
                width: data_bits,
                max_width: MAX_DATA_BITS,
            });
        }
        Ok(Self::build(data_bits))
    }

    /// Builds a layout for a width already known to be within [`MAX_DATA_BITS`].
    pub(crate) fn build(data_bits: usize) -> Self {
        let mut parity_bits = 1;
        while (1usize << parity_bits) < data_bits + parity_bits + 1 {
            parity_bits += 1;
        }
        let total_bits = (1usize << parity_bits) - 1;

        let mut positions = Vec::with_capacity(total_bits);
        let mut group_masks = vec![0u128; parity_bits];
        let mut data_positions = Vec::with_capacity(total_bits - parity_bits);

        let mut next_power = 1;
        let mut next_group = 0;
        for index in 1..=total_bits {
            let parity_group = if index == next_power {
                let group = next_group;
                next_group += 1;
                next_power <<= 1;
                Some(group)
            } else {
                data_positions.push(index);
                None
            };

            for (group, mask) in group_masks.iter_mut().enumerate() {
                if (index >> group) & 1 == 1 {
                    *mask |= 1u128 << (index - 1);
                }
            }

            positions.push(BitPosition {
                index,
                digits: parity_bits,
                parity_group,
            });
        }

        debug!(
            "built Hamming layout: {} data bits, {} parity bits, {} total bits",
            data_bits, parity_bits, total_bits
        );

        Layout {
            data_bits,
            parity_bits,
            total_bits,
            positions,
            group_masks,
            data_positions,
        }
    }

    /// Width of the data unit this layout protects
    pub fn data_bits(&self) -> usize {
        self.data_bits
    }

    /// Number of parity bits (`k`)
    pub fn parity_bits(&self) -> usize {
        self.parity_bits
    }

    /// Codeword length, `2^k - 1`
    pub fn total_bits(&self) -> usize {
        self.total_bits
    }

    /// Number of non-parity positions; at least `data_bits`, the rest are zero padding
    pub fn capacity(&self) -> usize {
        self.data_positions.len()
    }

    /// All positions, ordered by index
    pub fn positions(&self) -> &[BitPosition] {
        &self.positions
    }

    /// Metadata for the 1-indexed `index`, if it lies inside the codeword
    pub fn position(&self, index: usize) -> Option<&BitPosition> {
        index.checked_sub(1).and_then(|i| self.positions.get(i))
    }

    /// Non-parity positions in increasing order
    pub fn data_positions(&self) -> &[usize] {
        &self.data_positions
    }

    /// Position holding the parity bit of `group` (`2^group`), if the layout has that group
    pub fn parity_position(&self, group: usize) -> Option<usize> {
        (group < self.parity_bits).then(|| 1 << group)
    }

    /// Coverage mask of `group`: bit `i - 1` is set for every covered position `i`
    pub fn group_mask(&self, group: usize) -> u128 {
        self.group_masks.get(group).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_layout_sizing() {
        let layout = Layout::new(7).unwrap();
        assert_eq!(layout.data_bits(), 7);
        assert_eq!(layout.parity_bits(), 4);
        assert_eq!(layout.total_bits(), 15);
        assert_eq!(layout.positions().len(), 15);
        assert_eq!(layout.capacity(), 11);
        assert_eq!(
            layout.data_positions(),
            &[3, 5, 6, 7, 9, 10, 11, 12, 13, 14, 15]
        );
    }

    #[test]
    fn test_parity_sizing_across_widths() {
        // (data bits, parity bits, total bits)
        let cases = [
            (0, 1, 1),
            (1, 2, 3),
            (4, 3, 7),
            (5, 4, 15),
            (11, 4, 15),
            (12, 5, 31),
            (26, 5, 31),
            (57, 6, 63),
            (58, 7, 127),
            (64, 7, 127),
        ];
        for (data_bits, parity_bits, total_bits) in cases {
            let layout = Layout::new(data_bits).unwrap();
            assert_eq!(layout.parity_bits(), parity_bits, "width {}", data_bits);
            assert_eq!(layout.total_bits(), total_bits, "width {}", data_bits);
            assert!(layout.capacity() >= data_bits);
        }
    }

    #[test]
    fn test_unsupported_width() {
        assert_eq!(
            Layout::new(65),
            Err(Error::UnsupportedWidth {
                width: 65,
                max_width: MAX_DATA_BITS
            })
        );
    }

    #[test]
    fn test_parity_positions_are_powers_of_two() {
        for data_bits in [1, 7, 20, 64] {
            let layout = Layout::new(data_bits).unwrap();
            let parity: Vec<(usize, Option<usize>)> = layout
                .positions()
                .iter()
                .filter(|p| p.is_parity())
                .map(|p| (p.index(), p.parity_group()))
                .collect();
            assert_eq!(parity.len(), layout.parity_bits());
            for (group, (index, parity_group)) in parity.into_iter().enumerate() {
                assert_eq!(index, 1 << group);
                assert_eq!(Some(index), layout.parity_position(group));
                assert_eq!(parity_group, Some(group));
            }
        }
    }

    #[test]
    fn test_parity_position_out_of_range() {
        let layout = Layout::new(7).unwrap();
        assert_eq!(layout.parity_position(3), Some(8));
        assert_eq!(layout.parity_position(4), None);
        assert_eq!(layout.parity_position(usize::BITS as usize), None);
        assert_eq!(layout.parity_position(usize::MAX), None);
    }

    #[test]
    fn test_binary_index_and_coverage() {
        let layout = Layout::new(7).unwrap();
        let five = layout.position(5).unwrap();
        assert_eq!(five.binary_index(), "0101");
        assert!(five.covered_by(0));
        assert!(!five.covered_by(1));
        assert!(five.covered_by(2));
        assert!(!five.covered_by(3));
        assert!(!five.covered_by(4));
        assert!(!five.is_parity());
        assert_eq!(five.parity_group(), None);

        let eight = layout.position(8).unwrap();
        assert_eq!(eight.binary_index(), "1000");
        assert_eq!(eight.parity_group(), Some(3));

        assert!(layout.position(0).is_none());
        assert!(layout.position(16).is_none());
    }

    #[test]
    fn test_group_masks_match_coverage() {
        // The classic (7,4) code checks positions 1,3,5,7 / 2,3,6,7 / 4,5,6,7.
        let layout = Layout::new(4).unwrap();
        assert_eq!(layout.group_mask(0), 0x55);
        assert_eq!(layout.group_mask(1), 0x66);
        assert_eq!(layout.group_mask(2), 0x78);
        assert_eq!(layout.group_mask(3), 0);

        let layout = Layout::new(7).unwrap();
        for group in 0..layout.parity_bits() {
            for position in layout.positions() {
                let in_mask = (layout.group_mask(group) >> (position.index() - 1)) & 1 == 1;
                assert_eq!(in_mask, position.covered_by(group));
            }
        }
    }
}
