//! Bitboard operations and types.
//!
//! This module provides a [`Bitboard`] type that represents a set of Isolation
//! cells using a single `u128`, where bit `i` corresponds to [`Cell`] index `i`
//! in the padded layout.

use crate::cell::Cell;
use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH, ROW_STRIDE};

/// Mask of every playable cell (padding columns excluded).
const PLAYABLE_MASK: u128 = {
    let mut mask = 0u128;
    let mut y = 0;
    while y < BOARD_HEIGHT {
        let mut x = 0;
        while x < BOARD_WIDTH {
            mask |= 1u128 << (x + y * ROW_STRIDE);
            x += 1;
        }
        y += 1;
    }
    mask
};

/// Newtype wrapper for a 128-bit cell set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Bitboard(u128);

impl Bitboard {
    /// Returns the set of all playable cells.
    #[inline(always)]
    pub const fn playable() -> Self {
        Bitboard(PLAYABLE_MASK)
    }

    /// Returns a new bitboard with the given cell added.
    #[inline(always)]
    pub const fn set(self, cell: Cell) -> Self {
        Bitboard(self.0 | cell.bit())
    }

    /// Returns a new bitboard with the given cell removed.
    #[inline(always)]
    pub const fn remove(self, cell: Cell) -> Self {
        Bitboard(self.0 & !cell.bit())
    }

    /// Checks if the bitboard contains the given cell.
    #[inline(always)]
    pub const fn contains(self, cell: Cell) -> bool {
        self.0 & cell.bit() != 0
    }

    /// Checks if the bitboard has no bits set.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns an iterator over the cells in ascending index order.
    #[inline]
    pub fn iter(self) -> BitboardIterator {
        BitboardIterator { bits: self.0 }
    }
}

/// Iterator over the cells of a [`Bitboard`], lowest index first.
pub struct BitboardIterator {
    bits: u128,
}

impl Iterator for BitboardIterator {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(Cell::from_index_unchecked(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIterator {}

impl std::ops::BitAnd for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}
