//! Fixed-capacity list of moves.

use arrayvec::ArrayVec;

use crate::bitboard::Bitboard;
use crate::cell::Cell;
use crate::constants::MAX_MOVES;

/// Container for the legal moves (destination cells) of a position.
///
/// Order is the generation order of the producing [`Position`](crate::position::Position)
/// and is preserved, so searches over the same list are reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: ArrayVec<Cell, MAX_MOVES>,
}

impl MoveList {
    /// Creates an empty move list.
    #[inline]
    pub fn new() -> MoveList {
        MoveList {
            moves: ArrayVec::new(),
        }
    }

    /// Creates a move list holding every cell of `cells`, lowest index first.
    pub fn from_bitboard(cells: Bitboard) -> MoveList {
        cells.iter().collect()
    }

    /// Appends a move.
    #[inline]
    pub fn push(&mut self, cell: Cell) {
        debug_assert!(self.moves.len() < self.moves.capacity());
        self.moves.push(cell);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn count(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` if there are no moves.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Checks whether `cell` is one of the moves.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.moves.contains(&cell)
    }

    /// Returns the first move, if any.
    #[inline]
    pub fn first(&self) -> Option<Cell> {
        self.moves.first().copied()
    }

    /// Returns the moves as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Cell] {
        &self.moves
    }

    /// Returns an iterator over the moves in generation order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.moves.iter().copied()
    }
}

impl FromIterator<Cell> for MoveList {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut list = MoveList::new();
        for cell in iter {
            list.push(cell);
        }
        list
    }
}

impl IntoIterator for MoveList {
    type Item = Cell;
    type IntoIter = arrayvec::IntoIter<Cell, MAX_MOVES>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_insertion_order() {
        let a = Cell::from_xy(4, 4).unwrap();
        let b = Cell::from_xy(0, 0).unwrap();
        let list: MoveList = [a, b].into_iter().collect();
        assert_eq!(list.as_slice(), &[a, b]);
        assert_eq!(list.first(), Some(a));
        assert!(list.contains(b));
        assert_eq!(list.count(), 2);
    }

    #[test]
    fn test_from_bitboard_is_ascending() {
        let list = MoveList::from_bitboard(Bitboard::playable());
        assert_eq!(list.count(), MAX_MOVES);
        assert!(list.as_slice().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty() {
        let list = MoveList::new();
        assert!(list.is_empty());
        assert_eq!(list.first(), None);
        assert_eq!(list.into_iter().count(), 0);
    }
}
