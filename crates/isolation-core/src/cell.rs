use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{BOARD_BITS, BOARD_HEIGHT, BOARD_WIDTH, ROW_STRIDE};

/// Knight step offsets in the padded bit layout.
///
/// Listed in move-generation order: NNE, ENE, ESE, SSE, SSW, WSW, WNW, NNW.
pub const KNIGHT_OFFSETS: [i32; 8] = [
    2 * ROW_STRIDE as i32 + 1,
    ROW_STRIDE as i32 + 2,
    -(ROW_STRIDE as i32) + 2,
    -2 * (ROW_STRIDE as i32) + 1,
    -2 * (ROW_STRIDE as i32) - 1,
    -(ROW_STRIDE as i32) - 2,
    ROW_STRIDE as i32 - 2,
    2 * ROW_STRIDE as i32 - 1,
];

/// A cell of the Isolation board.
///
/// Cells are indexed in a padded layout so that every knight step is a plain
/// integer offset:
///
/// ```text
///       a  b  c  d  e  f  g  h  i  j  k  (pad)
///   1   0  1  2  3  4  5  6  7  8  9 10  11 12
///   2  13 14 15 16 17 18 19 20 21 22 23  24 25
///   ...
///   9 104 ...                       114
/// ```
///
/// A move is identified by its destination cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Cell(u8);

/// Errors produced when parsing a cell from algebraic notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCellError {
    #[error("invalid cell format: expected a column letter and a row number (e.g. 'c4')")]
    InvalidFormat,
    #[error("invalid column '{0}': must be a-k")]
    InvalidColumn(char),
    #[error("invalid row '{0}': must be 1-9")]
    InvalidRow(char),
}

impl Cell {
    /// Creates a cell from board coordinates.
    ///
    /// # Returns
    ///
    /// `None` if the coordinates are outside the 11x9 playing area.
    #[inline]
    pub const fn from_xy(x: usize, y: usize) -> Option<Cell> {
        if x < BOARD_WIDTH && y < BOARD_HEIGHT {
            Some(Cell((x + y * ROW_STRIDE) as u8))
        } else {
            None
        }
    }

    /// Creates a cell from a raw index without checking that it is playable.
    #[inline(always)]
    pub const fn from_index_unchecked(index: usize) -> Cell {
        debug_assert!(index < BOARD_BITS);
        Cell(index as u8)
    }

    /// Returns the raw index in the padded layout.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the column (0 = a).
    #[inline]
    pub const fn x(self) -> usize {
        self.0 as usize % ROW_STRIDE
    }

    /// Returns the row (0 = 1).
    #[inline]
    pub const fn y(self) -> usize {
        self.0 as usize / ROW_STRIDE
    }

    /// Returns the single-bit mask of this cell.
    #[inline(always)]
    pub const fn bit(self) -> u128 {
        1u128 << self.0
    }

    /// Returns the cell reached by adding `offset`, if it lies in the bit layout.
    ///
    /// The result may be a padding cell; padding is never open on a board, so
    /// callers filter through the open set.
    #[inline]
    pub const fn offset(self, offset: i32) -> Option<Cell> {
        let target = self.0 as i32 + offset;
        if target >= 0 && (target as usize) < BOARD_BITS {
            Some(Cell(target as u8))
        } else {
            None
        }
    }

    /// Iterates over all playable cells in index order.
    pub fn iter() -> impl Iterator<Item = Cell> {
        (0..BOARD_HEIGHT)
            .flat_map(|y| (0..BOARD_WIDTH).map(move |x| Cell((x + y * ROW_STRIDE) as u8)))
    }
}

impl FromStr for Cell {
    type Err = ParseCellError;

    /// Parses a cell in algebraic notation (e.g. "a1", "k9").
    ///
    /// Both uppercase and lowercase column letters are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let (Some(column_char), Some(row_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseCellError::InvalidFormat);
        };

        let column = column_char.to_ascii_lowercase();
        if !('a'..='k').contains(&column) {
            return Err(ParseCellError::InvalidColumn(column_char));
        }
        if !('1'..='9').contains(&row_char) {
            return Err(ParseCellError::InvalidRow(row_char));
        }

        let x = (column as u8 - b'a') as usize;
        let y = (row_char as u8 - b'1') as usize;
        Cell::from_xy(x, y).ok_or(ParseCellError::InvalidFormat)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let column = (self.x() as u8 + b'a') as char;
        let row = (self.y() as u8 + b'1') as char;
        write!(f, "{column}{row}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BOARD_CELLS;

    #[test]
    fn test_from_xy() {
        assert_eq!(Cell::from_xy(0, 0).map(Cell::index), Some(0));
        assert_eq!(Cell::from_xy(10, 0).map(Cell::index), Some(10));
        assert_eq!(Cell::from_xy(0, 1).map(Cell::index), Some(13));
        assert_eq!(Cell::from_xy(10, 8).map(Cell::index), Some(114));
        assert_eq!(Cell::from_xy(11, 0), None);
        assert_eq!(Cell::from_xy(0, 9), None);
    }

    #[test]
    fn test_coordinates() {
        let cell = Cell::from_xy(7, 5).unwrap();
        assert_eq!(cell.x(), 7);
        assert_eq!(cell.y(), 5);
    }

    #[test]
    fn test_iter() {
        let cells: Vec<Cell> = Cell::iter().collect();
        assert_eq!(cells.len(), BOARD_CELLS);
        assert_eq!(cells[0], Cell::from_xy(0, 0).unwrap());
        assert_eq!(cells[11], Cell::from_xy(0, 1).unwrap());
        assert!(cells.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_knight_offsets_match_coordinates() {
        let center = Cell::from_xy(5, 4).unwrap();
        let expected = [(6, 6), (7, 5), (7, 3), (6, 2), (4, 2), (3, 3), (3, 5), (4, 6)];
        for (offset, (x, y)) in KNIGHT_OFFSETS.iter().zip(expected) {
            let target = center.offset(*offset).unwrap();
            assert_eq!((target.x(), target.y()), (x, y));
        }
    }

    #[test]
    fn test_offset_out_of_layout() {
        let corner = Cell::from_xy(0, 0).unwrap();
        assert_eq!(corner.offset(-1), None);
        let last = Cell::from_xy(10, 8).unwrap();
        assert_eq!(last.offset(1), None);
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!("a1".parse::<Cell>(), Ok(Cell::from_xy(0, 0).unwrap()));
        assert_eq!("K9".parse::<Cell>(), Ok(Cell::from_xy(10, 8).unwrap()));
        assert_eq!(" b3 ".parse::<Cell>(), Ok(Cell::from_xy(1, 2).unwrap()));
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!("".parse::<Cell>(), Err(ParseCellError::InvalidFormat));
        assert_eq!("a10".parse::<Cell>(), Err(ParseCellError::InvalidFormat));
        assert_eq!("l1".parse::<Cell>(), Err(ParseCellError::InvalidColumn('l')));
        assert_eq!("a0".parse::<Cell>(), Err(ParseCellError::InvalidRow('0')));
    }

    #[test]
    fn test_display_round_trip() {
        for cell in Cell::iter() {
            assert_eq!(cell.to_string().parse::<Cell>(), Ok(cell));
        }
    }
}
