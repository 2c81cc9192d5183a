//! Reference knight's Isolation board.
//!
//! Two tokens move with knight steps on an 11x9 grid. The first two plies are
//! free placements on any open cell; every cell a token enters stays blocked
//! for the rest of the game.

use std::fmt;

use thiserror::Error;

use crate::bitboard::Bitboard;
use crate::cell::{Cell, KNIGHT_OFFSETS};
use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::move_list::MoveList;
use crate::player::Player;
use crate::position::Position;
use crate::types::Score;

/// Character of an open cell in the text format.
const OPEN_CHAR: char = '.';

/// Character of a blocked cell in the text format.
const BLOCKED_CHAR: char = '#';

/// Errors produced when parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected {expected} rows, found {found}", expected = BOARD_HEIGHT)]
    RowCount { found: usize },
    #[error("row {row} has {found} cells, expected {expected}", expected = BOARD_WIDTH)]
    RowWidth { row: usize, found: usize },
    #[error("invalid character '{ch}' at row {row}, column {column}")]
    InvalidChar { ch: char, row: usize, column: usize },
    #[error("token of {0:?} appears more than once")]
    DuplicateToken(Player),
    #[error("token of {player:?} must be placed after {ply_count} plies")]
    MissingToken { player: Player, ply_count: u32 },
    #[error("token of {player:?} cannot be placed after only {ply_count} plies")]
    UnexpectedToken { player: Player, ply_count: u32 },
}

/// An Isolation position.
///
/// `open` holds the cells no token has entered. Cells under the tokens are
/// blocked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    open: Bitboard,
    locations: [Option<Cell>; 2],
    ply_count: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates the empty starting board.
    pub fn new() -> Board {
        Board {
            open: Bitboard::playable(),
            locations: [None, None],
            ply_count: 0,
        }
    }

    /// Parses a board from its text form.
    ///
    /// The text holds one line per row, `y = 0` first. `.` is an open cell,
    /// `#` a blocked one, `1` and `2` the tokens of [`Player::First`] and
    /// [`Player::Second`]. Blank lines and surrounding whitespace are ignored.
    ///
    /// # Arguments
    ///
    /// * `text` - The board rows.
    /// * `ply_count` - Number of plies already played; its parity decides the
    ///   side to move.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if the layout is malformed or the placed tokens
    /// do not match `ply_count`.
    pub fn from_string(text: &str, ply_count: u32) -> Result<Board, BoardError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != BOARD_HEIGHT {
            return Err(BoardError::RowCount { found: rows.len() });
        }

        let mut open = Bitboard::default();
        let mut locations = [None, None];
        for (y, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != BOARD_WIDTH {
                return Err(BoardError::RowWidth { row: y, found: width });
            }
            for (x, ch) in row.chars().enumerate() {
                let Some(cell) = Cell::from_xy(x, y) else {
                    unreachable!("row width was checked");
                };
                match ch {
                    OPEN_CHAR => open = open.set(cell),
                    BLOCKED_CHAR => {}
                    _ => {
                        let player = Player::ALL
                            .into_iter()
                            .find(|p| p.to_char() == ch)
                            .ok_or(BoardError::InvalidChar { ch, row: y, column: x })?;
                        if locations[player.index()].replace(cell).is_some() {
                            return Err(BoardError::DuplicateToken(player));
                        }
                    }
                }
            }
        }

        for player in Player::ALL {
            // First has placed after ply 1, Second after ply 2.
            let placed = ply_count > player.index() as u32;
            match (placed, locations[player.index()]) {
                (true, None) => return Err(BoardError::MissingToken { player, ply_count }),
                (false, Some(_)) => return Err(BoardError::UnexpectedToken { player, ply_count }),
                _ => {}
            }
        }

        Ok(Board {
            open,
            locations,
            ply_count,
        })
    }

    /// Returns the set of open cells.
    #[inline]
    pub fn open_cells(&self) -> Bitboard {
        self.open
    }

    /// Returns the open cells reachable from `location` as a bitboard.
    #[inline]
    pub fn liberty_bits(&self, location: Option<Cell>) -> Bitboard {
        match location {
            None => self.open,
            Some(loc) => {
                let mut targets = Bitboard::default();
                for offset in KNIGHT_OFFSETS {
                    if let Some(target) = loc.offset(offset) {
                        targets = targets.set(target);
                    }
                }
                targets & self.open
            }
        }
    }

    /// Checks whether `player` could move if it were its turn.
    #[inline]
    pub fn has_liberties(&self, player: Player) -> bool {
        !self.liberty_bits(self.locations[player.index()]).is_empty()
    }

    /// Returns the winner of a finished game.
    pub fn winner(&self) -> Option<Player> {
        if self.is_terminal() {
            Some(self.side_to_move().opponent())
        } else {
            None
        }
    }
}

impl Position for Board {
    fn legal_moves(&self) -> MoveList {
        self.liberties(self.locations[self.side_to_move().index()])
    }

    fn apply(&self, mv: Cell) -> Board {
        debug_assert!(
            self.legal_moves().contains(mv),
            "illegal move {mv} at ply {}",
            self.ply_count
        );
        let mut locations = self.locations;
        locations[self.side_to_move().index()] = Some(mv);
        Board {
            open: self.open.remove(mv),
            locations,
            ply_count: self.ply_count + 1,
        }
    }

    #[inline]
    fn is_terminal(&self) -> bool {
        !self.has_liberties(self.side_to_move())
    }

    fn outcome(&self, player: Player) -> Score {
        if !self.is_terminal() {
            return Score::ZERO;
        }
        if player == self.side_to_move() {
            Score::LOSS
        } else {
            Score::WIN
        }
    }

    fn liberties(&self, location: Option<Cell>) -> MoveList {
        match location {
            None => MoveList::from_bitboard(self.open),
            Some(loc) => KNIGHT_OFFSETS
                .iter()
                .filter_map(|&offset| loc.offset(offset))
                .filter(|&target| self.open.contains(target))
                .collect(),
        }
    }

    #[inline]
    fn location(&self, player: Player) -> Option<Cell> {
        self.locations[player.index()]
    }

    #[inline]
    fn ply_count(&self) -> u32 {
        self.ply_count
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let Some(cell) = Cell::from_xy(x, y) else {
                    continue;
                };
                let ch = Player::ALL
                    .into_iter()
                    .find(|p| self.locations[p.index()] == Some(cell))
                    .map(Player::to_char)
                    .unwrap_or(if self.open.contains(cell) {
                        OPEN_CHAR
                    } else {
                        BLOCKED_CHAR
                    });
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BOARD_CELLS;

    fn cell(name: &str) -> Cell {
        name.parse().unwrap()
    }

    #[test]
    fn test_new_board_allows_any_placement() {
        let board = Board::new();
        assert_eq!(board.legal_moves().count(), BOARD_CELLS);
        assert_eq!(board.side_to_move(), Player::First);
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_placement_blocks_cell() {
        let board = Board::new().apply(cell("c2"));
        assert_eq!(board.location(Player::First), Some(cell("c2")));
        assert_eq!(board.side_to_move(), Player::Second);

        let moves = board.legal_moves();
        assert_eq!(moves.count(), BOARD_CELLS - 1);
        assert!(!moves.contains(cell("c2")));
    }

    #[test]
    fn test_knight_moves_from_corner_do_not_wrap() {
        // a1 and k1, both corners of the first row.
        let board = Board::new().apply(cell("a1")).apply(cell("k1"));
        assert_eq!(board.legal_moves().as_slice(), &[cell("b3"), cell("c2")]);
        assert_eq!(
            board.liberties(Some(cell("k1"))).as_slice(),
            &[cell("i2"), cell("j3")]
        );
    }

    #[test]
    fn test_knight_moves_from_edges_do_not_wrap() {
        let board = Board::new().apply(cell("a5")).apply(cell("k5"));
        for mv in board.liberties(Some(cell("a5"))).iter() {
            assert!(mv.x() <= 2, "{mv} wrapped from a5");
        }
        for mv in board.liberties(Some(cell("k5"))).iter() {
            assert!(mv.x() >= 8, "{mv} wrapped from k5");
        }
        assert_eq!(board.liberties(Some(cell("a5"))).count(), 4);
        assert_eq!(board.liberties(Some(cell("k5"))).count(), 4);
    }

    #[test]
    fn test_apply_does_not_mutate() {
        let board = Board::new().apply(cell("e5")).apply(cell("f5"));
        let before = board;
        let next = board.apply(board.legal_moves().first().unwrap());
        assert_eq!(board, before);
        assert_ne!(next, board);
        assert_eq!(next.ply_count(), board.ply_count() + 1);
    }

    #[test]
    fn test_visited_cells_stay_blocked() {
        let board = Board::new().apply(cell("e5")).apply(cell("a1"));
        let next = board.apply(cell("f7"));
        assert!(!next.open_cells().contains(cell("e5")));
        assert!(!next.open_cells().contains(cell("f7")));
        assert!(!next.liberties(Some(cell("c6"))).contains(cell("e5")));
    }

    #[test]
    fn test_terminal_and_outcome() {
        let board = Board::from_string(
            "
            1##########
            ###########
            ###########
            ###########
            ########2##
            ##########.
            ###########
            ###########
            ###########
            ",
            10,
        )
        .unwrap();
        assert!(board.is_terminal());
        assert_eq!(board.outcome(Player::First), Score::LOSS);
        assert_eq!(board.outcome(Player::Second), Score::WIN);
        assert_eq!(board.winner(), Some(Player::Second));
        assert!(board.has_liberties(Player::Second));
    }

    #[test]
    fn test_outcome_of_running_game_is_neutral() {
        let board = Board::new().apply(cell("e5"));
        assert_eq!(board.outcome(Player::First), Score::ZERO);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_text_round_trip() {
        let board = Board::new()
            .apply(cell("e5"))
            .apply(cell("a1"))
            .apply(cell("f7"));
        let parsed = Board::from_string(&board.to_string(), board.ply_count()).unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Board::from_string("...........", 0),
            Err(BoardError::RowCount { found: 1 })
        );

        let short_row = format!("{}\n{}", "..........", "...........\n".repeat(8));
        assert_eq!(
            Board::from_string(&short_row, 0),
            Err(BoardError::RowWidth { row: 0, found: 10 })
        );

        let bad_char = format!("{}\n{}", "....x......", "...........\n".repeat(8));
        assert_eq!(
            Board::from_string(&bad_char, 0),
            Err(BoardError::InvalidChar { ch: 'x', row: 0, column: 4 })
        );

        let two_tokens = format!("{}\n{}", "1.........1", "...........\n".repeat(8));
        assert_eq!(
            Board::from_string(&two_tokens, 1),
            Err(BoardError::DuplicateToken(Player::First))
        );

        let one_token = format!("{}\n{}", "1..........", "...........\n".repeat(8));
        assert_eq!(
            Board::from_string(&one_token, 2),
            Err(BoardError::MissingToken { player: Player::Second, ply_count: 2 })
        );
        assert_eq!(
            Board::from_string(&one_token, 0),
            Err(BoardError::UnexpectedToken { player: Player::First, ply_count: 0 })
        );
        assert!(Board::from_string(&one_token, 1).is_ok());
    }
}
