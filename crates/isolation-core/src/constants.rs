//! Global constants

use crate::types::Depth;

/// Number of playable columns.
pub const BOARD_WIDTH: usize = 11;

/// Number of playable rows.
pub const BOARD_HEIGHT: usize = 9;

/// Distance between vertically adjacent cells in the bit layout.
///
/// Each row carries two permanently blocked padding columns so that a knight
/// step off either edge lands on a blocked bit instead of wrapping.
pub const ROW_STRIDE: usize = BOARD_WIDTH + 2;

/// Number of bit positions spanned by the board, padding included.
pub const BOARD_BITS: usize = ROW_STRIDE * BOARD_HEIGHT - 2;

/// Number of playable cells.
pub const BOARD_CELLS: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Upper bound on the number of legal moves from any position.
pub const MAX_MOVES: usize = BOARD_CELLS;

/// Number of plies at the start of a game that are decided without search.
pub const OPENING_RANDOM_PLIES: u32 = 2;

/// Depth used by the fixed-depth baseline agent.
pub const BASELINE_DEPTH: Depth = 3;

/// Deepest iteration attempted by iterative deepening.
pub const MAX_DEPTH: Depth = BOARD_CELLS as Depth;
