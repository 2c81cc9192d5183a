//! The game-state contract consumed by the evaluator, the search and the agent.

use crate::cell::Cell;
use crate::move_list::MoveList;
use crate::player::Player;
use crate::types::Score;

/// Read-only view of an Isolation position.
///
/// Implementations are immutable values: [`Position::apply`] returns the
/// successor and leaves `self` untouched. The move order of
/// [`Position::legal_moves`] must be stable, since the search breaks ties by
/// exploration order.
pub trait Position: Sized {
    /// Returns the legal moves of the side to move.
    fn legal_moves(&self) -> MoveList;

    /// Returns the position after the side to move plays `mv`.
    fn apply(&self, mv: Cell) -> Self;

    /// Returns `true` when the side to move has no legal move.
    fn is_terminal(&self) -> bool;

    /// Returns the exact result for `player`: [`Score::WIN`] or [`Score::LOSS`].
    ///
    /// Only meaningful on terminal positions.
    fn outcome(&self, player: Player) -> Score;

    /// Returns the open cells a token standing on `location` could move to.
    ///
    /// `None` stands for a token that has not been placed yet, which may go to
    /// any open cell.
    fn liberties(&self, location: Option<Cell>) -> MoveList;

    /// Returns the cell `player`'s token stands on, if placed.
    fn location(&self, player: Player) -> Option<Cell>;

    /// Returns the number of plies played so far.
    fn ply_count(&self) -> u32;

    /// Returns the side to move.
    #[inline]
    fn side_to_move(&self) -> Player {
        Player::from_ply(self.ply_count())
    }
}
