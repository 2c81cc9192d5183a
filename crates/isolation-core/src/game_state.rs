//! Game state management for Isolation.
//!
//! This module provides the `GameState` struct which wraps a [`Board`] with
//! move validation, history tracking and undo.

use thiserror::Error;

use crate::board::Board;
use crate::cell::Cell;
use crate::player::Player;
use crate::position::Position;

/// Errors produced when playing a move through [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move: {0}")]
    IllegalMove(Cell),
    #[error("the game is already over")]
    GameOver,
}

/// Represents the state of an Isolation game.
#[derive(Clone, Debug, Default)]
pub struct GameState {
    /// The current board position.
    board: Board,
    /// Move history: (move, board_before_move).
    history: Vec<(Cell, Board)>,
}

impl GameState {
    /// Creates a new game on the empty board.
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Creates a new game state from an existing board position.
    ///
    /// This is useful for setting up specific positions for analysis.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns which player's turn it is to move.
    pub fn side_to_move(&self) -> Player {
        self.board.side_to_move()
    }

    /// Executes a move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] if the side to move has no legal move,
    /// or [`GameError::IllegalMove`] if `cell` is not one of its legal moves.
    pub fn make_move(&mut self, cell: Cell) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if !self.board.legal_moves().contains(cell) {
            return Err(GameError::IllegalMove(cell));
        }

        self.history.push((cell, self.board));
        self.board = self.board.apply(cell);
        Ok(())
    }

    /// Checks if the game has ended (the side to move cannot move).
    pub fn is_game_over(&self) -> bool {
        self.board.is_terminal()
    }

    /// Returns the winner once the game is over.
    pub fn winner(&self) -> Option<Player> {
        self.board.winner()
    }

    /// Returns the last move played, if any.
    pub fn last_move(&self) -> Option<Cell> {
        self.history.last().map(|(cell, _)| *cell)
    }

    /// Returns the moves played so far, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = Cell> + '_ {
        self.history.iter().map(|(cell, _)| *cell)
    }

    /// Undoes the last move if possible.
    ///
    /// # Returns
    ///
    /// `true` if a move was undone, `false` if there are no moves to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some((_, prev_board)) => {
                self.board = prev_board;
                true
            }
            None => false,
        }
    }
}
