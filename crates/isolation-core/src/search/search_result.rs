//! Search result types.

use crate::cell::Cell;
use crate::report::Report;
use crate::types::{Depth, Score};

/// Result of a search operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchResult {
    /// Chosen root move. `None` when the root was not expanded: terminal
    /// position or depth 0.
    pub best_move: Option<Cell>,
    pub score: Score,
    pub depth: Depth,
    pub n_nodes: u64,
    pub n_evals: u64,
}

impl SearchResult {
    /// Converts the result into a report for the anytime channel.
    pub fn to_report(&self) -> Option<Report> {
        self.best_move.map(|best_move| Report {
            best_move,
            score: self.score,
            depth: self.depth,
            n_nodes: self.n_nodes,
        })
    }
}
