//! Search context for maintaining state during game tree search.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::eval::Evaluator;
use crate::player::Player;
use crate::position::Position;
use crate::types::Score;

/// State shared by every node of a search.
pub struct SearchContext {
    /// Number of nodes entered in this context
    pub n_nodes: u64,
    /// Number of evaluator calls in this context
    pub n_evals: u64,
    evaluator: Evaluator,
    /// Raised by the host to stop the search
    abort: Option<Arc<AtomicBool>>,
}

impl SearchContext {
    /// Creates a context that never observes cancellation.
    pub fn new(evaluator: Evaluator) -> SearchContext {
        SearchContext {
            n_nodes: 0,
            n_evals: 0,
            evaluator,
            abort: None,
        }
    }

    /// Makes the search unwind once `flag` is set.
    #[must_use]
    pub fn with_abort(mut self, flag: Arc<AtomicBool>) -> SearchContext {
        self.abort = Some(flag);
        self
    }

    /// Returns `true` once the cancellation flag is raised.
    ///
    /// Results of a search that was aborted are incomplete and must be discarded.
    #[inline]
    pub fn is_aborted(&self) -> bool {
        self.abort
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn increment_nodes(&mut self) {
        self.n_nodes += 1;
    }

    /// Evaluates a non-terminal position for `player` and counts the call.
    #[inline]
    pub fn evaluate<P: Position>(&mut self, position: &P, player: Player) -> Score {
        self.n_evals += 1;
        self.evaluator.evaluate(position, player)
    }
}
