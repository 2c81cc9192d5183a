//! Decision loop driving the search under an external deadline.
//!
//! [`Agent::decide`] publishes move reports on the anytime channel until it
//! runs out of depth or the host cancels. The host reads the latest report
//! whenever its deadline expires.

use std::any::Any;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, trace};

use crate::cell::Cell;
use crate::constants::{BASELINE_DEPTH, MAX_DEPTH, OPENING_RANDOM_PLIES};
use crate::eval::Evaluator;
use crate::position::Position;
use crate::report::{Report, ReportSender};
use crate::search::search_context::SearchContext;
use crate::search::search_root;
use crate::types::{Depth, Score};

/// How deep the agent searches once past the opening.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    /// A single search at the given depth.
    Fixed(Depth),
    /// Depth 1, 2, 3, ... up to `max_depth`, publishing after each depth.
    Iterative { max_depth: Depth },
}

impl SearchMode {
    /// Fixed-depth mode used as the comparison baseline.
    pub const fn baseline() -> SearchMode {
        SearchMode::Fixed(BASELINE_DEPTH)
    }
}

impl Default for SearchMode {
    fn default() -> Self {
        SearchMode::Iterative {
            max_depth: MAX_DEPTH,
        }
    }
}

/// Agent configuration.
#[derive(Clone, Copy, Debug)]
pub struct AgentOptions {
    pub evaluator: Evaluator,
    pub mode: SearchMode,
    /// Plies from the start of the game played by a uniformly random pick.
    pub opening_random_plies: u32,
    /// Seed for the opening picks. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl AgentOptions {
    #[must_use]
    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_opening_random_plies(mut self, plies: u32) -> Self {
        self.opening_random_plies = plies;
        self
    }

    /// Fix the opening picks so that games can be replayed.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for AgentOptions {
    fn default() -> Self {
        AgentOptions {
            evaluator: Evaluator::default(),
            mode: SearchMode::default(),
            opening_random_plies: OPENING_RANDOM_PLIES,
            seed: None,
        }
    }
}

/// State threaded by the caller from one decision to the next.
#[derive(Debug, Default)]
pub struct AgentContext {
    /// Free slot for callers that want to persist data between turns.
    pub carry: Option<Box<dyn Any + Send>>,
    /// Number of decisions taken with this context.
    pub turns: u32,
    /// Deepest completed search depth of the last decision.
    pub last_depth: Depth,
}

/// Isolation playing agent.
pub struct Agent {
    options: AgentOptions,
    rng: StdRng,
}

impl Agent {
    pub fn new(options: AgentOptions) -> Agent {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Agent { options, rng }
    }

    /// Chooses a move for the side to move of `position`.
    ///
    /// Every answer is published on `reporter`; the last report published
    /// before cancellation is the decision. Nothing is published for a
    /// terminal position.
    pub fn decide<P: Position>(
        &mut self,
        position: &P,
        ctx: &mut AgentContext,
        reporter: &ReportSender,
    ) {
        debug_assert!(!position.is_terminal(), "decide called on a terminal position");

        let moves = position.legal_moves();
        let Some(first_move) = moves.first() else {
            return;
        };
        ctx.turns += 1;
        ctx.last_depth = 0;

        if position.ply_count() < self.options.opening_random_plies {
            let mv = moves
                .as_slice()
                .choose(&mut self.rng)
                .copied()
                .unwrap_or(first_move);
            trace!(ply = position.ply_count(), %mv, "random opening move");
            reporter.publish(unsearched_report(mv));
            return;
        }

        // Something valid to read before the first depth completes.
        reporter.publish(unsearched_report(first_move));

        let player = position.side_to_move();
        let mut search_ctx =
            SearchContext::new(self.options.evaluator).with_abort(reporter.cancel_flag());
        let depths = match self.options.mode {
            SearchMode::Fixed(depth) => depth..=depth,
            SearchMode::Iterative { max_depth } => 1..=max_depth,
        };

        for depth in depths {
            if reporter.is_cancelled() {
                break;
            }

            let result = search_root(&mut search_ctx, position, player, depth);
            if search_ctx.is_aborted() {
                trace!(depth, "search cancelled, discarding partial iteration");
                break;
            }
            let Some(report) = result.to_report() else {
                break;
            };

            reporter.publish(report);
            ctx.last_depth = depth;
            debug!(
                depth,
                best_move = %report.best_move,
                score = %report.score,
                n_nodes = report.n_nodes,
                n_evals = result.n_evals,
                "search iteration complete"
            );

            let proven =
                result.score.is_proven() && self.options.evaluator.shortcuts_are_exact();
            if proven || result.n_evals == 0 {
                break;
            }
        }

        debug!(
            turn = ctx.turns,
            ply = position.ply_count(),
            depth = ctx.last_depth,
            n_nodes = search_ctx.n_nodes,
            "decision finished"
        );
    }
}

fn unsearched_report(best_move: Cell) -> Report {
    Report {
        best_move,
        score: Score::ZERO,
        depth: 0,
        n_nodes: 0,
    }
}
