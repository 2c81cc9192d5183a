//! Game tree search engine.
//!
//! [`search_root`] runs a fail-soft alpha-beta minimax to a fixed depth.
//! [`minimax`] explores the same tree without pruning and serves as the
//! reference the pruned search must agree with.

pub mod node_type;
pub mod search_context;
pub mod search_result;

use crate::player::Player;
use crate::position::Position;
use crate::search::node_type::{Min, NodeType};
use crate::search::search_context::SearchContext;
use crate::search::search_result::SearchResult;
use crate::types::{Depth, Score};

/// Searches `position` to `depth` plies for the maximizing `player`.
///
/// Ties between root moves go to the move explored last. Every root child is
/// searched with a lower bound just below the best value so far, so a child
/// can only take over the best move with an exact value and the result equals
/// that of [`minimax`].
///
/// If the context gets aborted, the loop stops early and the returned result
/// is incomplete. Callers check [`SearchContext::is_aborted`] before using it.
pub fn search_root<P: Position>(
    ctx: &mut SearchContext,
    position: &P,
    player: Player,
    depth: Depth,
) -> SearchResult {
    let n_nodes = ctx.n_nodes;
    let n_evals = ctx.n_evals;
    let (best_move, score) = match leaf_score(ctx, position, player, depth) {
        Some(score) => (None, score),
        None => {
            let mut best_move = None;
            let mut best_score = Score::LOSS;
            let mut alpha = Score::LOSS;
            for mv in position.legal_moves() {
                let child = position.apply(mv);
                let score = search::<Min, P>(
                    ctx,
                    &child,
                    player,
                    depth - 1,
                    alpha.just_below(),
                    Score::WIN,
                );
                if ctx.is_aborted() {
                    break;
                }
                if score >= best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            }
            (best_move, best_score)
        }
    };

    SearchResult {
        best_move,
        score,
        depth,
        n_nodes: ctx.n_nodes - n_nodes,
        n_evals: ctx.n_evals - n_evals,
    }
}

/// Fail-soft alpha-beta search of a non-root node.
///
/// Returns the value of `position` for `player`. A value inside
/// `(alpha, beta)` is exact; a value at or below `alpha` is an upper bound and
/// a value at or above `beta` a lower bound.
pub fn search<NT: NodeType, P: Position>(
    ctx: &mut SearchContext,
    position: &P,
    player: Player,
    depth: Depth,
    mut alpha: Score,
    mut beta: Score,
) -> Score {
    if ctx.is_aborted() {
        return Score::ZERO;
    }
    if let Some(score) = leaf_score(ctx, position, player, depth) {
        return score;
    }

    let mut best_score = if NT::MAX_NODE { Score::LOSS } else { Score::WIN };
    for mv in position.legal_moves() {
        let child = position.apply(mv);
        let score = search::<NT::Child, P>(ctx, &child, player, depth - 1, alpha, beta);
        if NT::MAX_NODE {
            best_score = best_score.max(score);
            if best_score >= beta {
                return best_score;
            }
            alpha = alpha.max(best_score);
        } else {
            best_score = best_score.min(score);
            if best_score <= alpha {
                return best_score;
            }
            beta = beta.min(best_score);
        }
    }

    best_score
}

/// Exhaustive minimax to `depth` plies with the same root tie-break as
/// [`search_root`].
pub fn minimax<P: Position>(
    ctx: &mut SearchContext,
    position: &P,
    player: Player,
    depth: Depth,
) -> SearchResult {
    let n_nodes = ctx.n_nodes;
    let n_evals = ctx.n_evals;
    let (best_move, score) = match leaf_score(ctx, position, player, depth) {
        Some(score) => (None, score),
        None => {
            let mut best_move = None;
            let mut best_score = Score::LOSS;
            for mv in position.legal_moves() {
                let score = minimax_value::<Min, P>(ctx, &position.apply(mv), player, depth - 1);
                if score >= best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
            }
            (best_move, best_score)
        }
    };

    SearchResult {
        best_move,
        score,
        depth,
        n_nodes: ctx.n_nodes - n_nodes,
        n_evals: ctx.n_evals - n_evals,
    }
}

fn minimax_value<NT: NodeType, P: Position>(
    ctx: &mut SearchContext,
    position: &P,
    player: Player,
    depth: Depth,
) -> Score {
    if let Some(score) = leaf_score(ctx, position, player, depth) {
        return score;
    }

    let children = position
        .legal_moves()
        .into_iter()
        .map(|mv| minimax_value::<NT::Child, P>(ctx, &position.apply(mv), player, depth - 1));
    if NT::MAX_NODE {
        children.fold(Score::LOSS, Score::max)
    } else {
        children.fold(Score::WIN, Score::min)
    }
}

/// Counts the node and returns its value if it is not expanded.
#[inline]
fn leaf_score<P: Position>(
    ctx: &mut SearchContext,
    position: &P,
    player: Player,
    depth: Depth,
) -> Option<Score> {
    ctx.increment_nodes();
    if position.is_terminal() {
        Some(position.outcome(player))
    } else if depth == 0 {
        Some(ctx.evaluate(position, player))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;

    use super::*;
    use crate::board::Board;
    use crate::cell::Cell;
    use crate::eval::Evaluator;

    fn cell(name: &str) -> Cell {
        name.parse().unwrap()
    }

    /// Both tokens placed in opposite corners of an open board.
    fn corners() -> Board {
        Board::new().apply(cell("a1")).apply(cell("k9"))
    }

    #[test]
    fn test_depth_zero_evaluates_root() {
        let board = corners();
        let mut ctx = SearchContext::new(Evaluator::default());
        let result = search_root(&mut ctx, &board, Player::First, 0);
        assert_eq!(result.best_move, None);
        assert_eq!(result.n_nodes, 1);
        assert_eq!(result.n_evals, 1);
        assert_eq!(result.score, Evaluator::default().evaluate(&board, Player::First));
    }

    #[test]
    fn test_depth_one_returns_legal_move() {
        let board = corners();
        let mut ctx = SearchContext::new(Evaluator::default());
        let result = search_root(&mut ctx, &board, Player::First, 1);
        let best_move = result.best_move.unwrap();
        assert!(board.legal_moves().contains(best_move));
        assert_eq!(result.n_evals, board.legal_moves().count() as u64);
    }

    #[test]
    fn test_matches_minimax() {
        let board = corners().apply(cell("c2")).apply(cell("i8"));
        for depth in 1..=4 {
            let mut pruned = SearchContext::new(Evaluator::default());
            let mut full = SearchContext::new(Evaluator::default());
            let a = search_root(&mut pruned, &board, Player::First, depth);
            let b = minimax(&mut full, &board, Player::First, depth);
            assert_eq!((a.best_move, a.score), (b.best_move, b.score), "depth {depth}");
            assert!(a.n_nodes <= b.n_nodes);
        }
    }

    #[test]
    fn test_aborted_search_stops() {
        let flag = Arc::new(AtomicBool::new(true));
        let mut ctx = SearchContext::new(Evaluator::default()).with_abort(flag);
        let result = search_root(&mut ctx, &corners(), Player::First, 6);
        assert!(ctx.is_aborted());
        assert_eq!(result.best_move, None);
        assert_eq!(result.n_evals, 0);
    }
}
