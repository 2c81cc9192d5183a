use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use isolation_core::board::Board;
use isolation_core::cell::Cell;
use isolation_core::eval::{Evaluator, Heuristic, LibertySigns};
use isolation_core::player::Player;
use isolation_core::position::Position;
use isolation_core::search::search_context::SearchContext;
use isolation_core::search::{minimax, search_root};
use isolation_core::types::Score;

/// First is boxed into a single move, after which it has no way out.
const DEAD_END: &str = "
    1##########
    #####.#####
    #.#####.###
    ######.##.#
    ####.###2##
    ##########.
    ########.##
    ###########
    ###########
";

fn cell(name: &str) -> Cell {
    name.parse().unwrap()
}

fn dead_end() -> Board {
    Board::from_string(DEAD_END, 20).unwrap()
}

/// Plays `plies` random moves from the empty board, stopping early at a
/// terminal position.
fn random_position(rng: &mut StdRng, plies: u32) -> Board {
    let mut board = Board::new();
    for _ in 0..plies {
        let moves = board.legal_moves();
        let Some(&mv) = moves.as_slice().choose(rng) else {
            break;
        };
        board = board.apply(mv);
    }
    board
}

#[test]
fn test_pruned_search_matches_minimax() {
    let mut rng = StdRng::seed_from_u64(2024);
    for heuristic in [Heuristic::PositionalMobility, Heuristic::MobilityDifference] {
        let evaluator = Evaluator::new(heuristic, LibertySigns::Standard);
        for _ in 0..24 {
            let plies = rng.random_range(2..40);
            let board = random_position(&mut rng, plies);
            if board.is_terminal() {
                continue;
            }
            let player = board.side_to_move();
            for depth in 1..=4 {
                let pruned = search_root(&mut SearchContext::new(evaluator), &board, player, depth);
                let full = minimax(&mut SearchContext::new(evaluator), &board, player, depth);
                assert_eq!(
                    (pruned.best_move, pruned.score),
                    (full.best_move, full.score),
                    "depth {depth} on\n{board}"
                );
                assert!(pruned.n_nodes <= full.n_nodes);
            }
        }
    }
}

#[test]
fn test_search_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(42);
    let board = random_position(&mut rng, 12);
    let player = board.side_to_move();
    let first = search_root(&mut SearchContext::new(Evaluator::default()), &board, player, 4);
    let second = search_root(&mut SearchContext::new(Evaluator::default()), &board, player, 4);
    assert_eq!(first, second);
}

#[test]
fn test_terminal_root_is_exact() {
    let board = dead_end().apply(cell("b3")).apply(cell("k6"));
    assert!(board.is_terminal());
    for depth in 0..=5 {
        let mut ctx = SearchContext::new(Evaluator::default());
        let loser = search_root(&mut ctx, &board, Player::First, depth);
        assert_eq!(loser.score, Score::LOSS);
        assert_eq!(loser.best_move, None);
        assert_eq!(loser.n_nodes, 1);
        assert_eq!(loser.n_evals, 0);

        let winner = search_root(&mut ctx, &board, Player::Second, depth);
        assert_eq!(winner.score, Score::WIN);
    }
}

#[test]
fn test_depth_zero_is_static_evaluation() {
    let board = Board::new().apply(cell("e5")).apply(cell("g5"));
    let evaluator = Evaluator::default();
    let mut ctx = SearchContext::new(evaluator);
    let result = search_root(&mut ctx, &board, Player::First, 0);
    assert_eq!(result.score, evaluator.evaluate(&board, Player::First));
    assert_eq!(result.best_move, None);
    assert_eq!(result.n_nodes, 1);
}

#[test]
fn test_forced_move_into_dead_end() {
    let board = dead_end();
    assert_eq!(board.legal_moves().as_slice(), &[cell("b3")]);

    let mut ctx = SearchContext::new(Evaluator::default());
    let result = search_root(&mut ctx, &board, Player::First, 2);
    assert_eq!(result.best_move, Some(cell("b3")));
    assert_eq!(result.score, Score::LOSS);
    assert_eq!(result.n_evals, 0);
}

#[test]
fn test_dead_end_liberty_signs() {
    let board = dead_end();
    let standard = Evaluator::default();
    let legacy = Evaluator::new(Heuristic::PositionalMobility, LibertySigns::Legacy);

    let result = search_root(&mut SearchContext::new(standard), &board, Player::First, 1);
    assert_eq!((result.best_move, result.score), (Some(cell("b3")), Score::LOSS));
    let result = search_root(&mut SearchContext::new(legacy), &board, Player::First, 1);
    assert_eq!((result.best_move, result.score), (Some(cell("b3")), Score::WIN));

    let after = board.apply(cell("b3"));
    assert_eq!(standard.evaluate(&after, Player::First), Score::LOSS);
    assert_eq!(standard.evaluate(&after, Player::Second), Score::WIN);
}

#[test]
fn test_last_tied_move_wins() {
    let board = dead_end().apply(cell("b3"));
    let mut ctx = SearchContext::new(Evaluator::default());
    let result = search_root(&mut ctx, &board, Player::Second, 1);
    // All three replies leave First stuck, so the last one generated is kept.
    assert_eq!(result.score, Score::WIN);
    assert_eq!(result.best_move, board.legal_moves().iter().last());
}
