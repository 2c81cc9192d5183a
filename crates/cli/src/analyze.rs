//! Static and searched analysis of a position reached from the empty board.

use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;
use isolation_core::cell::Cell;
use isolation_core::eval::{Evaluator, MobilityFeatures};
use isolation_core::game_state::GameState;
use isolation_core::search::search_context::SearchContext;
use isolation_core::search::{minimax, search_root};
use isolation_core::types::Depth;

use crate::ui;

/// Replays `moves`, prints the evaluator features of the reached position and
/// one line per completed search depth.
///
/// With `exhaustive` set the unpruned minimax is used, which is only
/// practical for shallow depths.
pub fn run(moves: &[Cell], max_depth: Depth, evaluator: Evaluator, exhaustive: bool) -> Result<()> {
    let mut game = GameState::new();
    for (i, &mv) in moves.iter().enumerate() {
        game.make_move(mv)
            .with_context(|| format!("cannot play move {} ({mv})", i + 1))?;
    }

    ui::print_board(&game);
    if game.is_game_over() {
        return Ok(());
    }

    let board = game.board();
    let player = game.side_to_move();
    let features = MobilityFeatures::new(board, player);
    println!("{} for {}", "Features".bold(), ui::player_label(player));
    println!("  moves        {:3} vs {:3}", features.own_moves, features.opp_moves);
    println!(
        "  future moves {:3} vs {:3}",
        features.own_future_moves, features.opp_future_moves
    );
    println!(
        "  distance     {:.3} vs {:.3}",
        features.own_distance, features.opp_distance
    );
    println!("  overlap      {:3}", features.overlap);
    println!("  evaluation   {}", evaluator.evaluate(board, player));
    println!();

    let mut ctx = SearchContext::new(evaluator);
    for depth in 1..=max_depth {
        let start = Instant::now();
        let result = if exhaustive {
            minimax(&mut ctx, board, player, depth)
        } else {
            search_root(&mut ctx, board, player, depth)
        };
        let best_move = result
            .best_move
            .map_or_else(|| "-".to_string(), |mv| mv.to_string());
        println!(
            "depth {depth:2}  move {}  score {:>8}  nodes {:>10}  evals {:>10}  {:.2?}",
            format!("{best_move:>3}").bold(),
            result.score.to_string(),
            result.n_nodes,
            result.n_evals,
            start.elapsed()
        );
        if result.score.is_proven() || result.n_evals == 0 {
            break;
        }
    }

    Ok(())
}
