//! Engine-versus-engine games under a per-move deadline.

use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use isolation_core::agent::{Agent, AgentContext, AgentOptions};
use isolation_core::game_state::GameState;
use isolation_core::player::Player;
use isolation_core::position::Position;
use tracing::info;

use crate::turn::run_turn;
use crate::ui;

/// Plays `games` games and prints the result of each seat.
///
/// A single game is shown move by move; several games only update a
/// progress bar and print the tally at the end.
pub fn run(games: u32, time_limit: Duration, options: AgentOptions) -> Result<()> {
    if games <= 1 {
        let game = play_game(options, 0, time_limit, true)?;
        if let Some(winner) = game.winner() {
            println!("{} wins after {} plies", ui::player_label(winner), game.board().ply_count());
        }
        return Ok(());
    }

    let progress_bar = ProgressBar::new(u64::from(games));
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan}] {pos}/{len} ({percent}%) {msg}")
            .context("invalid progress bar template")?
            .progress_chars("█▉▊▋▌▍▎▏ "),
    );

    let mut wins = [0u32; 2];
    for index in 0..games {
        let game = play_game(options, index, time_limit, false)?;
        let winner = game
            .winner()
            .context("game stopped before either side was stuck")?;
        wins[winner.index()] += 1;
        info!(game = index + 1, ?winner, plies = game.board().ply_count(), "game finished");
        progress_bar.set_message(format!("1: {}  2: {}", wins[0], wins[1]));
        progress_bar.inc(1);
    }
    progress_bar.finish_and_clear();

    println!("{}", "Self-play results".bold());
    for player in Player::ALL {
        let count = wins[player.index()];
        println!(
            "  {}: {count:4} wins ({:.1}%)",
            ui::player_label(player),
            100.0 * f64::from(count) / f64::from(games)
        );
    }
    Ok(())
}

fn play_game(
    options: AgentOptions,
    index: u32,
    time_limit: Duration,
    verbose: bool,
) -> Result<GameState> {
    // Each seat and each game gets its own opening sequence.
    let seat_options = |seat: u64| {
        let seed = options
            .seed
            .map(|seed| seed.wrapping_add(2 * u64::from(index) + seat));
        options.with_seed(seed)
    };
    let mut agents = [Agent::new(seat_options(0)), Agent::new(seat_options(1))];
    let mut contexts = [AgentContext::default(), AgentContext::default()];
    let mut game = GameState::new();

    if verbose {
        ui::print_board(&game);
    }

    while !game.is_game_over() {
        let player = game.side_to_move();
        let seat = player.index();
        let report = run_turn(&mut agents[seat], &mut contexts[seat], game.board(), time_limit)?
            .with_context(|| format!("no move reported at ply {}", game.board().ply_count()))?;
        game.make_move(report.best_move)
            .with_context(|| format!("engine move rejected at ply {}", game.board().ply_count()))?;

        if verbose {
            ui::print_report(player, &report);
            ui::print_board(&game);
        }
    }

    Ok(game)
}
