//! Terminal rendering of games and search reports.

use colored::{ColoredString, Colorize};
use isolation_core::cell::Cell;
use isolation_core::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use isolation_core::game_state::GameState;
use isolation_core::player::Player;
use isolation_core::position::Position;
use isolation_core::report::Report;

/// Returns the player label in its display colour.
pub fn player_label(player: Player) -> ColoredString {
    match player {
        Player::First => "Player 1".bright_green(),
        Player::Second => "Player 2".bright_yellow(),
    }
}

/// Prints a colored representation of the board to the terminal.
pub fn print_board(game: &GameState) {
    let board = game.board();
    let legal_moves = board.legal_moves();
    let last_move = game.last_move();

    let columns: String = (0..BOARD_WIDTH)
        .map(|x| format!(" {} ", (b'a' + x as u8) as char))
        .collect();
    let border = "───".repeat(BOARD_WIDTH);
    println!("     {columns}");
    println!("    ┌{border}┐");

    for y in 0..BOARD_HEIGHT {
        print!("  {} │", y + 1);
        for x in 0..BOARD_WIDTH {
            let Some(cell) = Cell::from_xy(x, y) else {
                continue;
            };
            print!("{}", cell_symbol(game, cell, last_move, legal_moves.contains(cell)));
        }
        print!("│");

        match y {
            1 => println!("   Ply {}", board.ply_count()),
            2 => {
                if game.is_game_over() {
                    println!("   {}", "*** Game Over ***".bright_red());
                } else {
                    println!("   {}'s turn", player_label(board.side_to_move()));
                }
            }
            3 => match game.winner() {
                Some(winner) => println!("   {} wins!", player_label(winner)),
                None => println!("   {} moves", legal_moves.count()),
            },
            _ => println!(),
        }
    }
    println!("    └{border}┘");
}

fn cell_symbol(game: &GameState, cell: Cell, last_move: Option<Cell>, legal: bool) -> ColoredString {
    let board = game.board();
    let token = Player::ALL
        .into_iter()
        .find(|&p| board.location(p) == Some(cell));
    match token {
        Some(player) => {
            let symbol = format!(" {} ", player.to_char());
            let symbol = match player {
                Player::First => symbol.bright_green(),
                Player::Second => symbol.bright_yellow(),
            };
            if Some(cell) == last_move {
                symbol.on_bright_black()
            } else {
                symbol
            }
        }
        None if board.open_cells().contains(cell) => {
            if legal {
                " · ".bright_cyan()
            } else {
                " . ".normal()
            }
        }
        None => " # ".bright_black(),
    }
}

/// Prints the move a player chose together with the search summary.
pub fn print_report(player: Player, report: &Report) {
    println!(
        "{} plays {}  (score {}, depth {}, {} nodes)",
        player_label(player),
        report.best_move.to_string().bold(),
        report.score,
        report.depth,
        report.n_nodes
    );
}
