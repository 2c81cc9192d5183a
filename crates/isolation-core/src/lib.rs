pub mod agent;
pub mod bitboard;
pub mod board;
pub mod cell;
pub mod constants;
pub mod eval;
pub mod game_state;
pub mod move_list;
pub mod perft;
pub mod player;
pub mod position;
pub mod report;
pub mod search;
pub mod types;
mod util;
