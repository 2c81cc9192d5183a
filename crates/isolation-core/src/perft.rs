use crate::board::Board;
use crate::position::Position;

/// Executes a perft run starting from the empty board.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand. A depth of `0` counts the root
///   itself, a depth of `1` the placements of the first player.
///
/// # Returns
///
/// The number of leaves reached. A position where the side to move is stuck
/// counts as one leaf regardless of the remaining depth.
pub fn perft_root(depth: u32) -> u64 {
    perft(&Board::new(), depth)
}

/// Counts the leaves of the game tree below `position`.
pub fn perft<P: Position>(position: &P, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = position.legal_moves();
    if moves.is_empty() {
        return 1;
    }
    if depth == 1 {
        return moves.count() as u64;
    }

    moves
        .into_iter()
        .map(|mv| perft(&position.apply(mv), depth - 1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft_placements() {
        assert_eq!(perft_root(1), 99);
        assert_eq!(perft_root(2), 99 * 98);
    }

    #[test]
    fn test_perft_knight_moves() {
        assert_eq!(perft_root(3), 55_096);
    }

    #[test]
    fn test_perft_depth_zero_is_the_root() {
        assert_eq!(perft_root(0), 1);
        let board = Board::new().apply("e5".parse().unwrap());
        assert_eq!(perft(&board, 0), 1);
    }

    #[test]
    fn test_perft_terminal_is_one_leaf() {
        let text = "\
            1##########
            ###########
            ###########
            ###########
            ###########
            ###########
            ###########
            ###########
            #########.2
        ";
        let board = Board::from_string(text, 2).unwrap();
        assert_eq!(perft(&board, 5), 1);
    }
}
