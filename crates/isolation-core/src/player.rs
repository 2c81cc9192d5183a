/// Identifies one of the two sides of a game.
///
/// `First` places its token on ply 0 and moves on every even ply; `Second`
/// moves on odd plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    First = 0,
    Second = 1,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::First, Player::Second];

    /// Returns the player who moves at the given ply.
    #[inline]
    pub const fn from_ply(ply_count: u32) -> Player {
        if ply_count % 2 == 0 {
            Player::First
        } else {
            Player::Second
        }
    }

    /// Returns the opposite player.
    ///
    /// # Returns
    ///
    /// * `Player::Second` for `Player::First`
    /// * `Player::First` for `Player::Second`
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Returns the player's index (0 or 1).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Converts the player to its board character.
    ///
    /// # Returns
    ///
    /// * `'1'` for `Player::First`
    /// * `'2'` for `Player::Second`
    pub const fn to_char(self) -> char {
        match self {
            Player::First => '1',
            Player::Second => '2',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ply_alternates() {
        assert_eq!(Player::from_ply(0), Player::First);
        assert_eq!(Player::from_ply(1), Player::Second);
        assert_eq!(Player::from_ply(42), Player::First);
        assert_eq!(Player::from_ply(43), Player::Second);
    }

    #[test]
    fn test_opponent() {
        for player in Player::ALL {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }
}
