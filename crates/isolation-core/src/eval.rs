//! Static evaluation of non-terminal Isolation positions.
//!
//! The default heuristic combines the mobility of both tokens with their
//! distance from the centre of the board. A simpler mobility difference is
//! available for comparison games.

use crate::cell::Cell;
use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::move_list::MoveList;
use crate::player::Player;
use crate::position::Position;
use crate::types::Score;

const CENTER_X: f64 = BOARD_WIDTH as f64 / 2.0;
const CENTER_Y: f64 = BOARD_HEIGHT as f64 / 2.0;

/// Weight of the positional term. Its sign follows the target player.
const SCORE_FACTOR: f64 = 10.0;

/// Selects the scoring formula applied after the zero-liberty shortcut.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Mobility weighted by the distance of each token from the centre.
    #[default]
    PositionalMobility,
    /// Own liberty count minus opponent liberty count.
    MobilityDifference,
}

/// Selects the score returned when one side has no liberties left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LibertySigns {
    /// A target without liberties is lost, an opponent without liberties is won.
    #[default]
    Standard,
    /// Inverted signs: a target without liberties scores a win.
    Legacy,
}

/// Features extracted from a position for one target player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MobilityFeatures {
    /// Liberties of the target.
    pub own_moves: usize,
    /// Liberties of the opponent.
    pub opp_moves: usize,
    /// Sum of the liberty counts reachable from each of the target's liberties.
    pub own_future_moves: usize,
    /// Sum of the liberty counts reachable from each of the opponent's liberties.
    pub opp_future_moves: usize,
    /// Normalized distance of the target from the centre, 0 at the centre.
    pub own_distance: f64,
    /// Normalized distance of the opponent from the centre.
    pub opp_distance: f64,
    /// Number of opponent liberties the target could also move to.
    pub overlap: usize,
}

impl MobilityFeatures {
    /// Extracts the features of `position` as seen by `player`.
    pub fn new<P: Position>(position: &P, player: Player) -> MobilityFeatures {
        let own_location = position.location(player);
        let opp_location = position.location(player.opponent());
        let own = position.liberties(own_location);
        let opp = position.liberties(opp_location);
        Self::from_liberties(position, own_location, opp_location, &own, &opp)
    }

    fn from_liberties<P: Position>(
        position: &P,
        own_location: Option<Cell>,
        opp_location: Option<Cell>,
        own: &MoveList,
        opp: &MoveList,
    ) -> MobilityFeatures {
        MobilityFeatures {
            own_moves: own.count(),
            opp_moves: opp.count(),
            own_future_moves: future_moves(position, own),
            opp_future_moves: future_moves(position, opp),
            own_distance: normalized_distance(own_location),
            opp_distance: normalized_distance(opp_location),
            overlap: opp.iter().filter(|&cell| own.contains(cell)).count(),
        }
    }

    /// Applies the positional-mobility formula for `player`.
    pub fn positional_score(&self, player: Player) -> f64 {
        let factor = if self.overlap == 0 {
            0.0
        } else {
            match player {
                Player::First => SCORE_FACTOR,
                Player::Second => -SCORE_FACTOR,
            }
        };
        factor
            * ((self.opp_distance + 1.0) * self.own_moves as f64
                - (self.own_distance + 1.0) * self.opp_moves as f64)
    }
}

fn future_moves<P: Position>(position: &P, liberties: &MoveList) -> usize {
    liberties
        .iter()
        .map(|cell| position.liberties(Some(cell)).count())
        .sum()
}

/// Returns the Euclidean distance of `location` from the board centre,
/// scaled so that a corner of the unit square is 1.
///
/// The coordinates are derived from the raw cell index, with the row taken
/// as a real quotient. An unplaced token counts as standing on the centre.
pub fn normalized_distance(location: Option<Cell>) -> f64 {
    let Some(cell) = location else {
        return 0.0;
    };
    let loc = cell.index() as i64 - 1;
    let x = loc.rem_euclid(BOARD_WIDTH as i64) as f64;
    let y = loc as f64 / BOARD_WIDTH as f64;
    let dx = CENTER_X - x;
    let dy = CENTER_Y - y;
    (dx * dx + dy * dy).sqrt() / (CENTER_X * CENTER_X + CENTER_Y * CENTER_Y).sqrt()
}

/// Position evaluator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Evaluator {
    pub heuristic: Heuristic,
    pub liberty_signs: LibertySigns,
}

impl Evaluator {
    pub fn new(heuristic: Heuristic, liberty_signs: LibertySigns) -> Evaluator {
        Evaluator {
            heuristic,
            liberty_signs,
        }
    }

    /// Returns `true` if a `WIN` or `LOSS` from the zero-liberty shortcut
    /// always matches the game outcome.
    pub fn shortcuts_are_exact(&self) -> bool {
        matches!(self.liberty_signs, LibertySigns::Standard)
    }

    /// Scores a non-terminal `position` for `player`. Higher is better.
    pub fn evaluate<P: Position>(&self, position: &P, player: Player) -> Score {
        debug_assert!(!position.is_terminal(), "evaluate called on a terminal position");

        let own_location = position.location(player);
        let opp_location = position.location(player.opponent());
        let own = position.liberties(own_location);
        let opp = position.liberties(opp_location);

        if let Some(score) = self.liberty_shortcut(own.count(), opp.count()) {
            return score;
        }

        match self.heuristic {
            Heuristic::MobilityDifference => {
                Score::new(own.count() as f64 - opp.count() as f64)
            }
            Heuristic::PositionalMobility => {
                let features = MobilityFeatures::from_liberties(
                    position,
                    own_location,
                    opp_location,
                    &own,
                    &opp,
                );
                Score::new(features.positional_score(player))
            }
        }
    }

    fn liberty_shortcut(&self, own_moves: usize, opp_moves: usize) -> Option<Score> {
        let (own_empty, opp_empty) = match self.liberty_signs {
            LibertySigns::Standard => (Score::LOSS, Score::WIN),
            LibertySigns::Legacy => (Score::WIN, Score::LOSS),
        };
        if own_moves == 0 {
            Some(own_empty)
        } else if opp_moves == 0 {
            Some(opp_empty)
        } else {
            None
        }
    }
}
