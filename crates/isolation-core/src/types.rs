//! Common type aliases used throughout the engine.

use std::fmt;

/// Search depth.
pub type Depth = u32;

/// Desirability of a position for one side.
///
/// Heuristic estimates are finite. Exact game outcomes use the two infinite
/// sentinels so that no estimate can ever compare equal to a proven result.
///
/// # Special Values
///
/// - [`Score::WIN`]: the side the score is computed for has won.
/// - [`Score::LOSS`]: the side the score is computed for has lost.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Score(f64);

impl Score {
    /// Neutral score.
    pub const ZERO: Self = Self(0.0);

    /// Exact win sentinel.
    pub const WIN: Self = Self(f64::INFINITY);

    /// Exact loss sentinel.
    pub const LOSS: Self = Self(f64::NEG_INFINITY);

    /// Creates a `Score` from a raw value.
    ///
    /// # Arguments
    ///
    /// * `value` - The raw floating-point value. Must not be NaN.
    #[inline(always)]
    pub fn new(value: f64) -> Self {
        debug_assert!(!value.is_nan(), "score must not be NaN");
        Self(value)
    }

    /// Returns the raw floating-point value.
    #[inline(always)]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns `true` for the `WIN` and `LOSS` sentinels.
    #[inline(always)]
    pub fn is_proven(self) -> bool {
        self.0.is_infinite()
    }

    /// Returns the larger of two scores.
    #[inline(always)]
    pub fn max(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    /// Returns the smaller of two scores.
    #[inline(always)]
    pub fn min(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// Returns the largest score strictly below `self`.
    ///
    /// `LOSS` has nothing below it and is returned unchanged. For `WIN` this is
    /// the largest finite value.
    pub fn just_below(self) -> Self {
        let x = self.0;
        if x == f64::NEG_INFINITY {
            return self;
        }
        if x == 0.0 {
            // Smallest negative subnormal, valid for both +0.0 and -0.0.
            return Self(-f64::from_bits(1));
        }
        let bits = x.to_bits();
        let next = if x > 0.0 { bits - 1 } else { bits + 1 };
        Self(f64::from_bits(next))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::WIN {
            write!(f, "win")
        } else if *self == Self::LOSS {
            write!(f, "loss")
        } else {
            write!(f, "{:.3}", self.0)
        }
    }
}
