//! Partial order of games
//!
//! `G <= H` holds when there is no Left option `GL` with `GL >= H` and no Right option `HR` with
//! `G >= HR`. Games for which neither `G <= H` nor `H <= G` holds are
//! [incomparable](Comparison::Incomparable), sometimes called fuzzy or confused.

use crate::{
    error::GameError,
    game::{Game, interner::Interner, value::Value},
};
use std::cmp::Ordering;

/// Result of comparing two games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Comparison {
    /// `G < H`
    Less,

    /// `G = H`
    Equal,

    /// `G > H`
    Greater,

    /// `G || H`, the first player to move wins `G - H`
    Incomparable,
}

impl Comparison {
    /// Combine results of `G <= H` and `H <= G`
    #[inline]
    pub const fn from_leq(lhs_leq_rhs: bool, rhs_leq_lhs: bool) -> Comparison {
        match (lhs_leq_rhs, rhs_leq_lhs) {
            (true, true) => Comparison::Equal,
            (true, false) => Comparison::Less,
            (false, true) => Comparison::Greater,
            (false, false) => Comparison::Incomparable,
        }
    }

    /// Result of the comparison with swapped operands
    #[inline]
    #[must_use]
    pub const fn flip(self) -> Comparison {
        match self {
            Comparison::Less => Comparison::Greater,
            Comparison::Greater => Comparison::Less,
            Comparison::Equal => Comparison::Equal,
            Comparison::Incomparable => Comparison::Incomparable,
        }
    }

    /// `G <= H`
    #[inline]
    pub const fn is_le(self) -> bool {
        matches!(self, Comparison::Less | Comparison::Equal)
    }

    /// `G >= H`
    #[inline]
    pub const fn is_ge(self) -> bool {
        matches!(self, Comparison::Greater | Comparison::Equal)
    }

    /// Convert to [`Ordering`], [None] if incomparable
    #[inline]
    pub const fn to_ordering(self) -> Option<Ordering> {
        match self {
            Comparison::Less => Some(Ordering::Less),
            Comparison::Equal => Some(Ordering::Equal),
            Comparison::Greater => Some(Ordering::Greater),
            Comparison::Incomparable => None,
        }
    }
}

impl Game {
    /// Compare two games under the game-theoretic partial order
    pub fn compare(lhs: Game, rhs: Game) -> Comparison {
        if lhs == rhs {
            return Comparison::Equal;
        }

        // Cache is keyed by unordered pair
        let (key, flipped) = if lhs.idx <= rhs.idx {
            ((lhs, rhs), false)
        } else {
            ((rhs, lhs), true)
        };

        let interner = Interner::global();
        let cached = interner.comparisons.get(&key).map(|c| *c);
        let comparison = match cached {
            Some(comparison) => comparison,
            None => {
                let (g, h) = key;
                let comparison = Comparison::from_leq(Game::leq_uncached(g, h), Game::leq_uncached(h, g));
                interner.comparisons.insert(key, comparison);
                comparison
            }
        };

        if flipped { comparison.flip() } else { comparison }
    }

    /// Less than or equals comparison on two games
    #[inline]
    pub fn leq(lhs: Game, rhs: Game) -> bool {
        Game::compare(lhs, rhs).is_le()
    }

    /// Compare any two values that can be turned into games
    ///
    /// # Errors
    /// - Either value is not a valid game, see [`Game::try_new`]
    pub fn try_compare(
        lhs: impl Into<Value>,
        rhs: impl Into<Value>,
    ) -> Result<Comparison, GameError> {
        Ok(Game::compare(Game::try_new(lhs)?, Game::try_new(rhs)?))
    }

    fn leq_uncached(lhs: Game, rhs: Game) -> bool {
        !lhs.left_moves()
            .iter()
            .any(|&lhs_l| Game::compare(lhs_l, rhs).is_ge())
            && !rhs
                .right_moves()
                .iter()
                .any(|&rhs_r| Game::compare(lhs, rhs_r).is_ge())
    }
}

impl PartialOrd for Game {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Game::compare(*self, *other).to_ordering()
    }

    fn le(&self, other: &Self) -> bool {
        Game::compare(*self, *other).is_le()
    }

    fn ge(&self, other: &Self) -> bool {
        Game::compare(*self, *other).is_ge()
    }
}

impl PartialEq<i64> for Game {
    fn eq(&self, other: &i64) -> bool {
        *self == Game::new_integer(*other)
    }
}

impl PartialEq<Game> for i64 {
    fn eq(&self, other: &Game) -> bool {
        Game::new_integer(*self) == *other
    }
}

impl PartialOrd<i64> for Game {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Game::compare(*self, Game::new_integer(*other)).to_ordering()
    }
}

impl PartialOrd<Game> for i64 {
    fn partial_cmp(&self, other: &Game) -> Option<Ordering> {
        Game::compare(Game::new_integer(*self), *other).to_ordering()
    }
}
