//! Errors raised while constructing games

use num_rational::BigRational;
use thiserror::Error;

/// Value could not be turned into a game
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    /// Only rationals with a power of two denominator have a finite game form
    #[error("{0} is not a dyadic rational")]
    NotDyadic(BigRational),

    /// Floating point input was NaN or infinite
    #[error("{0} is not a finite number")]
    NotFinite(f64),
}
