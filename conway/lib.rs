//! Conway games in canonical form.
//!
//! A [`Game`] is a pair of sets of smaller games, the options of Left and Right. Every game built
//! by this crate is kept in [canonical form](crate::game::canonical) and
//! [interned](crate::game::interner), so two games with the same value are the same handle.
//! Games can be [compared](crate::game::comparison) under the game-theoretic partial order,
//! [added, negated and multiplied](crate::game::arithmetic), and built from
//! [numbers, option lists and nimbers](crate::game::value).
//!
//! ```
//! use conway::{Game, nimber, numeric::dyadic_rational_number::DyadicRationalNumber};
//!
//! let up = Game::up();
//! let sixteenth = Game::new_dyadic(&DyadicRationalNumber::new(1, 4));
//! assert!(0_i64 < up && up < sixteenth);
//! assert_eq!(nimber(5) + nimber(3), nimber(6));
//! assert_eq!(Game::try_new([1, 2, 3]).unwrap().to_string(), "{3|1}");
//! assert_eq!(Game::new_integer(2).expanded().to_string(), "{{{|}|}|}");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod game;
pub mod numeric;

mod display;

pub use error::GameError;
pub use game::{Game, comparison::Comparison, nimber, value::Value};
