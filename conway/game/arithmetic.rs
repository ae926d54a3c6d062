//! Sum, negation and product of games
//!
//! All operations are memoized in the [`Interner`] by the indices of their operands, and their
//! results go through the canonicalizer like any other constructed game.

use crate::{
    error::GameError,
    game::{Game, interner::Interner, value::Value},
};
use auto_ops::impl_op_ex;
use itertools::iproduct;
use std::iter::{Product, Sum};

impl Game {
    /// Construct a sum of two games. Alias for [`+`] operator
    ///
    /// `G + H = { GL + H, G + HL | GR + H, G + HR }`
    pub fn construct_sum(g: Game, h: Game) -> Game {
        if g.is_zero() {
            return h;
        }
        if h.is_zero() {
            return g;
        }

        let interner = Interner::global();
        let cached = interner.sums.get(&(g, h)).map(|s| *s);
        if let Some(sum) = cached {
            return sum;
        }

        let left = g
            .left_moves()
            .iter()
            .map(|&g_l| Game::construct_sum(g_l, h))
            .chain(h.left_moves().iter().map(|&h_l| Game::construct_sum(g, h_l)))
            .collect();
        let right = g
            .right_moves()
            .iter()
            .map(|&g_r| Game::construct_sum(g_r, h))
            .chain(h.right_moves().iter().map(|&h_r| Game::construct_sum(g, h_r)))
            .collect();

        let sum = Game::new_from_moves(left, right);
        interner.sums.insert((g, h), sum);
        sum
    }

    /// Construct negative of a game. Alias for unary [`-`] operator
    ///
    /// `-G = { -GR | -GL }`
    pub fn construct_negative(g: Game) -> Game {
        if g.is_zero() {
            return g;
        }

        let interner = Interner::global();
        let cached = interner.negatives.get(&g).map(|n| *n);
        if let Some(negative) = cached {
            return negative;
        }

        let left = g
            .right_moves()
            .iter()
            .copied()
            .map(Game::construct_negative)
            .collect();
        let right = g
            .left_moves()
            .iter()
            .copied()
            .map(Game::construct_negative)
            .collect();

        // Negation of canonical options cannot introduce dominated or reversible moves
        let negative = interner.intern(left, right);
        interner.negatives.insert(g, negative);
        negative
    }

    /// Construct a product of two games. Alias for [`*`] operator
    ///
    /// `G * H = { GL*H + G*HL - GL*HL, GR*H + G*HR - GR*HR | GL*H + G*HR - GL*HR, GR*H + G*HL - GR*HL }`
    pub fn construct_product(g: Game, h: Game) -> Game {
        if g.is_zero() || h.is_zero() {
            return Game::zero();
        }

        let interner = Interner::global();
        let cached = interner.products.get(&(g, h)).map(|p| *p);
        if let Some(product) = cached {
            return product;
        }

        // G' * H + G * H' - G' * H'
        let term = |g_opt: Game, h_opt: Game| {
            Game::construct_sum(
                Game::construct_sum(
                    Game::construct_product(g_opt, h),
                    Game::construct_product(g, h_opt),
                ),
                Game::construct_negative(Game::construct_product(g_opt, h_opt)),
            )
        };

        let left = iproduct!(g.left_moves(), h.left_moves())
            .chain(iproduct!(g.right_moves(), h.right_moves()))
            .map(|(&g_opt, &h_opt)| term(g_opt, h_opt))
            .collect();
        let right = iproduct!(g.left_moves(), h.right_moves())
            .chain(iproduct!(g.right_moves(), h.left_moves()))
            .map(|(&g_opt, &h_opt)| term(g_opt, h_opt))
            .collect();

        let product = Game::new_from_moves(left, right);
        interner.products.insert((g, h), product);
        product
    }

    /// Sum of `n` copies of the game, or of its negative when `n` is negative
    #[must_use]
    pub fn multiple(self, n: i64) -> Game {
        let summand = if n < 0 { -self } else { self };
        (0..n.unsigned_abs()).fold(Game::zero(), |acc, _| acc + summand)
    }

    /// Sum of any two values that can be turned into games
    ///
    /// # Errors
    /// - Either value is not a valid game, see [`Game::try_new`]
    pub fn try_sum(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Result<Game, GameError> {
        Ok(Game::try_new(lhs)? + Game::try_new(rhs)?)
    }

    /// Difference of any two values that can be turned into games
    ///
    /// # Errors
    /// - Either value is not a valid game, see [`Game::try_new`]
    pub fn try_difference(
        lhs: impl Into<Value>,
        rhs: impl Into<Value>,
    ) -> Result<Game, GameError> {
        Ok(Game::try_new(lhs)? - Game::try_new(rhs)?)
    }

    /// Product of any two values that can be turned into games
    ///
    /// # Errors
    /// - Either value is not a valid game, see [`Game::try_new`]
    pub fn try_product(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Result<Game, GameError> {
        Ok(Game::try_new(lhs)? * Game::try_new(rhs)?)
    }
}

impl_op_ex!(+|g: &Game, h: &Game| -> Game { Game::construct_sum(*g, *h) });
impl_op_ex!(+=|g: &mut Game, h: &Game| { *g = Game::construct_sum(*g, *h) });
impl_op_ex!(-|g: &Game| -> Game { Game::construct_negative(*g) });
impl_op_ex!(-|g: &Game, h: &Game| -> Game {
    Game::construct_sum(*g, Game::construct_negative(*h))
});
impl_op_ex!(-=|g: &mut Game, h: &Game| {
    *g = Game::construct_sum(*g, Game::construct_negative(*h));
});
impl_op_ex!(*|g: &Game, h: &Game| -> Game { Game::construct_product(*g, *h) });
impl_op_ex!(*=|g: &mut Game, h: &Game| { *g = Game::construct_product(*g, *h) });

impl_op_ex!(+|g: &Game, n: &i64| -> Game { Game::construct_sum(*g, Game::new_integer(*n)) });
impl_op_ex!(+|n: &i64, g: &Game| -> Game { Game::construct_sum(Game::new_integer(*n), *g) });
impl_op_ex!(-|g: &Game, n: &i64| -> Game {
    Game::construct_sum(*g, Game::construct_negative(Game::new_integer(*n)))
});
impl_op_ex!(-|n: &i64, g: &Game| -> Game {
    Game::construct_sum(Game::new_integer(*n), Game::construct_negative(*g))
});
impl_op_ex!(*|g: &Game, n: &i64| -> Game { Game::construct_product(*g, Game::new_integer(*n)) });
impl_op_ex!(*|n: &i64, g: &Game| -> Game { Game::construct_product(Game::new_integer(*n), *g) });

impl Sum for Game {
    fn sum<I: Iterator<Item = Game>>(iter: I) -> Game {
        iter.fold(Game::zero(), |acc, g| acc + g)
    }
}

impl<'a> Sum<&'a Game> for Game {
    fn sum<I: Iterator<Item = &'a Game>>(iter: I) -> Game {
        iter.fold(Game::zero(), |acc, g| acc + g)
    }
}

impl Product for Game {
    fn product<I: Iterator<Item = Game>>(iter: I) -> Game {
        iter.fold(Game::new_integer(1), |acc, g| acc * g)
    }
}
