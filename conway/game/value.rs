//! Construction of games from numbers, option lists and other games
//!
//! [`Value`] is anything that can be turned into a [`Game`]. Integers and dyadic rationals are
//! built by bisection, e.g. `2 = {1|} = {{0|}|} = {{{|}|}|}`, lists become impartial games and
//! pairs of lists become games with separate Left and Right options.

use crate::{
    error::GameError,
    game::{Game, interner::Interner},
    numeric::dyadic_rational_number::DyadicRationalNumber,
};
use num_bigint::BigInt;
use num_rational::{BigRational, Rational64};

/// Value that can be turned into a game, see [`Game::try_new`]
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value, the zero game
    Empty,

    /// Already constructed game
    Game(Game),

    /// Rational number, must have a power of two denominator
    Number(BigRational),

    /// Floating point number, must be finite
    Float(f64),

    /// Options available to both players
    Impartial(Vec<Value>),

    /// Left and Right options
    Partizan(Vec<Value>, Vec<Value>),
}

impl Value {
    /// Turn value into a game
    ///
    /// # Errors
    /// - Number has denominator that is not a power of two
    /// - Float is NaN or infinite
    pub fn into_game(self) -> Result<Game, GameError> {
        match self {
            Value::Empty => Ok(Game::zero()),
            Value::Game(game) => Ok(game),
            Value::Number(number) => Game::new_rational(&number),
            Value::Float(float) => Game::new_float(float),
            Value::Impartial(options) => {
                let options = into_games(options)?;
                Ok(Game::new_impartial(options))
            }
            Value::Partizan(left, right) => {
                let left = into_games(left)?;
                let right = into_games(right)?;
                Ok(Game::new_from_moves(left, right))
            }
        }
    }
}

fn into_games(values: Vec<Value>) -> Result<Vec<Game>, GameError> {
    values.into_iter().map(Value::into_game).collect()
}

impl From<()> for Value {
    fn from((): ()) -> Value {
        Value::Empty
    }
}

impl From<Game> for Value {
    fn from(game: Game) -> Value {
        Value::Game(game)
    }
}

impl From<&Game> for Value {
    fn from(game: &Game) -> Value {
        Value::Game(*game)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(number: $t) -> Value {
                    Value::Number(BigRational::from_integer(BigInt::from(number)))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Value {
    fn from(number: BigInt) -> Value {
        Value::Number(BigRational::from_integer(number))
    }
}

impl From<BigRational> for Value {
    fn from(number: BigRational) -> Value {
        Value::Number(number)
    }
}

impl From<Rational64> for Value {
    fn from(number: Rational64) -> Value {
        let (numer, denom) = number.into_raw();
        Value::Number(BigRational::new(BigInt::from(numer), BigInt::from(denom)))
    }
}

impl From<DyadicRationalNumber> for Value {
    fn from(number: DyadicRationalNumber) -> Value {
        Value::Number(number.to_rational())
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Value {
        Value::Float(number)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(options: Vec<T>) -> Value {
        Value::Impartial(options.into_iter().map(Into::into).collect())
    }
}

impl<T, const N: usize> From<[T; N]> for Value
where
    T: Into<Value>,
{
    fn from(options: [T; N]) -> Value {
        Value::Impartial(options.into_iter().map(Into::into).collect())
    }
}

impl<L, R> From<(L, R)> for Value
where
    L: IntoIterator,
    L::Item: Into<Value>,
    R: IntoIterator,
    R::Item: Into<Value>,
{
    fn from((left, right): (L, R)) -> Value {
        Value::Partizan(
            left.into_iter().map(Into::into).collect(),
            right.into_iter().map(Into::into).collect(),
        )
    }
}

impl TryFrom<Value> for Game {
    type Error = GameError;

    fn try_from(value: Value) -> Result<Game, GameError> {
        value.into_game()
    }
}

impl Game {
    /// Construct a game from any value that describes it
    ///
    /// # Errors
    /// - Value contains a number that is not a dyadic rational or not finite
    ///
    /// # Examples
    ///
    /// ```
    /// use conway::{Game, GameError, nimber};
    ///
    /// assert_eq!(Game::try_new(()), Ok(Game::zero()));
    /// assert_eq!(Game::try_new([nimber(0), nimber(1)]), Ok(nimber(2)));
    /// assert_eq!(Game::try_new([0, 1]).unwrap().to_string(), "{1|0}");
    /// assert_eq!(Game::try_new((vec![0], vec![1])).unwrap().to_string(), "1/2");
    /// assert!(matches!(Game::try_new(num_rational::Rational64::new(1, 3)), Err(GameError::NotDyadic(_))));
    /// ```
    pub fn try_new(value: impl Into<Value>) -> Result<Game, GameError> {
        value.into().into_game()
    }

    /// Construct a game equal to the integer
    pub fn new_integer(number: impl Into<BigInt>) -> Game {
        Game::new_dyadic(&DyadicRationalNumber::new_integer(number))
    }

    /// Construct a game equal to the dyadic rational by bisection
    pub fn new_dyadic(number: &DyadicRationalNumber) -> Game {
        let mut current = Game::zero();
        let mut left: Option<Game> = None;
        let mut right: Option<Game> = None;

        let mut midpoint = DyadicRationalNumber::from(0);
        let mut lower: Option<DyadicRationalNumber> = None;
        let mut upper: Option<DyadicRationalNumber> = None;

        while &midpoint != number {
            if number > &midpoint {
                left = Some(current);
                let previous = midpoint;
                midpoint = match &upper {
                    Some(upper) => previous.mean(upper),
                    None => &previous + DyadicRationalNumber::from(1),
                };
                lower = Some(previous);
            } else {
                right = Some(current);
                let previous = midpoint;
                midpoint = match &lower {
                    Some(lower) => previous.mean(lower),
                    None => &previous - DyadicRationalNumber::from(1),
                };
                upper = Some(previous);
            }

            current = Game::new_from_moves(left.into_iter().collect(), right.into_iter().collect());
        }

        current
    }

    /// Construct a game equal to the rational
    ///
    /// # Errors
    /// - Denominator is not a power of two
    pub fn new_rational(number: &BigRational) -> Result<Game, GameError> {
        match DyadicRationalNumber::from_rational(number) {
            Some(dyadic) => Ok(Game::new_dyadic(&dyadic)),
            None => {
                log::debug!("rejecting non-dyadic rational {number}");
                Err(GameError::NotDyadic(number.clone()))
            }
        }
    }

    /// Construct a game equal to the exact value of the float. Every finite float is dyadic.
    ///
    /// # Errors
    /// - Float is NaN or infinite
    pub fn new_float(number: f64) -> Result<Game, GameError> {
        match BigRational::from_float(number) {
            Some(rational) => Game::new_rational(&rational),
            None => {
                log::debug!("rejecting non-finite float {number}");
                Err(GameError::NotFinite(number))
            }
        }
    }

    /// Numeric value of the game if it is a number
    pub fn to_number(self) -> Option<DyadicRationalNumber> {
        if self.is_zero() {
            return Some(DyadicRationalNumber::from(0));
        }

        let interner = Interner::global();
        let cached = interner.numbers.get(&self).map(|n| n.clone());
        if let Some(number) = cached {
            return number;
        }

        let number = self.to_number_uncached();
        interner.numbers.insert(self, number.clone());
        number
    }

    fn to_number_uncached(self) -> Option<DyadicRationalNumber> {
        // Canonical numbers have at most one option on each side
        let left = match self.left_moves() {
            [] => None,
            [left] => Some(left.to_number()?),
            _ => return None,
        };
        let right = match self.right_moves() {
            [] => None,
            [right] => Some(right.to_number()?),
            _ => return None,
        };

        match (left, right) {
            (None, None) => Some(DyadicRationalNumber::from(0)),
            (Some(left), None) => Some(left + DyadicRationalNumber::from(1)),
            (None, Some(right)) => Some(right - DyadicRationalNumber::from(1)),
            (Some(left), Some(right)) => (left < right).then(|| left.mean(&right)),
        }
    }

    /// Check if the game is a number
    #[inline]
    pub fn is_number(self) -> bool {
        self.to_number().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::nimber;

    #[test]
    fn integers_nest_options() {
        let two = Game::new_integer(2);
        assert_eq!(two.left_moves(), &[Game::new_integer(1)]);
        assert!(two.right_moves().is_empty());
        assert_eq!(two.birthday(), 2);
        assert_eq!(Game::new_integer(-3).birthday(), 3);
        assert_eq!(two.expanded().to_string(), "{{{|}|}|}");

        let minus_one = Game::new_integer(-1);
        assert!(minus_one.left_moves().is_empty());
        assert_eq!(minus_one.right_moves(), &[Game::zero()]);
    }

    #[test]
    fn dyadics_bisect() {
        let quarter = Game::new_dyadic(&DyadicRationalNumber::new(1, 2));
        assert_eq!(quarter.birthday(), 3);
        assert_eq!(quarter.left_moves(), &[Game::zero()]);
        assert_eq!(
            quarter.right_moves(),
            &[Game::new_dyadic(&DyadicRationalNumber::new(1, 1))]
        );

        let g = Game::new_dyadic(&DyadicRationalNumber::new(-13, 3));
        assert_eq!(g.to_number(), Some(DyadicRationalNumber::new(-13, 3)));
    }

    #[test]
    fn non_dyadic_is_rejected() {
        let third = BigRational::new(BigInt::from(1), BigInt::from(3));
        assert_eq!(
            Game::new_rational(&third),
            Err(GameError::NotDyadic(third.clone()))
        );
        assert_eq!(
            Game::try_new(vec![Value::from(0), Value::from(third.clone())]),
            Err(GameError::NotDyadic(third))
        );
    }

    #[test]
    fn floats_are_exact() {
        assert_eq!(
            Game::try_new(5.5),
            Ok(Game::new_dyadic(&DyadicRationalNumber::new(11, 1)))
        );
        assert_eq!(Game::try_new(-0.0), Ok(Game::zero()));
        assert!(matches!(
            Game::try_new(f64::NAN),
            Err(GameError::NotFinite(_))
        ));
        assert_eq!(
            Game::try_new(f64::INFINITY),
            Err(GameError::NotFinite(f64::INFINITY))
        );
    }

    #[test]
    fn option_lists() {
        assert_eq!(
            Game::try_new([1, 2, 3]),
            Ok(Game::new_from_moves(
                vec![Game::new_integer(3)],
                vec![Game::new_integer(1)]
            ))
        );
        assert_eq!(Game::try_new(Vec::<i32>::new()), Ok(Game::zero()));
        assert_eq!(
            Game::try_new([0, 1, 2]),
            Ok(Game::new_from_moves(vec![Game::new_integer(2)], vec![Game::zero()]))
        );
        assert_eq!(Game::try_new([nimber(0), nimber(1), nimber(2)]), Ok(nimber(3)));
        assert_eq!(Game::try_new(([0], [Game::star()])), Ok(Game::up()));
        assert_eq!(
            Game::try_new((vec![Game::star()], Vec::<Game>::new())),
            Ok(Game::zero())
        );
        assert_eq!(
            Game::try_from(Value::Partizan(vec![Value::from(0)], vec![])),
            Ok(Game::new_integer(1))
        );
    }

    #[test]
    fn games_pass_through() {
        let g = Game::try_new(([2], [Game::down()])).unwrap();
        assert_eq!(Game::try_new(g), Ok(g));
        assert_eq!(Game::try_new(&g), Ok(g));
    }

    #[test]
    fn construction_is_interned() {
        let a = Game::try_new(DyadicRationalNumber::new(3, 3)).unwrap();
        let b = Game::new_dyadic(&DyadicRationalNumber::new(3, 3));
        let c = Game::try_new(Rational64::new(6, 16)).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn numbers_are_recognized() {
        assert_eq!(Game::zero().to_number(), Some(DyadicRationalNumber::from(0)));
        assert_eq!(Game::new_integer(7).to_number(), Some(DyadicRationalNumber::from(7)));
        assert!(!Game::star().is_number());
        assert!(!Game::up().is_number());
        assert!(
            !Game::new_from_moves(vec![Game::new_integer(1)], vec![Game::zero()]).is_number()
        );
    }
}
