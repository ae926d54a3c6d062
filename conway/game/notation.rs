//! Human readable notation of games
//!
//! Numbers print as their value, well known infinitesimals and nimbers with their symbols
//! (`*`, `↑`, `2↓`, `*5`), other impartial games as a single option list `{a,b}`, and everything
//! else as `{L|R}`. Options within a side are sorted by their notation so the output does not
//! depend on construction order.

use crate::{
    display::{braces, commas},
    game::Game,
};
use std::fmt::{self, Display, Formatter};

impl Game {
    /// Multiple of up (positive) or down (negative) that the game is equal to
    fn up_multiple(self) -> Option<i64> {
        let (left, right) = (self.left_moves(), self.right_moves());
        if left.len() != 1 || right.len() != 1 {
            return None;
        }

        // n↑ = {0|(n-1)↑*} is born on day n+1
        let n = i64::from(self.birthday()) - 1;
        if left[0].is_zero() && self == Game::up().multiple(n) {
            Some(n)
        } else if right[0].is_zero() && self == Game::down().multiple(n) {
            Some(-n)
        } else {
            None
        }
    }

    /// Notation of the game with every option written out, e.g. `2` is `{{{|}|}|}`
    pub const fn expanded(self) -> Expanded {
        Expanded(self)
    }
}

fn write_options(
    f: &mut Formatter<'_>,
    options: &[Game],
    render: impl Fn(Game) -> String,
) -> fmt::Result {
    let mut rendered = options.iter().map(|&option| render(option)).collect::<Vec<_>>();
    rendered.sort_unstable();
    commas(f, &rendered)
}

fn write_moves(f: &mut Formatter<'_>, game: Game, render: impl Fn(Game) -> String) -> fmt::Result {
    braces(f, |f| {
        write_options(f, game.left_moves(), &render)?;
        write!(f, "|")?;
        write_options(f, game.right_moves(), &render)
    })
}

impl Display for Game {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let game = *self;

        if let Some(number) = game.to_number() {
            return write!(f, "{number}");
        }
        if game.is_impartial() {
            if let Some(nimber) = game.to_nimber() {
                return write!(f, "{nimber}");
            }
            // Both sides are the same, write them once
            return braces(f, |f| {
                write_options(f, game.left_moves(), |option| option.to_string())
            });
        }
        match game.up_multiple() {
            Some(1) => return write!(f, "↑"),
            Some(-1) => return write!(f, "↓"),
            Some(n) if n > 0 => return write!(f, "{n}↑"),
            Some(n) => return write!(f, "{}↓", n.unsigned_abs()),
            None => {}
        }

        write_moves(f, game, |option| option.to_string())
    }
}

/// Fully expanded notation of a game, see [`Game::expanded`]
#[derive(Debug, Clone, Copy)]
pub struct Expanded(Game);

impl Display for Expanded {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_moves(f, self.0, |option| option.expanded().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{game::nimber, numeric::dyadic_rational_number::DyadicRationalNumber};

    macro_rules! test_notation {
        ($game:expr, $expected:expr) => {
            assert_eq!(&format!("{}", $game), $expected);
        };
    }

    #[test]
    fn numbers() {
        test_notation!(Game::zero(), "0");
        test_notation!(Game::new_integer(3), "3");
        test_notation!(Game::new_integer(-2), "-2");
        test_notation!(Game::new_dyadic(&DyadicRationalNumber::new(-1, 1)), "-1/2");
        test_notation!(Game::new_dyadic(&DyadicRationalNumber::new(13, 4)), "13/16");
    }

    #[test]
    fn infinitesimals() {
        test_notation!(Game::star(), "*");
        test_notation!(Game::up(), "↑");
        test_notation!(Game::down(), "↓");
        test_notation!(Game::up().multiple(3), "3↑");
        test_notation!(Game::down().multiple(2), "2↓");
        test_notation!(nimber(6), "*6");
        test_notation!(Game::up() + Game::star(), "{*,0|0}");
    }

    #[test]
    fn general_games() {
        test_notation!(
            Game::new_from_moves(vec![Game::new_integer(3)], vec![Game::new_integer(1)]),
            "{3|1}"
        );
        test_notation!(
            Game::new_from_moves(
                vec![Game::up().multiple(2)],
                vec![Game::star(), Game::down()]
            ),
            "{2↑|*,↓}"
        );
        test_notation!(
            Game::new_from_moves(vec![Game::new_integer(2)], vec![Game::new_integer(-2)]),
            "{2|-2}"
        );
    }

    #[test]
    fn impartial_games() {
        // {1|1} = 1*
        test_notation!(Game::try_new([1]).unwrap(), "{1}");
        test_notation!(Game::new_impartial(vec![Game::new_integer(-1)]), "{-1}");
        test_notation!(Game::new_impartial(vec![nimber(0), nimber(1)]), "*2");
        test_notation!(Game::try_new([1]).unwrap().expanded(), "{{{|}|}|{{|}|}}");
    }

    #[test]
    fn expanded() {
        test_notation!(Game::zero().expanded(), "{|}");
        test_notation!(Game::star().expanded(), "{{|}|{|}}");
        test_notation!(Game::new_integer(2).expanded(), "{{{|}|}|}");
        test_notation!(Game::new_integer(-1).expanded(), "{|{|}}");
        test_notation!(Game::up().expanded(), "{{|}|{{|}|{|}}}");
    }
}
