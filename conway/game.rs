//! Conway games
//!
//! [`Game`] is a cheap [`Copy`] handle to a canonical game stored in the process-wide
//! [`Interner`]. Because canonical forms are unique and every game is interned, two handles are
//! equal exactly when the games they point to have equal value.

use crate::{game::interner::Interner, numeric::nimber::Nimber};

pub mod arithmetic;
pub mod birthday;
pub mod canonical;
pub mod comparison;
pub mod interner;
pub mod notation;
pub mod value;

/// Player making a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Player {
    Left,
    Right,
}

impl Player {
    /// Opposite player
    #[inline(always)]
    #[must_use]
    pub const fn opposite(self) -> Player {
        match self {
            Player::Left => Player::Right,
            Player::Right => Player::Left,
        }
    }
}

/// Canonical Conway game
///
/// Ordering between games is the game-theoretic partial order, see [`Game::compare`]. Equality is
/// identity of the interned game, which coincides with equality of value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "SerializedGame", into = "SerializedGame")
)]
pub struct Game {
    idx: u32,
}

impl Game {
    /// The game `{|}` where no player can move
    #[inline]
    pub const fn zero() -> Game {
        Game { idx: 0 }
    }

    /// `* = {0|0}`
    #[inline]
    pub const fn star() -> Game {
        Game { idx: 1 }
    }

    /// `↑ = {0|*}`
    #[inline]
    pub const fn up() -> Game {
        Game { idx: 2 }
    }

    /// `↓ = {*|0}`
    #[inline]
    pub const fn down() -> Game {
        Game { idx: 3 }
    }

    /// Single Nim heap of size `n`, i.e. `*n = {*0,...,*(n-1) | *0,...,*(n-1)}`
    pub fn nimber(n: u32) -> Game {
        let interner = Interner::global();

        let cached = interner.nimbers.get(&n).map(|g| *g);
        if let Some(game) = cached {
            return game;
        }

        let options = (0..n).map(Game::nimber).collect::<Vec<_>>();
        let game = Game::new_impartial(options);
        interner.nimbers.insert(n, game);
        game
    }

    /// Construct a game from arbitrary options, removing dominated and reversible ones
    ///
    /// # Panics
    /// - More than `u32::MAX` distinct games have been constructed in the process
    pub fn new_from_moves(left: Vec<Game>, right: Vec<Game>) -> Game {
        canonical::canonicalize(left, right)
    }

    /// Construct a game where both players have the same options
    ///
    /// # Panics
    /// - More than `u32::MAX` distinct games have been constructed in the process
    pub fn new_impartial(options: Vec<Game>) -> Game {
        Game::new_from_moves(options.clone(), options)
    }

    /// Canonical options of Left
    #[inline]
    pub fn left_moves(self) -> &'static [Game] {
        &Interner::global().moves(self).left
    }

    /// Canonical options of Right
    #[inline]
    pub fn right_moves(self) -> &'static [Game] {
        &Interner::global().moves(self).right
    }

    /// Canonical options of a given player
    #[inline]
    pub fn moves(self, player: Player) -> &'static [Game] {
        match player {
            Player::Left => self.left_moves(),
            Player::Right => self.right_moves(),
        }
    }

    /// Check if the game is zero
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.idx == 0
    }

    /// Check if both players have the same options
    pub fn is_impartial(self) -> bool {
        self.left_moves() == self.right_moves()
    }

    /// Convert game to nimber if it is a single Nim heap
    pub fn to_nimber(self) -> Option<Nimber> {
        if !self.is_impartial() {
            return None;
        }
        let heap = u32::try_from(self.left_moves().len()).ok()?;
        (Game::nimber(heap) == self).then_some(Nimber::new(heap))
    }
}

/// Single Nim heap of size `n`. Alias of [`Game::nimber`]
pub fn nimber(n: u32) -> Game {
    Game::nimber(n)
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct SerializedGame {
    left: Vec<Game>,
    right: Vec<Game>,
}

#[cfg(feature = "serde")]
impl From<Game> for SerializedGame {
    fn from(game: Game) -> SerializedGame {
        SerializedGame {
            left: game.left_moves().to_vec(),
            right: game.right_moves().to_vec(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<SerializedGame> for Game {
    fn from(game: SerializedGame) -> Game {
        Game::new_from_moves(game.left, game.right)
    }
}

#[cfg(any(test, feature = "quickcheck"))]
impl Game {
    fn arbitrary_sized(generator: &mut quickcheck::Gen, size: &mut usize) -> Game {
        use crate::numeric::dyadic_rational_number::DyadicRationalNumber;
        use quickcheck::Arbitrary;

        let is_leaf = (u32::arbitrary(generator) % 10) < 3;
        if *size == 0 || is_leaf {
            *size = size.saturating_sub(1);
            match u8::arbitrary(generator) % 4 {
                0 => Game::zero(),
                1 => Game::star(),
                2 => Game::new_integer(i64::from(i8::arbitrary(generator) % 3)),
                _ => Game::new_dyadic(&DyadicRationalNumber::new(
                    i64::from(i8::arbitrary(generator) % 4),
                    1,
                )),
            }
        } else {
            let num_left = (usize::arbitrary(generator) % *size) % 3;
            let num_right = (usize::arbitrary(generator) % *size) % 3;
            *size /= num_left + num_right + 1;
            let left = (0..num_left)
                .map(|_| Game::arbitrary_sized(generator, size))
                .collect();
            let right = (0..num_right)
                .map(|_| Game::arbitrary_sized(generator, size))
                .collect();
            Game::new_from_moves(left, right)
        }
    }
}

#[cfg(any(test, feature = "quickcheck"))]
impl quickcheck::Arbitrary for Game {
    fn arbitrary(generator: &mut quickcheck::Gen) -> Game {
        let mut size = generator.size();
        Game::arbitrary_sized(generator, &mut size)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        if self.is_zero() {
            return quickcheck::empty_shrinker();
        }
        Box::new(self.left_moves().iter().chain(self.right_moves()).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_has_no_moves() {
        assert!(Game::zero().left_moves().is_empty());
        assert!(Game::zero().right_moves().is_empty());
        assert!(Game::zero().is_impartial());
    }

    #[test]
    fn named_games_have_expected_options() {
        let star = Game::star();
        assert_eq!(star.left_moves(), &[Game::zero()]);
        assert_eq!(star.right_moves(), &[Game::zero()]);

        let up = Game::up();
        assert_eq!(up.moves(Player::Left), &[Game::zero()]);
        assert_eq!(up.moves(Player::Right), &[star]);

        let down = Game::down();
        assert_eq!(down.moves(Player::Left), &[star]);
        assert_eq!(down.moves(Player::Right), &[Game::zero()]);
    }

    #[test]
    fn nimbers() {
        assert_eq!(nimber(0), Game::zero());
        assert_eq!(nimber(1), Game::star());
        assert_eq!(nimber(3).left_moves().len(), 3);
        assert!(nimber(3).is_impartial());
        assert_eq!(nimber(4).to_nimber(), Some(Nimber::new(4)));
        assert_eq!(Game::up().to_nimber(), None);
    }

    #[test]
    fn impartial_construction_is_interned() {
        let g = Game::new_impartial((0..3).map(nimber).collect());
        let h = Game::new_impartial((0..3).rev().map(nimber).collect());
        assert_eq!(g, h);
        assert_eq!(g, nimber(3));
    }

    #[test]
    fn opposite_player() {
        assert_eq!(Player::Left.opposite(), Player::Right);
        assert_eq!(Player::Right.opposite().opposite(), Player::Right);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let g = Game::new_from_moves(vec![Game::up().multiple(2)], vec![Game::star(), Game::down()]);
        let json = serde_json::to_string(&g).unwrap();
        let h: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(g, h);

        let zero: Game = serde_json::from_str(r#"{"left":[],"right":[]}"#).unwrap();
        assert_eq!(zero, Game::zero());
    }
}
