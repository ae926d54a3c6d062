//! Process-wide storage of canonical games
//!
//! Every canonical game is stored once and referred to by its index. Option lists are sorted and
//! deduplicated before lookup, so the same pair of option sets always maps to the same [`Game`].
//! The interner also owns the memo tables of every recursive operation, all keyed by game
//! indices rather than by structure.
//!
//! Nothing is ever evicted: the storage grows with every distinct game the process builds.

use crate::{
    game::{Game, comparison::Comparison},
    numeric::dyadic_rational_number::DyadicRationalNumber,
};
use append_only_vec::AppendOnlyVec;
use dashmap::DashMap;
use std::sync::LazyLock;

type Table<K, V> = DashMap<K, V, ahash::RandomState>;

/// Left and Right options of an interned game
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Moves {
    pub(crate) left: Box<[Game]>,
    pub(crate) right: Box<[Game]>,
}

/// Storage of canonical games and caches of operations on them
#[derive(Debug)]
pub struct Interner {
    /// Storage of game moves
    games: AppendOnlyVec<Moves>,

    /// Mapping from game moves to its index in `games` vector
    table: Table<Moves, u32>,

    /// Comparison results keyed by `(lhs, rhs)` with `lhs.idx <= rhs.idx`
    pub(crate) comparisons: Table<(Game, Game), Comparison>,
    pub(crate) sums: Table<(Game, Game), Game>,
    pub(crate) negatives: Table<Game, Game>,
    pub(crate) products: Table<(Game, Game), Game>,
    pub(crate) birthdays: Table<Game, u32>,
    pub(crate) numbers: Table<Game, Option<DyadicRationalNumber>>,
    pub(crate) nimbers: Table<u32, Game>,
}

static GLOBAL: LazyLock<Interner> = LazyLock::new(Interner::new);

impl Interner {
    fn new() -> Interner {
        let interner = Interner {
            games: AppendOnlyVec::new(),
            table: DashMap::default(),
            comparisons: DashMap::default(),
            sums: DashMap::default(),
            negatives: DashMap::default(),
            products: DashMap::default(),
            birthdays: DashMap::default(),
            numbers: DashMap::default(),
            nimbers: DashMap::default(),
        };

        // Fixed indices of named games, see `Game::zero`, `Game::star`, `Game::up`, `Game::down`
        let zero = interner.intern(Vec::new(), Vec::new());
        debug_assert_eq!(zero, Game::zero());
        let star = interner.intern(vec![zero], vec![zero]);
        debug_assert_eq!(star, Game::star());
        let up = interner.intern(vec![zero], vec![star]);
        debug_assert_eq!(up, Game::up());
        let down = interner.intern(vec![star], vec![zero]);
        debug_assert_eq!(down, Game::down());

        interner
    }

    /// Get the interner shared by the whole process
    #[inline]
    pub fn global() -> &'static Interner {
        &GLOBAL
    }

    /// Store a game with given options and return its handle.
    ///
    /// Options must already be in canonical form and free of dominated or reversible moves, use
    /// [`Game::new_from_moves`] to construct a game from arbitrary options.
    ///
    /// # Panics
    /// - More than `u32::MAX` distinct games are stored
    pub(crate) fn intern(&self, mut left: Vec<Game>, mut right: Vec<Game>) -> Game {
        left.sort_unstable_by_key(|g| g.idx);
        left.dedup();
        right.sort_unstable_by_key(|g| g.idx);
        right.dedup();

        let moves = Moves {
            left: left.into_boxed_slice(),
            right: right.into_boxed_slice(),
        };

        let idx = *self.table.entry(moves.clone()).or_insert_with(|| {
            let (num_left, num_right) = (moves.left.len(), moves.right.len());
            let idx = u32::try_from(self.games.push(moves)).expect("game storage overflow");
            log::trace!("interned game #{idx} with {num_left} left and {num_right} right options");
            idx
        });

        Game { idx }
    }

    #[inline]
    pub(crate) fn moves(&self, game: Game) -> &Moves {
        &self.games[game.idx as usize]
    }

    /// Get count of interned games
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.games.len()
    }
}

#[test]
fn zero_is_first() {
    let interner = Interner::global();
    assert!(interner.len() >= 1);
    assert!(interner.moves(Game::zero()).left.is_empty());
    assert!(interner.moves(Game::zero()).right.is_empty());
}

#[test]
fn named_games_are_preinterned() {
    let interner = Interner::global();
    let star = Game::new_from_moves(vec![Game::zero()], vec![Game::zero()]);
    assert_eq!(star, Game::star());
    assert_eq!(star.idx, 1);
    assert_eq!(Game::new_from_moves(vec![Game::zero()], vec![star]), Game::up());
    assert_eq!(Game::new_from_moves(vec![star], vec![Game::zero()]), Game::down());
    assert_eq!(&*interner.moves(Game::up()).right, &[star]);
    assert_eq!(&*interner.moves(Game::down()).left, &[star]);
}

#[test]
fn identical() {
    let interner = Interner::global();
    let star = Game::star();
    let g = interner.intern(vec![Game::zero(), star], vec![Game::zero()]);
    let h = interner.intern(vec![star, Game::zero(), star], vec![Game::zero()]);

    // == for identical
    assert_eq!(g.idx, h.idx);
    assert_eq!(interner.moves(g).left.len(), 2);
}
