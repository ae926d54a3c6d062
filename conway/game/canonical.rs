//! Reduction of arbitrary options to canonical form
//!
//! A game is canonical when none of its options is dominated or reversible. Reversible options
//! are bypassed first, i.e. replaced by the options of the opponent's reversing response, until
//! no option reverses. Then dominated options are removed. Both steps are value preserving so
//! the target of reversibility checks is the game built from the raw options, which is compared
//! without ever being interned.

use crate::game::{Game, Player, interner::Interner};
use std::collections::VecDeque;

type Seen = std::collections::HashSet<Game, ahash::RandomState>;

/// Game `{left|right}` given by options that may be dominated or reversible
#[derive(Debug, Clone, Copy)]
struct Provisional<'a> {
    left: &'a [Game],
    right: &'a [Game],
}

impl Provisional<'_> {
    fn options(&self, player: Player) -> &[Game] {
        match player {
            Player::Left => self.left,
            Player::Right => self.right,
        }
    }

    /// `game <= {left|right}`
    fn geq(&self, game: Game) -> bool {
        !self.right.iter().any(|&r_opt| Game::leq(r_opt, game))
            && !game.left_moves().iter().any(|&g_l| self.leq(g_l))
    }

    /// `{left|right} <= game`
    fn leq(&self, game: Game) -> bool {
        !self.left.iter().any(|&l_opt| Game::leq(game, l_opt))
            && !game.right_moves().iter().any(|&g_r| self.geq(g_r))
    }

    /// Check if `response` of the opponent to an option of `player` reverses it
    fn reverses(&self, player: Player, response: Game) -> bool {
        match player {
            Player::Left => self.geq(response),
            Player::Right => self.leq(response),
        }
    }

    /// Replace reversible options of `player` with the options of the reversing response until
    /// no option is reversible.
    fn bypass_reversible_moves(&self, player: Player) -> Vec<Game> {
        let options = self.options(player);
        let mut seen = options.iter().copied().collect::<Seen>();
        let mut pending = options.iter().copied().collect::<VecDeque<_>>();
        let mut result = Vec::with_capacity(options.len());

        while let Some(option) = pending.pop_front() {
            let reversing = option
                .moves(player.opposite())
                .iter()
                .copied()
                .find(|&response| self.reverses(player, response));

            match reversing {
                None => result.push(option),
                Some(response) => {
                    log::trace!("bypassing reversible {player:?} option #{}", option.idx);
                    for &replacement in response.moves(player) {
                        if seen.insert(replacement) {
                            pending.push_back(replacement);
                        }
                    }
                }
            }
        }

        result
    }
}

/// Keep only options that are best for `player`: maximal for Left, minimal for Right
fn eliminate_dominated_moves(moves: &[Game], player: Player) -> Vec<Game> {
    let mut moves: Vec<Option<Game>> = moves.iter().copied().map(Some).collect();

    'outer: for i in 0..moves.len() {
        for j in 0..i {
            let Some(move_i) = moves[i] else {
                continue 'outer;
            };
            let Some(move_j) = moves[j] else {
                continue;
            };

            let comparison = Game::compare(move_i, move_j);
            let (remove_i, remove_j) = match player {
                Player::Left => (comparison.is_le(), comparison.is_ge()),
                Player::Right => (comparison.is_ge(), comparison.is_le()),
            };

            // On equality keep the earlier one
            if remove_i {
                moves[i] = None;
            } else if remove_j {
                moves[j] = None;
            }
        }
    }

    moves.into_iter().flatten().collect()
}

/// Construct canonical form of a game from options that are canonical themselves
pub(crate) fn canonicalize(mut left: Vec<Game>, mut right: Vec<Game>) -> Game {
    left.sort_unstable_by_key(|g| g.idx);
    left.dedup();
    right.sort_unstable_by_key(|g| g.idx);
    right.dedup();

    let provisional = Provisional {
        left: &left,
        right: &right,
    };

    let new_left = provisional.bypass_reversible_moves(Player::Left);
    let new_left = eliminate_dominated_moves(&new_left, Player::Left);

    let new_right = provisional.bypass_reversible_moves(Player::Right);
    let new_right = eliminate_dominated_moves(&new_right, Player::Right);

    Interner::global().intern(new_left, new_right)
}
