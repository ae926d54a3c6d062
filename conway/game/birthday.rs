//! Birthday of a game, the day on which it is born

use crate::game::{Game, interner::Interner};

impl Game {
    /// Birthday of the game: zero is born on day 0, every other game one day after its latest
    /// born option.
    #[doc(alias = "depth")]
    #[doc(alias = "len")]
    pub fn birthday(self) -> u32 {
        if self.is_zero() {
            return 0;
        }

        let interner = Interner::global();
        let cached = interner.birthdays.get(&self).map(|b| *b);
        if let Some(birthday) = cached {
            return birthday;
        }

        let birthday = self
            .left_moves()
            .iter()
            .chain(self.right_moves())
            .map(|option| option.birthday())
            .max()
            .unwrap_or(0)
            + 1;
        interner.birthdays.insert(self, birthday);
        birthday
    }
}

#[test]
fn birthdays() {
    use crate::{game::nimber, numeric::dyadic_rational_number::DyadicRationalNumber};

    assert_eq!(Game::zero().birthday(), 0);
    assert_eq!(Game::star().birthday(), 1);
    assert_eq!(Game::new_integer(1).birthday(), 1);
    assert_eq!(Game::new_integer(-5).birthday(), 5);
    assert_eq!(Game::up().birthday(), 2);
    assert_eq!(Game::new_dyadic(&DyadicRationalNumber::new(3, 2)).birthday(), 3);
    assert_eq!(nimber(4).birthday(), 4);
    assert_eq!((Game::up() + Game::up()).birthday(), 3);
}
