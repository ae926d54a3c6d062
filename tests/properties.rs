use conway::{Comparison, Game, GameError, nimber};
use num_bigint::BigInt;
use num_rational::BigRational;
use quickcheck::{Arbitrary, Gen, QuickCheck};

/// Small random game built only through the public constructors
#[derive(Debug, Clone, Copy)]
struct Small(Game);

impl Small {
    fn generate(g: &mut Gen, depth: u8) -> Game {
        if depth == 0 || u8::arbitrary(g) % 4 == 0 {
            return match u8::arbitrary(g) % 4 {
                0 => Game::zero(),
                1 => Game::star(),
                2 => Game::up(),
                _ => Game::new_integer(i64::from(i8::arbitrary(g) % 3)),
            };
        }
        let left = (0..u8::arbitrary(g) % 3)
            .map(|_| Small::generate(g, depth - 1))
            .collect();
        let right = (0..u8::arbitrary(g) % 3)
            .map(|_| Small::generate(g, depth - 1))
            .collect();
        Game::new_from_moves(left, right)
    }
}

impl Arbitrary for Small {
    fn arbitrary(g: &mut Gen) -> Small {
        Small(Small::generate(g, 2))
    }
}

fn fraction(numerator: i64, denominator: i64) -> Result<Game, GameError> {
    Game::try_new(BigRational::new(
        BigInt::from(numerator),
        BigInt::from(denominator),
    ))
}

#[test]
fn independent_constructions_are_identical() {
    let g = Game::try_new([nimber(0), nimber(1), nimber(2)]).unwrap();
    let h = Game::try_new(vec![nimber(2), nimber(0), nimber(1), nimber(1)]).unwrap();
    assert_eq!(g, h);
    assert_eq!(g, nimber(3));
}

#[test]
fn named_identities() {
    let zero = Game::zero();
    let star = Game::star();
    let up = Game::up();
    let sixteenth = fraction(1, 16).unwrap();

    assert_eq!(star + star, zero);
    assert!(up > zero);
    assert!(up < sixteenth);
    assert!(0_i64 < up && up < sixteenth);
    assert_eq!(Game::down(), -up);
    assert_eq!(nimber(0), zero);
}

#[test]
fn star_is_confused_with_zero() {
    let star = Game::star();
    let zero = Game::zero();
    assert_eq!(Game::compare(star, zero), Comparison::Incomparable);
    assert!(!(star < zero));
    assert!(!(star > zero));
    assert!(star != zero);
}

#[test]
fn nimbers_cancel() {
    for n in 0..8 {
        assert_eq!(nimber(n) + nimber(n), Game::zero());
    }
}

#[test]
fn numeric_construction() {
    let two = Game::try_new(2).unwrap();
    assert_eq!(two.birthday(), 2);
    assert_eq!(two.expanded().to_string(), "{{{|}|}|}");

    assert_eq!(fraction(1, 4).unwrap().birthday(), 3);
    assert!(matches!(fraction(1, 3), Err(GameError::NotDyadic(_))));
    assert_eq!(
        fraction(1, 3).unwrap_err().to_string(),
        "1/3 is not a dyadic rational"
    );
}

#[test]
fn dominated_options_collapse() {
    let g = Game::try_new([1, 2, 3]).unwrap();
    assert_eq!(g.left_moves(), &[Game::new_integer(3)]);
    assert_eq!(g.right_moves(), &[Game::new_integer(1)]);
    assert_eq!(g.to_string(), "{3|1}");
}

#[test]
fn mixed_arithmetic() {
    assert_eq!(Game::try_difference(5, 5.5), fraction(-1, 2));
    assert_eq!(Game::try_product(Game::up(), 1), Ok(Game::up()));
    assert_eq!(Game::try_sum(nimber(5), nimber(3)), Ok(nimber(6)));
}

#[test]
fn canonicalization_is_idempotent() {
    let test = |Small(g): Small| {
        assert_eq!(Game::new_from_moves(g.left_moves().to_vec(), g.right_moves().to_vec()), g);
    };
    QuickCheck::new()
        .r#gen(Gen::new(8))
        .tests(100)
        .quickcheck(test as fn(Small));
}

#[test]
fn exactly_one_relation_holds() {
    let test = |Small(g): Small, Small(h): Small| {
        let relations = [g < h, g > h, g == h, Game::compare(g, h) == Comparison::Incomparable];
        assert_eq!(relations.iter().filter(|&&holds| holds).count(), 1);
        assert_eq!(Game::compare(g, h), Game::compare(h, g).flip());
    };
    QuickCheck::new()
        .r#gen(Gen::new(6))
        .tests(50)
        .quickcheck(test as fn(Small, Small));
}

#[test]
fn group_laws() {
    let test = |Small(x): Small, Small(y): Small, Small(z): Small| {
        assert_eq!(x + Game::zero(), x);
        assert_eq!(x + (-x), Game::zero());
        assert_eq!(x + y, y + x);
        assert_eq!((x + y) + z, x + (y + z));
    };
    QuickCheck::new()
        .r#gen(Gen::new(4))
        .tests(30)
        .quickcheck(test as fn(Small, Small, Small));
}
