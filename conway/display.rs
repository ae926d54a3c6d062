//! Display utilities

use std::fmt::{self, Display, Write};

fn sep(w: &mut impl Write, separator: &str, xs: &[impl Display]) -> fmt::Result {
    for (idx, v) in xs.iter().enumerate() {
        if idx != 0 {
            write!(w, "{}", separator)?;
        }
        write!(w, "{}", v)?;
    }
    Ok(())
}

/// Write values separated with commas, without spaces, e.g. `1,*,↑`
#[inline]
pub fn commas(w: &mut impl Write, xs: &[impl Display]) -> fmt::Result {
    sep(w, ",", xs)
}

fn bracket<W>(
    w: &mut W,
    left: &impl Display,
    right: &impl Display,
    middle: impl FnOnce(&mut W) -> fmt::Result,
) -> fmt::Result
where
    W: Write,
{
    write!(w, "{}", left)?;
    middle(w)?;
    write!(w, "{}", right)?;
    Ok(())
}

pub fn braces<W>(w: &mut W, middle: impl FnOnce(&mut W) -> fmt::Result) -> fmt::Result
where
    W: Write,
{
    bracket(w, &"{", &"}", middle)
}

#[test]
fn braces_with_commas() {
    let mut out = String::new();
    braces(&mut out, |w| {
        commas(w, &[1, 2, 3])?;
        write!(w, "|")?;
        commas(w, &[4])
    })
    .unwrap();
    assert_eq!(out, "{1,2,3|4}");
}
