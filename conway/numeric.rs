//! Exact numeric values that appear inside games

pub mod dyadic_rational_number;
pub mod nimber;
