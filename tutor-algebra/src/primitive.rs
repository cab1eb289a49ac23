//! Conversion of number literals to exact [`Rational`]s.

use rug::{ops::Pow, Integer, Rational};

/// Parses a decimal literal such as `12`, `0.25`, or `.5` into an exact rational. Returns
/// [`None`] if the literal is not made of ASCII digits with at most one decimal point.
pub fn rational_from_str(literal: &str) -> Option<Rational> {
    let (whole, fraction) = literal.split_once('.').unwrap_or((literal, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let digits = [whole, fraction].concat();
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let numerator = digits.parse::<Integer>().ok()?;
    let denominator = Integer::from(10).pow(u32::try_from(fraction.len()).ok()?);
    Some(Rational::from((numerator, denominator)))
}
