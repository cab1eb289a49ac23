//! Exact multivariate polynomials.
//!
//! A [`Polynomial`] is stored as a map from [`Monomial`]s to their nonzero rational coefficients.
//! Because the map never holds a zero coefficient and monomials never hold a zero exponent, the
//! representation is canonical: two polynomials are mathematically equal if and only if they
//! compare equal with [`PartialEq`]. Expanded forms can therefore be compared directly, without
//! any further simplification.
//!
//! Coefficients are arbitrary-precision [`Rational`]s, so expanding `(x + 1)^60` or working with
//! decimals such as `0.1` never loses precision.

mod monomial;

pub use monomial::Monomial;

use rug::Rational;
use std::{
    collections::{btree_map::Entry, BTreeMap, BTreeSet},
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

/// The largest number of terms a polynomial produced by a checked operation may have.
pub const MAX_TERMS: usize = 10_000;

/// The largest number of term-by-term products a single checked multiplication may perform.
const MAX_PRODUCT_WORK: usize = 1_000_000;

/// A single term of a [`Polynomial`]: a nonzero coefficient and its monomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term<'a> {
    pub coefficient: &'a Rational,
    pub monomial: &'a Monomial,
}

impl Term<'_> {
    /// Returns the number of distinct symbols in this term. The term `2*x*y` spans two symbols.
    pub fn symbol_count(&self) -> usize {
        self.monomial.symbol_count()
    }
}

/// A polynomial in any number of symbols with rational coefficients.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polynomial {
    terms: BTreeMap<Monomial, Rational>,
}

impl Polynomial {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Self::default()
    }

    /// A constant polynomial.
    pub fn constant(value: impl Into<Rational>) -> Self {
        let mut poly = Self::zero();
        poly.add_term(Monomial::one(), value.into());
        poly
    }

    /// The polynomial consisting of a single symbol.
    pub fn symbol(name: impl Into<String>) -> Self {
        let mut poly = Self::zero();
        poly.add_term(Monomial::symbol(name), Rational::from(1));
        poly
    }

    /// Builds a polynomial from its terms, combining like terms.
    pub fn from_terms(terms: impl IntoIterator<Item = (Monomial, Rational)>) -> Self {
        let mut poly = Self::zero();
        for (monomial, coefficient) in terms {
            poly.add_term(monomial, coefficient);
        }
        poly
    }

    /// Adds a single term, dropping the monomial if its coefficient cancels out.
    fn add_term(&mut self, monomial: Monomial, coefficient: Rational) {
        match self.terms.entry(monomial) {
            Entry::Vacant(entry) => {
                if coefficient != 0 {
                    entry.insert(coefficient);
                }
            },
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += coefficient;
                if *entry.get() == 0 {
                    entry.remove();
                }
            },
        }
    }

    /// Returns true if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Returns the total degree of the polynomial. The zero polynomial has degree zero.
    pub fn degree(&self) -> u32 {
        self.terms.keys().map(Monomial::degree).max().unwrap_or(0)
    }

    /// If the polynomial contains no symbols, returns its value.
    pub fn as_constant(&self) -> Option<Rational> {
        match self.terms.len() {
            0 => Some(Rational::new()),
            1 => self.terms.get(&Monomial::one()).cloned(),
            _ => None,
        }
    }

    /// If the polynomial has exactly one term, returns it.
    pub fn as_term(&self) -> Option<Term<'_>> {
        if self.terms.len() == 1 {
            self.terms().next()
        } else {
            None
        }
    }

    /// Returns an iterator over the terms of the polynomial.
    pub fn terms(&self) -> impl Iterator<Item = Term<'_>> {
        self.terms
            .iter()
            .map(|(monomial, coefficient)| Term { coefficient, monomial })
    }

    /// Returns the set of symbols that appear in the polynomial.
    pub fn free_symbols(&self) -> BTreeSet<&str> {
        self.terms
            .keys()
            .flat_map(Monomial::symbols)
            .collect()
    }

    /// Multiplies every coefficient by the given factor.
    pub fn scale(&self, factor: &Rational) -> Polynomial {
        Self::from_terms(self.terms.iter().map(|(monomial, coefficient)| {
            (monomial.clone(), coefficient.clone() * factor)
        }))
    }

    /// Divides every term by `coefficient * monomial`. Returns [`None`] if some term is not
    /// divisible by the monomial, or if the coefficient is zero.
    pub fn div_term(&self, coefficient: &Rational, monomial: &Monomial) -> Option<Polynomial> {
        if *coefficient == 0 {
            return None;
        }

        let mut quotient = Self::zero();
        for (term_monomial, term_coefficient) in &self.terms {
            quotient.add_term(
                term_monomial.checked_div(monomial)?,
                term_coefficient.clone() / coefficient,
            );
        }
        Some(quotient)
    }

    /// Multiplies two polynomials, returning [`None`] if the work involved or the size of the
    /// result would exceed the fixed limits.
    pub fn checked_mul(&self, rhs: &Polynomial) -> Option<Polynomial> {
        if self.terms.len().saturating_mul(rhs.terms.len()) > MAX_PRODUCT_WORK {
            return None;
        }

        let product = self * rhs;
        (product.terms.len() <= MAX_TERMS).then_some(product)
    }

    /// Raises the polynomial to a non-negative integer power by repeated squaring, returning
    /// [`None`] if any intermediate product exceeds the fixed limits.
    pub fn checked_pow(&self, mut exp: u32) -> Option<Polynomial> {
        let mut result = Self::constant(1);
        let mut base = self.clone();

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.checked_mul(&base)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.checked_mul(&base)?;
            }
        }

        Some(result)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(mut self, rhs: Polynomial) -> Polynomial {
        for (monomial, coefficient) in rhs.terms {
            self.add_term(monomial, coefficient);
        }
        self
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        self + -rhs
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(mut self) -> Polynomial {
        for coefficient in self.terms.values_mut() {
            *coefficient = -coefficient.clone();
        }
        self
    }
}

impl<'a> Mul<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &'a Polynomial) -> Polynomial {
        let mut product = Polynomial::zero();
        for (lhs_monomial, lhs_coefficient) in &self.terms {
            for (rhs_monomial, rhs_coefficient) in &rhs.terms {
                product.add_term(
                    lhs_monomial * rhs_monomial,
                    lhs_coefficient.clone() * rhs_coefficient,
                );
            }
        }
        product
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = self.terms().collect::<Vec<_>>();
        terms.sort_by(|a, b| a.monomial.display_cmp(b.monomial));

        for (i, term) in terms.into_iter().enumerate() {
            let negative = *term.coefficient < 0;
            match (i, negative) {
                (0, true) => write!(f, "-")?,
                (0, false) => (),
                (_, true) => write!(f, " - ")?,
                (_, false) => write!(f, " + ")?,
            }

            let magnitude = term.coefficient.clone().abs();
            if term.monomial.is_constant() {
                write!(f, "{}", magnitude)?;
            } else if magnitude == 1 {
                write!(f, "{}", term.monomial)?;
            } else {
                write!(f, "{}*{}", magnitude, term.monomial)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn x() -> Polynomial {
        Polynomial::symbol("x")
    }

    fn y() -> Polynomial {
        Polynomial::symbol("y")
    }

    #[test]
    fn square_of_sum() {
        let square = (x() + y()).checked_pow(2).unwrap();
        let expected = &x() * &x() + (&x() * &y()).scale(&Rational::from(2)) + &y() * &y();

        assert_eq!(square, expected);
        assert_eq!(square.to_string(), "x^2 + 2*x*y + y^2");
        assert_eq!(square.degree(), 2);
        assert_eq!(square.free_symbols().into_iter().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn like_terms_cancel() {
        let poly = (x() + Polynomial::constant(1)) - (Polynomial::constant(1) + x());
        assert!(poly.is_zero());
        assert_eq!(poly.as_constant(), Some(Rational::new()));
        assert_eq!(poly.to_string(), "0");
    }

    #[test]
    fn display_signs_and_fractions() {
        let poly = Polynomial::from_terms([
            (Monomial::symbol("x"), Rational::from(-1)),
            (Monomial::one(), Rational::from((1, 2))),
            (Monomial::symbol("y"), Rational::from(-3)),
        ]);
        assert_eq!(poly.to_string(), "-x - 3*y + 1/2");
    }

    #[test]
    fn divide_by_term() {
        let poly = (&x() * &x()).scale(&Rational::from(2)) + x().scale(&Rational::from(4));
        let quotient = poly.div_term(&Rational::from(2), &Monomial::symbol("x")).unwrap();
        assert_eq!(quotient.to_string(), "x + 2");

        assert_eq!(poly.div_term(&Rational::from(1), &Monomial::symbol("y")), None);
        assert_eq!(poly.div_term(&Rational::new(), &Monomial::one()), None);
    }

    #[test]
    fn pow_zero_is_one() {
        assert_eq!((x() + y()).checked_pow(0), Some(Polynomial::constant(1)));
    }

    #[test]
    fn limits() {
        let sum = ["a", "b", "c", "d", "e", "f"]
            .into_iter()
            .map(Polynomial::symbol)
            .fold(Polynomial::zero(), |acc, sym| acc + sym);
        assert_eq!(sum.checked_pow(64), None);
    }
}
