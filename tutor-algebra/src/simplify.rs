//! Simplification of parsed expressions into quotients of polynomials.
//!
//! Where [expansion](crate::expand) only accepts polynomials, simplification also accepts
//! divisions by expressions containing symbols and negative integer powers. The result is a
//! [`Simplified`] value, the quotient of two expanded polynomials.
//!
//! Two simplified values are compared by cross-multiplication with [`Simplified::checked_eq`]:
//! `a/b` equals `c/d` exactly when `a*d` and `c*b` expand to the same polynomial. This decides equality of rational expressions
//! without needing to cancel common factors first, so `x/x` equals `1` and `(x^2 - 1)/(x - 1)`
//! equals `x + 1`, even though neither quotient is reduced.

use crate::{
    error,
    expand::{integer_exponent, number, too_large, unsupported_call},
    parser::ast::{BinOp, Expr, Literal, UnaryOp},
    polynomial::{Monomial, Polynomial, MAX_TERMS},
};
use std::fmt;
use tutor_error::Error;

/// The quotient of two polynomials. The denominator is never zero.
#[derive(Debug, Clone)]
pub struct Simplified {
    numerator: Polynomial,
    denominator: Polynomial,
}

impl Simplified {
    /// Wraps a polynomial, with a denominator of `1`.
    pub fn polynomial(numerator: Polynomial) -> Self {
        Self { numerator, denominator: Polynomial::constant(1) }
    }

    /// Creates the quotient `numerator / denominator`, returning [`None`] if the denominator is
    /// zero.
    ///
    /// Constant factors of the denominator are moved into the numerator, and a denominator
    /// consisting of a single term is cancelled if it divides every term of the numerator.
    pub fn quotient(numerator: Polynomial, denominator: Polynomial) -> Option<Self> {
        if denominator.is_zero() {
            return None;
        }
        if numerator.is_zero() {
            return Some(Self::polynomial(numerator));
        }

        if let Some(term) = denominator.as_term() {
            if let Some(reduced) = numerator.div_term(term.coefficient, term.monomial) {
                return Some(Self::polynomial(reduced));
            }
        }

        // make the leading coefficient of the denominator 1, so `x/(2y)` and `(x/2)/y` agree
        let leading = denominator.terms()
            .min_by(|a, b| a.monomial.display_cmp(b.monomial))
            .map(|term| term.coefficient.clone())?;
        Some(Self {
            numerator: numerator.div_term(&leading, &Monomial::one())?,
            denominator: denominator.div_term(&leading, &Monomial::one())?,
        })
    }

    /// Returns the numerator.
    pub fn numerator(&self) -> &Polynomial {
        &self.numerator
    }

    /// Returns the denominator.
    pub fn denominator(&self) -> &Polynomial {
        &self.denominator
    }

    /// If the denominator is `1`, returns the numerator.
    pub fn as_polynomial(&self) -> Option<&Polynomial> {
        (self.denominator.as_constant()? == 1).then_some(&self.numerator)
    }

    /// Returns true if both quotients describe the same rational function, or [`None`] if the
    /// cross-multiplication would exceed the limits of [`Polynomial::checked_mul`].
    pub fn checked_eq(&self, other: &Self) -> Option<bool> {
        if self.denominator == other.denominator {
            return Some(self.numerator == other.numerator);
        }

        let lhs = self.numerator.checked_mul(&other.denominator)?;
        let rhs = other.numerator.checked_mul(&self.denominator)?;
        Some(lhs == rhs)
    }

    /// Like [`Simplified::checked_eq`], but reports exceeding the limits as an
    /// [`ExpressionTooLarge`](error::ExpressionTooLarge) error. The error has no span, since it
    /// concerns both quotients at once.
    pub fn try_eq(&self, other: &Self) -> Result<bool, Error> {
        self.checked_eq(other)
            .ok_or_else(|| Error::new(Vec::new(), error::ExpressionTooLarge { max: MAX_TERMS }))
    }

    fn add(&self, rhs: &Self) -> Option<Self> {
        if self.denominator == rhs.denominator {
            return Self::quotient(
                self.numerator.clone() + rhs.numerator.clone(),
                self.denominator.clone(),
            );
        }

        let numerator = self.numerator.checked_mul(&rhs.denominator)?
            + rhs.numerator.checked_mul(&self.denominator)?;
        Self::quotient(numerator, self.denominator.checked_mul(&rhs.denominator)?)
    }

    fn neg(self) -> Self {
        Self { numerator: -self.numerator, denominator: self.denominator }
    }

    fn mul(&self, rhs: &Self) -> Option<Self> {
        Self::quotient(
            self.numerator.checked_mul(&rhs.numerator)?,
            self.denominator.checked_mul(&rhs.denominator)?,
        )
    }

    /// Returns `1 / self`, or [`None`] if `self` is zero.
    fn recip(&self) -> Option<Self> {
        Self::quotient(self.denominator.clone(), self.numerator.clone())
    }

    fn pow(&self, exp: i64) -> Option<Self> {
        if exp < 0 {
            return self.recip()?.pow(-exp);
        }

        let exp = u32::try_from(exp).ok()?;
        Self::quotient(
            self.numerator.checked_pow(exp)?,
            self.denominator.checked_pow(exp)?,
        )
    }
}


impl fmt::Display for Simplified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(poly) = self.as_polynomial() {
            return write!(f, "{}", poly);
        }

        let wrap = |poly: &Polynomial| if poly.term_count() > 1 || poly.as_term().is_some_and(|t| *t.coefficient < 0) {
            format!("({})", poly)
        } else {
            poly.to_string()
        };
        write!(f, "{} / {}", wrap(&self.numerator), wrap(&self.denominator))
    }
}

/// Simplifies the expression into a quotient of polynomials.
pub fn simplify_expr(expr: &Expr) -> Result<Simplified, Error> {
    match expr {
        Expr::Literal(Literal::Number(num)) => Ok(Simplified::polynomial(Polynomial::constant(number(num)?))),
        Expr::Literal(Literal::Symbol(sym)) => Ok(Simplified::polynomial(Polynomial::symbol(sym.name.as_str()))),
        Expr::Paren(paren) => simplify_expr(&paren.expr),
        Expr::Call(call) => Err(unsupported_call(call)),
        Expr::Unary(unary) => {
            let operand = simplify_expr(&unary.operand)?;
            Ok(match unary.op {
                UnaryOp::Neg => operand.neg(),
                UnaryOp::Pos => operand,
            })
        },
        Expr::Binary(binary) => {
            let lhs = simplify_expr(&binary.lhs)?;
            let result = match binary.op {
                BinOp::Add => lhs.add(&simplify_expr(&binary.rhs)?),
                BinOp::Sub => lhs.add(&simplify_expr(&binary.rhs)?.neg()),
                BinOp::Mul => lhs.mul(&simplify_expr(&binary.rhs)?),
                BinOp::Div => {
                    let rhs = simplify_expr(&binary.rhs)?;
                    let recip = rhs.recip()
                        .ok_or_else(|| Error::new(vec![binary.rhs.span()], error::DivisionByZero))?;
                    lhs.mul(&recip)
                },
                BinOp::Exp => {
                    let exp = integer_exponent(&binary.rhs)?;
                    if exp < 0 && lhs.numerator.is_zero() {
                        return Err(Error::new(vec![binary.span.clone()], error::DivisionByZero));
                    }
                    lhs.pow(exp)
                },
            };
            result.ok_or_else(|| too_large(binary.span.clone()))
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::{error, simplify};
    use pretty_assertions::assert_eq;

    /// Simplifies the input and formats the result.
    fn simplified(input: &str) -> String {
        simplify(input).unwrap().to_string()
    }

    /// Simplifies both inputs and compares them.
    fn equivalent(lhs: &str, rhs: &str) -> Option<bool> {
        simplify(lhs).unwrap().checked_eq(&simplify(rhs).unwrap())
    }

    #[test]
    fn polynomials_simplify_to_expansion() {
        assert_eq!(simplified("x + x + x"), "3*x");
        assert_eq!(simplified("2+2"), "4");
        assert_eq!(simplified("(x+1)^2 - x^2"), "2*x + 1");
    }

    #[test]
    fn monomial_denominators_cancel() {
        assert_eq!(simplified("x/x"), "1");
        assert_eq!(simplified("(2x^2 + 4x) / (2x)"), "x + 2");
        assert_eq!(simplified("x^-1 * x^3"), "x^2");
        assert_eq!(simplified("1/x"), "1 / x");
        assert_eq!(simplified("y/(2x)"), "1/2*y / x");
    }

    #[test]
    fn quotient_equality() {
        assert_eq!(equivalent("(x^2 - 1)/(x - 1)", "x + 1"), Some(true));
        assert_eq!(equivalent("1/x + 1/y", "(x + y)/(x y)"), Some(true));
        assert_eq!(equivalent("x/(2y)", "(x/2)/y"), Some(true));
        assert_eq!(equivalent("1/(x+1)", "1/x + 1"), Some(false));
    }

    #[test]
    fn unequal_constants() {
        assert_eq!(equivalent("2+2", "5"), Some(false));
        assert_eq!(equivalent("2+2", "4"), Some(true));
    }

    #[test]
    fn cross_multiplication_is_bounded() {
        // each side has 1820 terms over its denominator's 1820, so comparing needs 3.3M products
        let p = "(a+b+c+d+e)^12";
        let q = "(a+b+c+d+f)^12";
        assert_eq!(equivalent(&format!("{p}/{q}"), &format!("{q}/{p}")), None);

        let err = simplify(&format!("{p}/{q}")).unwrap()
            .try_eq(&simplify(&format!("{q}/{p}")).unwrap())
            .unwrap_err();
        assert!(err.is::<error::ExpressionTooLarge>());
        assert!(err.spans.is_empty());
    }

    #[test]
    fn division_by_zero() {
        assert!(simplify("1/(x - x)").unwrap_err().is::<error::DivisionByZero>());
        assert!(simplify("0^-1").unwrap_err().is::<error::DivisionByZero>());
    }

    #[test]
    fn unsupported() {
        assert!(simplify("sqrt(x)").unwrap_err().is::<error::UnsupportedFunction>());
        assert!(simplify("x^y").unwrap_err().is::<error::SymbolicExponent>());
    }
}
