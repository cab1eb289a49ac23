//! The boundary to the optional algebraic equivalence checker.
//!
//! The checker is consulted only as a fallback, when no textual pattern matched. It may be
//! missing entirely, and it may fail on input it cannot parse or expand. Both situations are
//! treated the same way: the check is inconclusive, and the tutor moves on to a more neutral
//! hint. [`best_effort`] is the single place where that policy is applied.

use std::fmt::Debug;
use tracing::{debug, trace};
use tutor_algebra::{Monomial, Polynomial, Simplified};
use tutor_error::Error;

/// Symbolic algebra used to compare the two sides of an equation.
pub trait EquivalenceChecker: Debug + Send + Sync {
    /// Simplifies the expression into a form that can be compared for equality.
    fn simplify(&self, expr: &str) -> Result<Simplified, Error>;

    /// Expands the expression into its canonical polynomial form.
    fn expand(&self, expr: &str) -> Result<Polynomial, Error>;

    /// Simplifies both sides and returns true if they are equivalent. Fails if either side
    /// cannot be simplified, or if comparing them would exceed the size limits.
    fn equivalent(&self, lhs: &str, rhs: &str) -> Result<bool, Error> {
        self.simplify(lhs)?.try_eq(&self.simplify(rhs)?)
    }

    /// Expands `lhs - rhs` and looks for the cross term left out when a square of a sum is
    /// distributed term by term.
    ///
    /// The cross term is a term of the difference whose coefficient is exactly `2` and which
    /// spans at least two symbols, in a difference involving at least two symbols. For
    /// `(x+y)^2 = x^2+y^2`, the difference is `2*x*y`, and `x*y` is returned.
    fn missing_cross_term(&self, lhs: &str, rhs: &str) -> Result<Option<Monomial>, Error> {
        let difference = self.expand(lhs)? - self.expand(rhs)?;
        if difference.free_symbols().len() < 2 {
            return Ok(None);
        }

        let cross_term = difference.terms()
            .find(|term| *term.coefficient == 2 && term.symbol_count() >= 2)
            .map(|term| term.monomial.clone());
        Ok(cross_term)
    }
}

/// The checker backed by [`tutor_algebra`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolicChecker;

impl EquivalenceChecker for SymbolicChecker {
    fn simplify(&self, expr: &str) -> Result<Simplified, Error> {
        tutor_algebra::simplify(expr)
    }

    fn expand(&self, expr: &str) -> Result<Polynomial, Error> {
        tutor_algebra::expand(expr)
    }
}

/// Splits an equation at its first `=` into the left and right-hand side.
pub fn split_equation(expr: &str) -> Option<(&str, &str)> {
    expr.split_once('=')
}

/// Runs the operation with the checker, if there is one.
///
/// Returns [`None`] if the checker is absent or the operation fails. Failures are logged and
/// never propagated.
pub(crate) fn best_effort<T>(
    checker: Option<&dyn EquivalenceChecker>,
    op: impl FnOnce(&dyn EquivalenceChecker) -> Result<T, Error>,
) -> Option<T> {
    let Some(checker) = checker else {
        trace!("no equivalence checker available");
        return None;
    };

    match op(checker) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(kind = ?err.kind, spans = ?err.spans, "equivalence check inconclusive");
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_at_first_equals_sign() {
        assert_eq!(split_equation("a = b"), Some(("a ", " b")));
        assert_eq!(split_equation("a == b"), Some(("a ", "= b")));
        assert_eq!(split_equation("a + b"), None);
    }

    #[test]
    fn cross_term() {
        let checker = SymbolicChecker;
        assert_eq!(
            checker.missing_cross_term("(x+y)^2", "x^2+y^2").unwrap(),
            Some(&Monomial::symbol("x") * &Monomial::symbol("y")),
        );
        assert_eq!(checker.missing_cross_term("(x+y)^2", "x^2+2xy+y^2").unwrap(), None);
        assert!(checker.missing_cross_term("(x+y)^2", "cos(x)").is_err());
    }

    #[test]
    fn equivalence() {
        let checker = SymbolicChecker;
        assert!(checker.equivalent("(x+1)^2", "x^2 + 2x + 1").unwrap());
        assert!(!checker.equivalent("2+2", "5").unwrap());

        let p = "(a+b+c+d+e)^12";
        let q = "(a+b+c+d+f)^12";
        let err = checker.equivalent(&format!("{p}/{q}"), &format!("{q}/{p}")).unwrap_err();
        assert!(err.is::<tutor_algebra::error::ExpressionTooLarge>());
    }

    #[test]
    fn absence_and_failure_are_both_inconclusive() {
        assert_eq!(best_effort(None, |checker| checker.expand("x")), None);
        assert_eq!(best_effort(Some(&SymbolicChecker), |checker| checker.expand("x +")), None);
        assert_eq!(
            best_effort(Some(&SymbolicChecker), |checker| checker.expand("x")),
            Some(Polynomial::symbol("x")),
        );
    }
}
