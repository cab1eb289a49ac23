use crate::{
    checker::{best_effort, split_equation, EquivalenceChecker},
    detection::{Detection, Rule},
    detector::Detector,
    hints::Catalog,
    normalize::normalize,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use tracing::debug;

/// `(a+b)^2 = a^2+b^2`
static LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\(a\+b\)\^2=a\^2\+b\^2$").unwrap());

/// `(u+v)^2 = p^2+q^2`
static GENERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(([a-z]+)\+([a-z]+)\)\^2=([a-z]+)\^2\+([a-z]+)\^2$").unwrap()
});

/// Detects the "Freshman's Dream": squaring a sum term by term and losing the `2uv` cross term.
///
/// Three checks run in order, and the first that matches wins:
///
/// 1. The literal statement `(a+b)^2 = a^2+b^2`.
/// 2. `(u+v)^2 = p^2+q^2` for any lowercase names, as long as `{u, v}` and `{p, q}` are the same
///    pair of names, in either order.
/// 3. If an [`EquivalenceChecker`] is available and the expression is an equation, both sides are
///    expanded. The mistake is reported if the difference involves at least two symbols and
///    contains a term with coefficient `2` spanning two or more of them, e.g.
///    `(a+b+c)^2 = a^2+b^2+c^2` or `(x+y)**2 = x**2+y**2`. Checker failures count as no match.
#[derive(Debug, Clone)]
pub struct BinomialDetector {
    hints: &'static Catalog,
    checker: Option<Arc<dyn EquivalenceChecker>>,
}

impl BinomialDetector {
    /// Creates a detector that uses the hints from the given catalog, and the given checker for
    /// the symbolic check.
    pub fn new(hints: &'static Catalog, checker: Option<Arc<dyn EquivalenceChecker>>) -> Self {
        Self { hints, checker }
    }

    /// Checks for `(u+v)^2 = p^2+q^2` with `{u, v} = {p, q}`.
    fn general(&self, compact: &str) -> Option<Detection> {
        let captures = GENERAL.captures(compact)?;
        let mut lhs = [&captures[1], &captures[2]];
        let mut rhs = [&captures[3], &captures[4]];
        lhs.sort_unstable();
        rhs.sort_unstable();

        (lhs == rhs).then(|| Detection::new(Rule::FreshmanDream, &self.hints.binomial_general))
    }

    /// Expands both sides of the equation and looks for a missing cross term.
    fn symbolic(&self, expr: &str) -> Option<Detection> {
        let (lhs, rhs) = split_equation(expr)?;
        let term = best_effort(self.checker.as_deref(), |checker| checker.missing_cross_term(lhs, rhs))??;

        debug!(cross_term = %term, "expanded difference is missing a cross term");
        Some(Detection::new(Rule::FreshmanDream, &self.hints.binomial_symbolic))
    }
}

impl Detector for BinomialDetector {
    fn name(&self) -> &'static str {
        "binomial"
    }

    fn detect(&self, expr: &str) -> Option<Detection> {
        let compact = normalize(expr);

        if LITERAL.is_match(&compact) {
            return Some(Detection::new(Rule::FreshmanDream, &self.hints.binomial_literal));
        }

        self.general(&compact)
            .or_else(|| self.symbolic(expr))
    }
}
