use crate::{
    detection::{Detection, Rule},
    detector::Detector,
    hints::Catalog,
    normalize::normalize,
};
use once_cell::sync::Lazy;
use regex::Regex;

/// `d/dx(x^2) = x`, with the parentheses and the caret optional.
static LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^d/dx\(?x\^?2\)?=x$").unwrap());

/// `d/dx(x^n) = x^m`, with the parentheses and the carets optional.
static GENERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^d/dx\(?x\^?([0-9]+)\)?=x\^?([0-9]+)$").unwrap()
});

/// Detects a derivative of `x^n` written as `x^(n-1)`, without the leading coefficient `n`.
///
/// The well-known statement `d/dx(x^2) = x` is matched first and gets its own hint. Otherwise,
/// `d/dx(x^n) = x^m` is flagged when `m = n - 1`, except for `n = 1`, whose correct derivative
/// `1 * x^0` has a coefficient of one and is indistinguishable from the mistake.
#[derive(Debug, Clone, Copy)]
pub struct PowerRuleDetector {
    hints: &'static Catalog,
}

impl PowerRuleDetector {
    /// Creates a detector that uses the hints from the given catalog.
    pub fn new(hints: &'static Catalog) -> Self {
        Self { hints }
    }
}

impl Detector for PowerRuleDetector {
    fn name(&self) -> &'static str {
        "power_rule"
    }

    fn detect(&self, expr: &str) -> Option<Detection> {
        let compact = normalize(expr);

        if LITERAL.is_match(&compact) {
            return Some(Detection::new(Rule::PowerRuleMissingCoefficient, &self.hints.power_rule_literal));
        }

        let captures = GENERAL.captures(&compact)?;
        // exponents too large for a u64 are not worth a hint
        let n = captures[1].parse::<u64>().ok()?;
        let m = captures[2].parse::<u64>().ok()?;

        (n != 1 && n.checked_sub(1) == Some(m))
            .then(|| Detection::new(Rule::PowerRuleMissingCoefficient, &self.hints.power_rule_general))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hints::ENGLISH;
    use pretty_assertions::assert_eq;

    fn detect(expr: &str) -> Option<Detection> {
        PowerRuleDetector::new(&ENGLISH).detect(expr)
    }

    #[test]
    fn literal_statement() {
        let expected = Some(Detection::new(Rule::PowerRuleMissingCoefficient, &ENGLISH.power_rule_literal));

        assert_eq!(detect("d/dx(x^2)=x"), expected);
        assert_eq!(detect("d/dx (x^2) = x"), expected);
        assert_eq!(detect("D/DX(X^2) = X"), expected);
        assert_eq!(detect("d/dx x2 = x"), expected);
    }

    #[test]
    fn general_statement() {
        let expected = Some(Detection::new(Rule::PowerRuleMissingCoefficient, &ENGLISH.power_rule_general));

        assert_eq!(detect("d/dx(x^3)=x^2"), expected);
        assert_eq!(detect("d/dx(x^10) = x^9"), expected);
        assert_eq!(detect("d/dx(x^2) = x^1"), expected);
    }

    #[test]
    fn correct_or_unrelated_statements() {
        // n = 1 is not flagged
        assert_eq!(detect("d/dx(x^1) = x^0"), None);
        assert_eq!(detect("d/dx(x^3) = x^1"), None);
        assert_eq!(detect("d/dx(x^0) = x^0"), None);
        assert_eq!(detect("d/dx(x^3) = 3x^2"), None);
        assert_eq!(detect("d/dx(x^2) = 2x"), None);
        assert_eq!(detect("d/dy(y^2) = y"), None);
        assert_eq!(detect("d/dx(x^99999999999999999999999) = x^99999999999999999999998"), None);
    }
}
