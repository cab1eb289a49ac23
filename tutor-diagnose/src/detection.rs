use crate::hints::HintPair;
use std::fmt;

/// A named misconception. Several textual patterns can map to the same rule, so the streak of a
/// rule counts repetitions of the misconception rather than of a particular pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// The leading coefficient was dropped when differentiating a power, as in `d/dx(x^2) = x`.
    PowerRuleMissingCoefficient,

    /// The square of a sum was distributed over its terms, as in `(a+b)^2 = a^2+b^2`.
    FreshmanDream,
}

impl Rule {
    /// Returns the stable identifier of the rule.
    pub fn id(self) -> &'static str {
        match self {
            Self::PowerRuleMissingCoefficient => "power_rule_missing_coefficient",
            Self::FreshmanDream => "freshman_dream",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The result of a detector matching an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    /// The misconception that was detected.
    pub rule: Rule,

    /// The hint to show the first time in a row the misconception is seen.
    pub base: &'static str,

    /// The hint to show once the misconception repeats.
    pub escalated: &'static str,
}

impl Detection {
    /// Creates a detection of the given rule with the given hints.
    pub fn new(rule: Rule, hints: &HintPair) -> Self {
        Self { rule, base: hints.base, escalated: hints.escalated }
    }
}
