//! Misconception detectors.
//!
//! A [`Detector`] inspects one raw expression and either recognizes a misconception in it or
//! returns [`None`]. Detectors are independent of each other and normalize their input
//! themselves, so each one can be used and tested on its own. The
//! [`Tutor`](crate::Tutor) runs them in a fixed order and stops at the first match.

mod binomial;
mod power_rule;

pub use binomial::BinomialDetector;
pub use power_rule::PowerRuleDetector;

use crate::detection::Detection;
use std::fmt::Debug;

/// Recognizes one family of misconceptions.
pub trait Detector: Debug + Send + Sync {
    /// A short name for the detector, used in logs.
    fn name(&self) -> &'static str;

    /// Inspects the raw expression, returning the detected misconception and its hints.
    fn detect(&self, expr: &str) -> Option<Detection>;
}
