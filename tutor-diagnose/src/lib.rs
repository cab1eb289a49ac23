//! Detection of common algebra and calculus misconceptions, with hints that escalate when the
//! same mistake is repeated.
//!
//! A [`Tutor`] inspects one expression at a time, such as `d/dx(x^2) = x`, and returns a hint
//! that nudges the student towards the mistake instead of revealing the correct answer. Which
//! misconception was seen last, and how many times in a row, is tracked in an
//! [`InteractionLog`] that the caller keeps for the duration of a session:
//!
//! ```
//! use tutor_diagnose::{InteractionLog, Tutor, Language, ENGLISH};
//!
//! let tutor = Tutor::new(Language::English);
//! let mut log = InteractionLog::new();
//!
//! assert_eq!(tutor.analyze("d/dx(x^2) = x", &mut log), ENGLISH.power_rule_literal.base);
//! assert_eq!(tutor.analyze("d/dx(x^2) = x", &mut log), ENGLISH.power_rule_literal.escalated);
//! assert_eq!(tutor.analyze("2 + 2 = 5", &mut log), ENGLISH.sides_unequal);
//! assert_eq!(log.streak(), 0);
//! ```
//!
//! When no textual pattern matches, the tutor falls back to an [`EquivalenceChecker`], which by
//! default is the [`SymbolicChecker`] built on [`tutor_algebra`]. The checker is optional; without
//! it, or when it cannot handle an expression, the tutor answers with the most neutral hint that
//! applies.

pub mod checker;
pub mod detection;
pub mod detector;
pub mod hints;
pub mod log;
pub mod normalize;
pub mod tutor;

pub use checker::{EquivalenceChecker, SymbolicChecker};
pub use detection::{Detection, Rule};
pub use detector::Detector;
pub use hints::{Catalog, HintPair, Language, UnknownLanguage, ENGLISH, TRADITIONAL_CHINESE};
pub use log::{InteractionLog, LogState};
pub use normalize::{normalize, Normalized};
pub use tutor::{Tutor, TutorBuilder, ESCALATION_THRESHOLD};
