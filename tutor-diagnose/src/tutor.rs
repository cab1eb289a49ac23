use crate::{
    checker::{best_effort, split_equation, EquivalenceChecker, SymbolicChecker},
    detection::Detection,
    detector::{BinomialDetector, Detector, PowerRuleDetector},
    hints::{Catalog, Language},
    log::InteractionLog,
};
use std::sync::Arc;
use tracing::{debug, trace};

/// The streak at which the escalated hint replaces the base hint.
pub const ESCALATION_THRESHOLD: u32 = 2;

/// Runs the detectors over an expression and picks the hint to show.
///
/// A [`Tutor`] holds no session state: the streak of repeated misconceptions lives in the
/// [`InteractionLog`] passed to [`Tutor::analyze`], so one tutor can serve many sessions at once.
#[derive(Debug)]
pub struct Tutor {
    /// Detectors in priority order. The first one that matches wins.
    detectors: Vec<Box<dyn Detector>>,

    /// Used to compare both sides of an equation when no detector matches.
    checker: Option<Arc<dyn EquivalenceChecker>>,

    hints: &'static Catalog,
}

impl Default for Tutor {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Tutor {
    /// Creates a tutor that speaks the given language and uses the [`SymbolicChecker`].
    pub fn new(language: Language) -> Self {
        Self::builder().language(language).build()
    }

    /// Returns a builder to configure the tutor.
    pub fn builder() -> TutorBuilder {
        TutorBuilder::default()
    }

    /// Returns the detectors, in the order they run.
    pub fn detectors(&self) -> impl Iterator<Item = &dyn Detector> {
        self.detectors.iter().map(|detector| detector.as_ref())
    }

    /// Returns the catalog the hints are taken from.
    pub fn catalog(&self) -> &'static Catalog {
        self.hints
    }

    /// Returns true if an equivalence checker is configured.
    pub fn has_checker(&self) -> bool {
        self.checker.is_some()
    }

    /// Analyzes the raw expression and returns the hint to show, updating the session's log.
    ///
    /// If a detector recognizes a misconception, the detection is recorded in the log, and the
    /// escalated hint is returned once the same misconception has been seen
    /// [`ESCALATION_THRESHOLD`] times in a row. Otherwise the log is reset, and the sides of the
    /// equation are compared with the equivalence checker. If they differ, a generic hint to
    /// re-derive is returned. In every other case, including a missing or failing checker, the
    /// neutral hint is returned.
    pub fn analyze(&self, expr: &str, log: &mut InteractionLog) -> &'static str {
        if let Some((name, detection)) = self.detect(expr) {
            let streak = log.record(detection.rule);
            debug!(detector = name, rule = %detection.rule, streak, "misconception detected");

            return if streak >= ESCALATION_THRESHOLD {
                detection.escalated
            } else {
                detection.base
            };
        }

        debug!(previous = ?log.state(), "interaction log reset");
        log.reset();
        if self.sides_unequal(expr) {
            debug!("sides of the equation are not equal");
            self.hints.sides_unequal
        } else {
            trace!("no misconception detected");
            self.hints.neutral
        }
    }

    /// Runs the detectors in order, returning the first detection along with the name of the
    /// detector that made it.
    fn detect(&self, expr: &str) -> Option<(&'static str, Detection)> {
        self.detectors.iter()
            .find_map(|detector| detector.detect(expr).map(|detection| (detector.name(), detection)))
    }

    /// Returns true only if the checker can compare both sides of the equation and finds them
    /// different.
    fn sides_unequal(&self, expr: &str) -> bool {
        let Some((lhs, rhs)) = split_equation(expr) else {
            return false;
        };

        best_effort(self.checker.as_deref(), |checker| checker.equivalent(lhs, rhs))
            .is_some_and(|equivalent| !equivalent)
    }
}

/// Configures a [`Tutor`].
#[derive(Debug, Clone)]
pub struct TutorBuilder {
    language: Language,
    checker: Option<Arc<dyn EquivalenceChecker>>,
}

impl Default for TutorBuilder {
    fn default() -> Self {
        Self {
            language: Language::default(),
            checker: Some(Arc::new(SymbolicChecker)),
        }
    }
}

impl TutorBuilder {
    /// Sets the language of the hints.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Uses the given equivalence checker instead of the [`SymbolicChecker`].
    pub fn checker(mut self, checker: Arc<dyn EquivalenceChecker>) -> Self {
        self.checker = Some(checker);
        self
    }

    /// Disables the equivalence checker. Only textual detection is performed.
    pub fn without_checker(mut self) -> Self {
        self.checker = None;
        self
    }

    pub fn build(self) -> Tutor {
        let hints = self.language.catalog();
        let detectors: Vec<Box<dyn Detector>> = vec![
            Box::new(PowerRuleDetector::new(hints)),
            Box::new(BinomialDetector::new(hints, self.checker.clone())),
        ];

        Tutor { detectors, checker: self.checker, hints }
    }
}
