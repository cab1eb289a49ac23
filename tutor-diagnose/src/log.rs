use crate::detection::Rule;

/// The state of an [`InteractionLog`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogState {
    /// No misconception was detected in the last expression.
    #[default]
    Idle,

    /// The same misconception was detected in the last `streak` expressions in a row. `streak`
    /// is always at least 1.
    Active { rule: Rule, streak: u32 },
}

/// Per-session memory of which misconception was seen last and how many times in a row.
///
/// Each session owns its own log; a [`Tutor`](crate::Tutor) holds no session state and can serve
/// any number of logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionLog {
    state: LogState,
}

impl InteractionLog {
    /// Creates an idle log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a detection of the given rule, returning the length of the current streak.
    ///
    /// The streak grows by one if the rule is the same as the last one recorded, and starts over
    /// at one otherwise.
    pub fn record(&mut self, rule: Rule) -> u32 {
        let streak = match self.state {
            LogState::Active { rule: last, streak } if last == rule => streak.saturating_add(1),
            _ => 1,
        };
        self.state = LogState::Active { rule, streak };
        streak
    }

    /// Forgets the current streak.
    pub fn reset(&mut self) {
        self.state = LogState::Idle;
    }

    /// Returns the current state.
    pub fn state(&self) -> LogState {
        self.state
    }

    /// Returns the rule of the current streak, if any.
    pub fn last_rule(&self) -> Option<Rule> {
        match self.state {
            LogState::Idle => None,
            LogState::Active { rule, .. } => Some(rule),
        }
    }

    /// Returns the length of the current streak, which is zero when idle.
    pub fn streak(&self) -> u32 {
        match self.state {
            LogState::Idle => 0,
            LogState::Active { streak, .. } => streak,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_idle() {
        let log = InteractionLog::new();
        assert_eq!(log.state(), LogState::Idle);
        assert_eq!(log.last_rule(), None);
        assert_eq!(log.streak(), 0);
    }

    #[test]
    fn same_rule_extends_streak() {
        let mut log = InteractionLog::new();
        for expected in 1..=5 {
            assert_eq!(log.record(Rule::FreshmanDream), expected);
        }
        assert_eq!(log.state(), LogState::Active { rule: Rule::FreshmanDream, streak: 5 });
    }

    #[test]
    fn different_rule_restarts_streak() {
        let mut log = InteractionLog::new();
        log.record(Rule::FreshmanDream);
        log.record(Rule::FreshmanDream);
        assert_eq!(log.record(Rule::PowerRuleMissingCoefficient), 1);
        assert_eq!(log.last_rule(), Some(Rule::PowerRuleMissingCoefficient));
    }

    #[test]
    fn reset_goes_idle() {
        let mut log = InteractionLog::new();
        log.record(Rule::PowerRuleMissingCoefficient);
        log.reset();
        assert_eq!(log.state(), LogState::Idle);
        assert_eq!(log.streak(), 0);

        assert_eq!(log.record(Rule::PowerRuleMissingCoefficient), 1);
    }
}
