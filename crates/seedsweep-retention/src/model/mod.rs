//! Retention decisions and the rules that produce them.

use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, TimeDelta, Utc};

/// What happens to a torrent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Leave the torrent alone.
    Keep,
    /// Remove the torrent and its data.
    Purge,
}

/// Rule that decided a torrent's fate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// A tracker announce URL matched an excluded pattern.
    ProtectedTracker {
        /// Excluded pattern that matched.
        pattern: String,
    },
    /// The age basis is completion and the download has not finished.
    NotCompleted,
    /// Older than `min_days` and seeded above `min_ratio`.
    HighRatioAgedOut,
    /// Older than `max_days` and seeded below `min_ratio`.
    LowRatioLongAged,
    /// No purge rule matched.
    WithinPolicy,
}

impl Rule {
    #[must_use]
    /// Verdict implied by the rule.
    pub const fn verdict(&self) -> Verdict {
        match self {
            Self::HighRatioAgedOut | Self::LowRatioLongAged => Verdict::Purge,
            Self::ProtectedTracker { .. } | Self::NotCompleted | Self::WithinPolicy => {
                Verdict::Keep
            }
        }
    }

    #[must_use]
    /// Short label used in log lines.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ProtectedTracker { .. } => "protected tracker",
            Self::NotCompleted => "not completed",
            Self::HighRatioAgedOut => "high ratio, aged out",
            Self::LowRatioLongAged => "low ratio, long aged",
            Self::WithinPolicy => "within policy",
        }
    }
}

impl Display for Rule {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// Outcome of evaluating one torrent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// Matched rule.
    pub rule: Rule,
    /// Timestamp the age was measured from, when one was consulted.
    pub timestamp: Option<DateTime<Utc>>,
    /// Age at the reference instant, when one was computed.
    pub age: Option<TimeDelta>,
}

impl Decision {
    #[must_use]
    /// Verdict implied by the matched rule.
    pub const fn verdict(&self) -> Verdict {
        self.rule.verdict()
    }

    #[must_use]
    /// Whether the torrent should be removed.
    pub const fn is_purge(&self) -> bool {
        matches!(self.verdict(), Verdict::Purge)
    }

    #[must_use]
    /// Whether the torrent was spared by a tracker exclusion.
    pub const fn is_protected(&self) -> bool {
        matches!(self.rule, Rule::ProtectedTracker { .. })
    }

    #[must_use]
    /// Whole days of age, when an age was computed.
    pub fn age_days(&self) -> Option<i64> {
        self.age.map(|age| age.num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_age_rules_purge() {
        assert_eq!(Rule::HighRatioAgedOut.verdict(), Verdict::Purge);
        assert_eq!(Rule::LowRatioLongAged.verdict(), Verdict::Purge);
        assert_eq!(Rule::WithinPolicy.verdict(), Verdict::Keep);
        assert_eq!(Rule::NotCompleted.verdict(), Verdict::Keep);
        assert_eq!(
            Rule::ProtectedTracker {
                pattern: "private".to_string()
            }
            .verdict(),
            Verdict::Keep
        );
    }

    #[test]
    fn labels_match_log_vocabulary() {
        assert_eq!(Rule::HighRatioAgedOut.to_string(), "high ratio, aged out");
        assert_eq!(Rule::LowRatioLongAged.to_string(), "low ratio, long aged");
        assert_eq!(
            Rule::ProtectedTracker {
                pattern: "x".to_string()
            }
            .to_string(),
            "protected tracker"
        );
    }
}
