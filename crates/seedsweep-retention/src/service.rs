//! Retention evaluator.
//!
//! # Design
//! - Pure: no IO, no clock access. The reference instant is supplied once per
//!   run so every torrent in a pass is judged against the same "now".
//! - Rules apply in a fixed order: tracker protection, then the high-ratio
//!   rule, then the low-ratio rule. Comparisons are strict on both sides, so a
//!   ratio exactly equal to `min_ratio` is always kept.
//! - Threshold ordering (`min_days` <= `max_days`) is not enforced.
//! - Only downloads still missing data are spared by the completion basis; a
//!   complete torrent that never recorded `doneDate` ages from `addedDate`.

use chrono::{DateTime, TimeDelta, Utc};
use seedsweep_config::{AgeBasis, RetentionPolicy};
use seedsweep_torrent_core::TorrentRecord;

use crate::error::{RetentionError, RetentionResult};
use crate::model::{Decision, Rule};

/// Applies a [`RetentionPolicy`] to torrent records at a fixed instant.
#[derive(Debug, Clone)]
pub struct RetentionEvaluator<'a> {
    policy: &'a RetentionPolicy,
    now: DateTime<Utc>,
    min_age: TimeDelta,
    max_age: TimeDelta,
}

impl<'a> RetentionEvaluator<'a> {
    #[must_use]
    /// Build an evaluator judging ages relative to `now`.
    pub fn new(policy: &'a RetentionPolicy, now: DateTime<Utc>) -> Self {
        Self {
            policy,
            now,
            min_age: TimeDelta::days(i64::from(policy.min_days)),
            max_age: TimeDelta::days(i64::from(policy.max_days)),
        }
    }

    #[must_use]
    /// Reference instant used for every evaluation.
    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Decide whether `record` is kept or purged.
    ///
    /// # Errors
    ///
    /// Returns [`RetentionError::Timestamp`] when the timestamp selected by the
    /// policy's age basis is not a usable instant.
    pub fn evaluate(&self, record: &TorrentRecord) -> RetentionResult<Decision> {
        if let Some(pattern) = self.protecting_pattern(record) {
            return Ok(Decision {
                rule: Rule::ProtectedTracker {
                    pattern: pattern.to_string(),
                },
                timestamp: None,
                age: None,
            });
        }

        let Some(timestamp) = self.basis_timestamp(record)? else {
            return Ok(Decision {
                rule: Rule::NotCompleted,
                timestamp: None,
                age: None,
            });
        };

        let age = self.now - timestamp;
        let ratio = record.ratio;
        let min_ratio = self.policy.min_ratio;

        let rule = if age > self.min_age && ratio > min_ratio {
            Rule::HighRatioAgedOut
        } else if age > self.max_age && ratio < min_ratio {
            Rule::LowRatioLongAged
        } else {
            Rule::WithinPolicy
        };

        Ok(Decision {
            rule,
            timestamp: Some(timestamp),
            age: Some(age),
        })
    }

    /// Instant the policy's age basis measures from.
    ///
    /// Returns `None` for a download that is still missing data when ages are
    /// measured from completion. A complete torrent without a completion date
    /// (data that was already on disk when added) is measured from `addedDate`.
    ///
    /// # Errors
    ///
    /// Returns [`RetentionError::Timestamp`] when the selected field is not a
    /// positive, representable unix timestamp.
    pub fn basis_timestamp(
        &self,
        record: &TorrentRecord,
    ) -> RetentionResult<Option<DateTime<Utc>>> {
        let (field, value) = match self.policy.age_basis {
            AgeBasis::Completed if !record.complete => return Ok(None),
            AgeBasis::Completed if record.done_epoch != 0 => ("doneDate", record.done_epoch),
            AgeBasis::Completed | AgeBasis::Added => ("addedDate", record.added_epoch),
        };

        let invalid = || RetentionError::Timestamp {
            torrent: record.name.clone(),
            field,
            value,
        };
        if value <= 0 {
            return Err(invalid());
        }
        DateTime::from_timestamp(value, 0)
            .map(Some)
            .ok_or_else(invalid)
    }

    fn protecting_pattern(&self, record: &TorrentRecord) -> Option<&'a str> {
        let policy = self.policy;
        policy
            .excluded_trackers
            .iter()
            .find(|pattern| {
                record
                    .trackers
                    .iter()
                    .any(|announce| announce.contains(pattern.as_str()))
            })
            .map(String::as_str)
    }
}
