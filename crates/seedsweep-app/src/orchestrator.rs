//! Purge pass over every torrent known to the daemon.
//!
//! # Design
//! - One connection, one listing, one evaluator fixed at the supplied instant.
//! - Removal is only issued for live runs; purge decisions are logged either way.
//! - The first failure of any kind ends the pass. Removals already issued stay done.
//! - The healthcheck fires after a complete pass, dry runs included.

use chrono::{DateTime, Utc};
use seedsweep_config::Configuration;
use seedsweep_retention::{Decision, RetentionEvaluator, Rule, Verdict};
use seedsweep_torrent_core::{
    RemoveTorrent, RpcEndpoint, TorrentClient, TorrentConnector, TorrentId, TorrentRecord,
};
use tracing::{Instrument, debug, info, info_span};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::healthcheck::HealthcheckPinger;

/// Logged outcome for a torrent that was purged or spared by a tracker exclusion.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionReport {
    /// Daemon identifier.
    pub id: TorrentId,
    /// Display name.
    pub name: String,
    /// Timestamp selected by the age basis, when the daemon reported one.
    pub timestamp: Option<DateTime<Utc>>,
    /// Seed ratio at evaluation time.
    pub ratio: f64,
    /// Rule that matched.
    pub rule: Rule,
    /// Whether a removal request was issued.
    pub removed: bool,
}

/// What a completed pass did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Whether removals were suppressed.
    pub dry_run: bool,
    /// Number of torrents evaluated.
    pub evaluated: usize,
    /// Purge and protected-tracker decisions, in daemon order.
    pub reports: Vec<DecisionReport>,
    /// Number of removal requests issued.
    pub removed: usize,
    /// Whether the healthcheck endpoint was pinged.
    pub healthcheck_sent: bool,
}

impl RunSummary {
    /// Torrents that matched a purge rule, removed or not.
    #[must_use]
    pub fn purge_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|report| report.rule.verdict() == Verdict::Purge)
            .count()
    }

    /// Torrents spared by a tracker exclusion.
    #[must_use]
    pub fn protected_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|report| matches!(report.rule, Rule::ProtectedTracker { .. }))
            .count()
    }
}

/// Evaluate every torrent on the daemon and purge the ones the policy selects.
///
/// Ages are measured against `now` for the whole pass. When `dry_run` is set
/// no removal is requested.
///
/// # Errors
///
/// Returns the first failure encountered: connecting, listing, evaluating a
/// torrent, removing a torrent, or pinging the healthcheck.
pub async fn run_purge(
    config: &Configuration,
    connector: &dyn TorrentConnector,
    healthcheck: &HealthcheckPinger,
    dry_run: bool,
    now: DateTime<Utc>,
) -> AppResult<RunSummary> {
    let span = info_span!("purge_run", run_id = %Uuid::new_v4(), dry_run);
    run_pass(config, connector, healthcheck, dry_run, now)
        .instrument(span)
        .await
}

async fn run_pass(
    config: &Configuration,
    connector: &dyn TorrentConnector,
    healthcheck: &HealthcheckPinger,
    dry_run: bool,
    now: DateTime<Utc>,
) -> AppResult<RunSummary> {
    let endpoint = RpcEndpoint {
        url: config.connection.rpc_url.clone(),
        username: config.connection.username.clone(),
        password: config.connection.password.clone(),
        timeout: config.connection.timeout,
    };
    let client = connector
        .connect(&endpoint)
        .await
        .map_err(|err| AppError::torrent("torrent.connect", err))?;
    let torrents = client
        .list_torrents()
        .await
        .map_err(|err| AppError::torrent("torrent.list", err))?;
    info!(count = torrents.len(), now = %now.to_rfc3339(), "evaluating torrents");

    let evaluator = RetentionEvaluator::new(&config.policy, now);
    let mut summary = RunSummary {
        dry_run,
        ..RunSummary::default()
    };

    for torrent in &torrents {
        let decision = evaluator
            .evaluate(torrent)
            .map_err(|err| AppError::retention("retention.evaluate", err))?;
        summary.evaluated += 1;

        // Protected torrents skip timestamp checks; log the basis field anyway.
        let timestamp = decision
            .timestamp
            .or_else(|| evaluator.basis_timestamp(torrent).ok().flatten());
        let Some(report) =
            apply_decision(client.as_ref(), torrent, decision, timestamp, dry_run).await?
        else {
            continue;
        };
        if report.removed {
            summary.removed += 1;
        }
        summary.reports.push(report);
    }

    if let Some(url) = &config.healthcheck_url {
        healthcheck.ping(url).await?;
        summary.healthcheck_sent = true;
    }

    Ok(summary)
}

async fn apply_decision(
    client: &dyn TorrentClient,
    torrent: &TorrentRecord,
    decision: Decision,
    timestamp: Option<DateTime<Utc>>,
    dry_run: bool,
) -> AppResult<Option<DecisionReport>> {
    let shown = timestamp.map_or_else(|| "unknown".to_string(), |ts| ts.to_rfc3339());

    match &decision.rule {
        Rule::HighRatioAgedOut | Rule::LowRatioLongAged => {
            info!(
                torrent = %torrent.name,
                torrent_id = %torrent.id,
                timestamp = %shown,
                age_days = decision.age_days(),
                ratio = torrent.ratio,
                rule = decision.rule.label(),
                dry_run,
                "purge"
            );
            if !dry_run {
                client
                    .remove_torrent(&torrent.id, RemoveTorrent { with_data: true })
                    .await
                    .map_err(|err| AppError::torrent("torrent.remove", err))?;
                info!(torrent = %torrent.name, torrent_id = %torrent.id, "torrent removed");
            }
        }
        Rule::ProtectedTracker { pattern } => {
            info!(
                torrent = %torrent.name,
                timestamp = %shown,
                ratio = torrent.ratio,
                rule = decision.rule.label(),
                tracker = %pattern,
                "keep"
            );
        }
        Rule::NotCompleted | Rule::WithinPolicy => {
            debug!(
                torrent = %torrent.name,
                age_days = decision.age_days(),
                ratio = torrent.ratio,
                rule = decision.rule.label(),
                "keep"
            );
            return Ok(None);
        }
    }

    Ok(Some(DecisionReport {
        id: torrent.id.clone(),
        name: torrent.name.clone(),
        timestamp,
        ratio: torrent.ratio,
        removed: decision.is_purge() && !dry_run,
        rule: decision.rule,
    }))
}
