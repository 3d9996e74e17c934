use std::path::PathBuf;

use chrono::Utc;
use seedsweep_config::{Configuration, LogFormatSetting, LoggingSettings};
use seedsweep_telemetry::{LogFormat, LoggingConfig};
use seedsweep_transmission::{DEFAULT_TIMEOUT, TransmissionConnector};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::healthcheck::HealthcheckPinger;
use crate::orchestrator::{RunSummary, run_purge};

/// Inputs for one seedsweep run.
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Configuration document to load.
    pub config_path: PathBuf,
    /// Issue removals instead of only reporting them.
    pub prune: bool,
}

/// Entry point for a single seedsweep run.
///
/// Loads the configuration once, installs logging from it, then performs
/// one purge pass against the Transmission daemon.
///
/// # Errors
///
/// Returns an error if configuration, logging setup or the purge pass fails.
pub async fn run_app(args: RunArgs) -> AppResult<RunSummary> {
    let config = seedsweep_config::load(&args.config_path)
        .map_err(|err| AppError::config("config.load", err))?;
    seedsweep_telemetry::init_logging(&logging_config(&config.logging))
        .map_err(|err| AppError::telemetry("telemetry.init", err))?;

    info!(
        config = %args.config_path.display(),
        rpc_url = %config.connection.rpc_url,
        dry_run = !args.prune,
        "seedsweep run starting"
    );

    let summary = run_with(&config, !args.prune).await?;

    info!(
        evaluated = summary.evaluated,
        purge = summary.purge_count(),
        protected = summary.protected_count(),
        removed = summary.removed,
        healthcheck = summary.healthcheck_sent,
        "seedsweep run finished"
    );
    Ok(summary)
}

async fn run_with(config: &Configuration, dry_run: bool) -> AppResult<RunSummary> {
    let healthcheck =
        HealthcheckPinger::new(config.connection.timeout.unwrap_or(DEFAULT_TIMEOUT))?;
    run_purge(
        config,
        &TransmissionConnector,
        &healthcheck,
        dry_run,
        Utc::now(),
    )
    .await
}

fn logging_config(settings: &LoggingSettings) -> LoggingConfig<'_> {
    LoggingConfig {
        level: &settings.level,
        format: settings
            .format
            .map_or_else(LogFormat::infer, |format| match format {
                LogFormatSetting::Pretty => LogFormat::Pretty,
                LogFormatSetting::Json => LogFormat::Json,
            }),
        file: settings.file.as_deref(),
    }
}
