use std::path::PathBuf;

use clap::Parser;
use seedsweep_app::{AppError, RunArgs, run_app};
use seedsweep_config::DEFAULT_CONFIG_FILE;

/// Parse the command line, perform one run and return the process exit code.
pub async fn run() -> i32 {
    execute(Cli::parse()).await
}

async fn execute(cli: Cli) -> i32 {
    let args = RunArgs {
        config_path: cli.config,
        prune: cli.prune,
    };
    match run_app(args).await {
        Ok(_) => 0,
        Err(err) => {
            let err = CliError::from(err);
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "seedsweep",
    version,
    about = "Purge aged and well-seeded torrents from a Transmission daemon"
)]
pub(crate) struct Cli {
    /// Remove matching torrents and their data; without it the run only reports.
    #[arg(short = 'p', long)]
    prune: bool,
    /// YAML configuration document.
    #[arg(
        short = 'c',
        long,
        env = "SEEDSWEEP_CONFIG",
        default_value = DEFAULT_CONFIG_FILE
    )]
    config: PathBuf,
}

#[derive(Debug)]
enum CliError {
    Validation(anyhow::Error),
    Failure(anyhow::Error),
}

impl CliError {
    const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    fn display_message(&self) -> String {
        match self {
            Self::Validation(error) | Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl From<AppError> for CliError {
    fn from(error: AppError) -> Self {
        if error.is_config() {
            Self::Validation(error.into())
        } else {
            Self::Failure(error.into())
        }
    }
}
