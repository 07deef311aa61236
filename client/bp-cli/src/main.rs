//! bp - BudgetPay command line client
//!
//! # Examples
//!
//! ```bash
//! # Sign in; the session is saved under .budgetpay/data
//! bp login --email asha@example.com --password secret1
//!
//! # Finish onboarding
//! bp onboard --name Asha --income 50000
//!
//! # Monthly numbers, with per-category progress
//! bp summary --budget budget.json --goal 10000 --days-left 12
//! ```

use bp_api::ApiClient;
use bp_cli::bootstrap::{self, Route};
use bp_cli::cli::Cli;
use bp_cli::{AuthFlow, CliError, CliResult, logger, run};
use bp_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_cli(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(CliError::Flow(e)) => {
            error!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_cli(cli: Cli) -> CliResult<String> {
    // Load and validate configuration
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };
    let mut config = Config::load_from(&config_dir)?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    config.validate()?;

    let log_file = config.logging.file.as_ref().map(|file| config_dir.join(file));
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;
    config.log_summary();

    let storage = bootstrap::storage_from_config(&config, &config_dir);
    let start = bootstrap::start(storage, &config.storage.key).await;
    let store = start.store;

    let _route_log = store.subscribe_with(Route::of_state, |route: &Route| {
        info!("Route changed to {route}");
    });

    let api = ApiClient::with_timeout(&config.api.base_url, config.api.timeout())?;
    let flow = AuthFlow::new(api, store.clone());

    let result = run::execute(cli.command, &flow).await;

    if let Err(e) = store.shutdown().await {
        warn!("Session could not be saved: {e}");
        eprintln!("Warning: {}", e.recovery_hint());
    }

    result
}
