use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "bp")]
#[command(about = "BudgetPay command line client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config directory (defaults to $BP_CONFIG_DIR or ./.budgetpay)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Backend URL, overriding api.base_url from config
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}
