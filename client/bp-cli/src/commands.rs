use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Must match --password
        #[arg(long)]
        confirm: String,
    },

    /// Enter name and monthly income for the signed-in user
    Onboard {
        #[arg(long)]
        name: String,
        #[arg(long)]
        income: f64,
    },

    /// Show the signed-in user
    Whoami,

    /// Show the monthly summary
    Summary {
        /// JSON array of categories: [{"name", "allocated", "spent"}]
        #[arg(long)]
        budget: Option<PathBuf>,
        /// Monthly savings goal
        #[arg(long)]
        goal: Option<f64>,
        /// Days left in the month, for the daily savings target
        #[arg(long, requires = "goal")]
        days_left: Option<u32>,
    },

    /// Sign out and forget the saved session
    Logout,
}
