//! bp-cli library
//!
//! Composition root for the BudgetPay client: logging, bootstrap, and the
//! flows behind each command.

pub mod auth_flow;
pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod report;
pub mod run;

#[cfg(test)]
mod tests;

pub use auth_flow::AuthFlow;
pub use bootstrap::{Bootstrap, Route};
pub use error::{CliError, FlowError, FlowResult, Result as CliResult};
