use crate::auth_flow::AuthFlow;
use crate::commands::Commands;
use crate::{CliResult, FlowError, report};

use bp_core::{GoalProgress, MonthlySummary};

/// Run one command and return what to print.
pub async fn execute(command: Commands, flow: &AuthFlow) -> CliResult<String> {
    let output = match command {
        Commands::Login { email, password } => {
            flow.login(&email, &password).await?;
            signed_in(flow)
        }
        Commands::Signup {
            email,
            password,
            confirm,
        } => {
            flow.sign_up(&email, &password, &confirm).await?;
            signed_in(flow)
        }
        Commands::Onboard { name, income } => {
            flow.complete_onboarding(&name, income).await?;
            "Onboarding complete".to_string()
        }
        Commands::Whoami => report::whoami(flow.store().current_user().as_deref()),
        Commands::Summary {
            budget,
            goal,
            days_left,
        } => {
            let user = flow
                .store()
                .current_user()
                .ok_or_else(FlowError::not_signed_in)?;
            let categories = match budget {
                Some(path) => report::load_budget(&path)?,
                None => Vec::new(),
            };
            let month = MonthlySummary::from_profile(&user);
            let goal = goal.map(|target| GoalProgress::new(month.saving.max(0.0), target));
            report::summary(&user, &categories, goal, days_left)
        }
        Commands::Logout => {
            flow.logout();
            "Signed out".to_string()
        }
    };
    Ok(output)
}

fn signed_in(flow: &AuthFlow) -> String {
    let who = report::whoami(flow.store().current_user().as_deref());
    format!("Signed in: {who}")
}
