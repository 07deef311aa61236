mod budget_usage;
mod chart;
mod goal_progress;
mod monthly_summary;
mod property_tests;
