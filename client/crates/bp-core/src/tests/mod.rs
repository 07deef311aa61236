mod metrics;
mod models;
