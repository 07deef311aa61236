//! HTTP client for the BudgetPay backend.
//!
//! Every call resolves to either a validated [`UserProfile`](bp_core::UserProfile)
//! or a [`ClientError`] naming what went wrong, so callers never have to
//! inspect raw response bodies.

pub(crate) mod client;
pub(crate) mod error;


pub use client::{ApiClient, EMAIL_CONFLICT_MESSAGE};
pub use error::{ClientError, Result as ApiResult};
