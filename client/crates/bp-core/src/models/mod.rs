pub mod category_budget;
pub mod profile_patch;
pub mod user_profile;

mod serde_helpers;
