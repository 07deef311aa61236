mod profile_patch;
mod user_profile;
