pub mod age_input;
pub mod age_patch;
pub mod new_user;
pub mod user;
