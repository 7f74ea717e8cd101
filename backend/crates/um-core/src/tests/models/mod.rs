mod age_input;
mod new_user;
mod user;
