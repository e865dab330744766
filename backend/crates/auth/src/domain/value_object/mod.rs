//! Value Object Module

pub mod news_preferences;
pub mod user_id;
pub mod user_name;
pub mod user_password;
