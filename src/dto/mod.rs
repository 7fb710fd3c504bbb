pub mod analytics;
pub mod menu;
pub mod orders;
pub mod tokens;
