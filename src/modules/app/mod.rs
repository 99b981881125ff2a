pub mod config;
pub mod menu;

pub use config::AppConfig;
pub use menu::{run_menu, show_menu, MenuChoice};
