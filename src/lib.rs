// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{app, auth, certificate, error, stats, utils};

// Re-export commonly used types
pub use modules::app::config::AppConfig;
pub use modules::auth::store::{User, UserStore};
pub use modules::error::FlowError;
pub use modules::utils::io::{ConsolePrompter, Prompter};

// Constants
pub const USERS_FILE: &str = "users.json";
pub const LOG_FILE: &str = "application.log";
pub const CERTIFICATE_DIR: &str = ".";
pub const DEFAULT_PASSWORD_LENGTH: usize = 12;
pub const CONSENT_TOKEN: &str = "Y";
pub const SUGGEST_PASSWORD_TOKEN: &str = "suggest";
