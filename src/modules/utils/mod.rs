pub mod io;
pub mod logging;
pub mod time;

pub use io::{read_line, ConsolePrompter, Prompter};
pub use logging::{initialize_logging, log_auth_event, log_data_operation};
pub use time::{format_certificate_date, today};
