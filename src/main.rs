use log::error;
use std::process;

use bem_digital::app::run_menu;
use bem_digital::utils::initialize_logging;
use bem_digital::{AppConfig, ConsolePrompter, UserStore};

fn main() {
    let config = AppConfig::from_args();

    if let Err(e) = initialize_logging(&config.log_file) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    let store = UserStore::new(&config.data_file);
    let mut prompter = ConsolePrompter::new();

    if let Err(e) = run_menu(&store, &config, &mut prompter) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
