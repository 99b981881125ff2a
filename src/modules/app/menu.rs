use log::info;

use super::config::AppConfig;
use crate::modules::auth::store::UserStore;
use crate::modules::auth::user_interface::{handle_login, handle_registration, list_users};
use crate::modules::certificate::handle_certificate;
use crate::modules::error::FlowError;
use crate::modules::stats::handle_statistics;
use crate::modules::utils::io::Prompter;

/// Menu entries, selected by their number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Login,
    ListUsers,
    Statistics,
    Certificate,
    Exit,
}

impl MenuChoice {
    /// Exact match on the trimmed input
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Register),
            "2" => Some(MenuChoice::Login),
            "3" => Some(MenuChoice::ListUsers),
            "4" => Some(MenuChoice::Statistics),
            "5" => Some(MenuChoice::Certificate),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Function to show the main menu
pub fn show_menu(prompter: &mut dyn Prompter) {
    prompter.say("=== BEM DIGITAL - MAIN MENU ===");
    prompter.say("1. Register new user");
    prompter.say("2. Log in");
    prompter.say("3. List users");
    prompter.say("4. Generate statistics");
    prompter.say("5. Generate certificate");
    prompter.say("6. Exit");
}

/// Main read-dispatch loop. Returns when the user exits; any flow error ends the loop.
pub fn run_menu(
    store: &UserStore,
    config: &AppConfig,
    prompter: &mut dyn Prompter,
) -> Result<(), FlowError> {
    info!("Menu started with data file {}", store.path().display());
    loop {
        show_menu(prompter);
        let input = prompter.ask("Choose an option: ")?;

        match MenuChoice::parse(&input) {
            Some(MenuChoice::Register) => {
                handle_registration(store, prompter)?;
            }
            Some(MenuChoice::Login) => {
                handle_login(store, prompter)?;
            }
            Some(MenuChoice::ListUsers) => {
                list_users(store, prompter)?;
            }
            Some(MenuChoice::Statistics) => {
                handle_statistics(store, prompter)?;
            }
            Some(MenuChoice::Certificate) => {
                handle_certificate(store, &config.certificate_dir, prompter)?;
            }
            Some(MenuChoice::Exit) => {
                prompter.say("Shutting down the system.");
                info!("Menu exited by user");
                return Ok(());
            }
            None => {
                prompter.say("Invalid option.");
                prompter.say("");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::utils::io::testing::ScriptedPrompter;
    use tempfile::{tempdir, TempDir};

    fn setup() -> (UserStore, AppConfig, TempDir) {
        let dir = tempdir().unwrap();
        let config = AppConfig {
            data_file: dir.path().join("users.json"),
            certificate_dir: dir.path().to_path_buf(),
            log_file: dir.path().join("application.log"),
        };
        let store = UserStore::new(&config.data_file);
        (store, config, dir)
    }

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Register));
        assert_eq!(MenuChoice::parse(" 6 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Certificate));
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse("01"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
    }

    #[test]
    fn test_invalid_option_then_exit() {
        let (store, config, _dir) = setup();
        let mut prompter = ScriptedPrompter::new(&["9", "6"]);
        run_menu(&store, &config, &mut prompter).unwrap();

        let printed = prompter.printed();
        assert!(printed.contains("Invalid option."));
        assert!(printed.contains("Shutting down the system."));
        assert_eq!(printed.matches("=== BEM DIGITAL - MAIN MENU ===").count(), 2);
    }

    #[test]
    fn test_full_session() {
        let (store, config, dir) = setup();
        let mut prompter = ScriptedPrompter::new(&[
            "1", "Y", "Ana", "ana", "segredo", "20", "30", // register
            "1", "Y", "Bia", "bia", "outra", "20", "60", // register
            "2", "ana", "segredo", // login
            "3", // list
            "4", // statistics
            "5", "2", // certificate for Bia
            "6",
        ]);
        run_menu(&store, &config, &mut prompter).unwrap();
        assert_eq!(prompter.remaining(), 0);

        let printed = prompter.printed();
        assert!(printed.contains("Welcome, Ana!"));
        assert!(printed.contains("2. Name: Bia, Age: 20, Usage time: 60 minutes"));
        assert!(printed.contains("- Mean age: 20.00 years"));
        assert!(printed.contains("- Median usage time: 45.0 minutes"));
        assert!(dir.path().join("certificate_bia.txt").exists());
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn test_fatal_number_error_ends_loop() {
        let (store, config, _dir) = setup();
        let mut prompter =
            ScriptedPrompter::new(&["1", "Y", "Ana", "ana", "pw", "old", "30", "6"]);
        let result = run_menu(&store, &config, &mut prompter);
        assert!(matches!(result, Err(FlowError::InvalidNumber { .. })));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let (store, config, _dir) = setup();
        let mut prompter = ScriptedPrompter::new(&["3"]);
        assert!(matches!(
            run_menu(&store, &config, &mut prompter),
            Err(FlowError::Io(_))
        ));
    }
}
