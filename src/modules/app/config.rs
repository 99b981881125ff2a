use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;

use crate::{CERTIFICATE_DIR, LOG_FILE, USERS_FILE};

/// Runtime paths for the data file, certificates and log
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub certificate_dir: PathBuf,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(USERS_FILE),
            certificate_dir: PathBuf::from(CERTIFICATE_DIR),
            log_file: PathBuf::from(LOG_FILE),
        }
    }
}

impl AppConfig {
    /// Command-line definition
    pub fn command() -> Command {
        Command::new("bem-digital")
            .about("Bem Digital user registry: registration, login, statistics and certificates")
            .arg(
                Arg::new("data-file")
                    .long("data-file")
                    .help("JSON document holding registered users")
                    .value_name("PATH")
                    .default_value(USERS_FILE),
            )
            .arg(
                Arg::new("certificate-dir")
                    .long("certificate-dir")
                    .help("Directory where certificates are written")
                    .value_name("DIR")
                    .default_value(CERTIFICATE_DIR),
            )
            .arg(
                Arg::new("log-file")
                    .long("log-file")
                    .help("File receiving application logs")
                    .value_name("PATH")
                    .default_value(LOG_FILE),
            )
    }

    pub fn from_matches(matches: &ArgMatches) -> Self {
        let path_or = |id: &str, default: &str| {
            PathBuf::from(
                matches
                    .get_one::<String>(id)
                    .map(String::as_str)
                    .unwrap_or(default),
            )
        };

        Self {
            data_file: path_or("data-file", USERS_FILE),
            certificate_dir: path_or("certificate-dir", CERTIFICATE_DIR),
            log_file: path_or("log-file", LOG_FILE),
        }
    }

    /// Parse the process arguments
    pub fn from_args() -> Self {
        Self::from_matches(&Self::command().get_matches())
    }
}
