use std::fs;
use std::path::{Path, PathBuf};

use super::template::{certificate_path, render_certificate, select_user};
use crate::modules::auth::store::UserStore;
use crate::modules::error::FlowError;
use crate::modules::utils::io::Prompter;
use crate::modules::utils::logging::log_data_operation;
use crate::modules::utils::time::today;

/// Result of the certificate flow
#[derive(Debug, PartialEq)]
pub enum CertificateOutcome {
    Issued(PathBuf),
    NoUsers,
    InvalidSelection,
}

/// Let the user pick a registered user and write their certificate into `dir`.
///
/// An existing certificate for the same username is overwritten.
pub fn handle_certificate(
    store: &UserStore,
    dir: &Path,
    prompter: &mut dyn Prompter,
) -> Result<CertificateOutcome, FlowError> {
    let users = store.load()?;
    if users.is_empty() {
        prompter.say("No registered users.");
        prompter.say("");
        return Ok(CertificateOutcome::NoUsers);
    }

    prompter.say("Select the user number to generate the certificate:");
    for (i, user) in users.iter().enumerate() {
        prompter.say(&format!("{}. {}", i + 1, user.name));
    }

    let answer = prompter.ask("Enter the corresponding number: ")?;
    let user = match select_user(&users, &answer) {
        Some(user) => user,
        None => {
            prompter.say("Invalid option.");
            prompter.say("");
            return Ok(CertificateOutcome::InvalidSelection);
        }
    };

    let path = certificate_path(dir, &user.username);
    let resource = path.display().to_string();
    if let Err(e) = fs::write(&path, render_certificate(&user.name, today())) {
        log_data_operation("issue_certificate", &user.username, &resource, false, Some(&e.to_string()));
        return Err(FlowError::Io(e));
    }
    log_data_operation("issue_certificate", &user.username, &resource, true, None);

    prompter.say(&format!("Certificate generated successfully: {}", resource));
    prompter.say("");
    Ok(CertificateOutcome::Issued(path))
}
