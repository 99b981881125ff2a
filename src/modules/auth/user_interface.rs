// src/modules/auth/user_interface.rs
use super::consent::request_consent;
use super::password::generate_password;
use super::store::{authenticate, User, UserStore};
use crate::modules::error::FlowError;
use crate::modules::utils::io::{ask_number, Prompter};
use crate::modules::utils::logging::log_auth_event;
use crate::{DEFAULT_PASSWORD_LENGTH, SUGGEST_PASSWORD_TOKEN};

/// Result of the registration flow
#[derive(Debug)]
pub enum RegistrationOutcome {
    Registered(User),
    ConsentDeclined,
}

/// Result of the login flow
#[derive(Debug)]
pub enum LoginOutcome {
    Success(User),
    InvalidCredentials,
}

/// Interactive registration: consent, fields, hash, append.
///
/// Duplicate usernames are accepted. A non-numeric age or usage time aborts the flow
/// with `FlowError::InvalidNumber` before anything is written.
pub fn handle_registration(
    store: &UserStore,
    prompter: &mut dyn Prompter,
) -> Result<RegistrationOutcome, FlowError> {
    if !request_consent(prompter)? {
        prompter.say("Registration cancelled: consent was not given.");
        prompter.say("");
        log_auth_event("register", "", false, Some("consent declined"));
        return Ok(RegistrationOutcome::ConsentDeclined);
    }

    let name = prompter.ask("Full name: ")?;
    let username = prompter.ask("Username: ")?;
    let mut password = prompter.ask_secret(&format!(
        "Create a password (or type '{}' to get a suggestion): ",
        SUGGEST_PASSWORD_TOKEN
    ))?;
    if password.trim().eq_ignore_ascii_case(SUGGEST_PASSWORD_TOKEN) {
        password = generate_password(DEFAULT_PASSWORD_LENGTH);
        prompter.say(&format!("Suggested strong password: {}", password));
    }

    let age = ask_number(prompter, "Age: ", "age")?;
    let usage_minutes = ask_number(prompter, "Average daily usage time (minutes): ", "usage time")?;

    let user = User::new(name, username, &password, age, usage_minutes);
    store.append(user.clone())?;

    log_auth_event("register", &user.username, true, None);
    prompter.say("User registered successfully!");
    prompter.say("");
    Ok(RegistrationOutcome::Registered(user))
}

/// Interactive login by exact username and password digest match
pub fn handle_login(store: &UserStore, prompter: &mut dyn Prompter) -> Result<LoginOutcome, FlowError> {
    let username = prompter.ask("Username: ")?;
    let password = prompter.ask_secret("Password: ")?;

    let users = store.load()?;
    match authenticate(&users, &username, &password) {
        Some(user) => {
            log_auth_event("login", &username, true, None);
            prompter.say(&format!("Welcome, {}!", user.name));
            prompter.say("");
            Ok(LoginOutcome::Success(user.clone()))
        }
        None => {
            log_auth_event("login", &username, false, Some("invalid credentials"));
            prompter.say("Incorrect username or password.");
            prompter.say("");
            Ok(LoginOutcome::InvalidCredentials)
        }
    }
}

/// Print every user, numbered from 1. Returns how many were listed.
pub fn list_users(store: &UserStore, prompter: &mut dyn Prompter) -> Result<usize, FlowError> {
    let users = store.load()?;
    if users.is_empty() {
        prompter.say("No registered users.");
        prompter.say("");
        return Ok(0);
    }

    prompter.say("Registered users:");
    for (i, user) in users.iter().enumerate() {
        prompter.say(&format!(
            "{}. Name: {}, Age: {}, Usage time: {} minutes",
            i + 1,
            user.name,
            user.age,
            user.usage_minutes
        ));
    }
    prompter.say("");
    Ok(users.len())
}
