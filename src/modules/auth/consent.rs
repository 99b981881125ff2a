use std::io;

use crate::modules::utils::io::Prompter;
use crate::CONSENT_TOKEN;

/// True only for an explicit affirmative answer
pub fn is_affirmative(response: &str) -> bool {
    response.trim().to_uppercase() == CONSENT_TOKEN
}

/// Show the data-protection notice and ask for consent
pub fn request_consent(prompter: &mut dyn Prompter) -> io::Result<bool> {
    prompter.say("");
    prompter.say("LGPD - Brazilian General Data Protection Law");
    prompter.say("By continuing with registration, you agree to the use of your data for educational purposes.");
    let response = prompter.ask("Do you agree? (Y/N): ")?;
    Ok(is_affirmative(&response))
}
