use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::modules::auth::store::User;
use crate::modules::utils::time::format_certificate_date;

/// File name of a user's certificate
pub fn certificate_file_name(username: &str) -> String {
    format!("certificate_{}.txt", username)
}

/// Full path of a user's certificate inside `dir`
pub fn certificate_path(dir: &Path, username: &str) -> PathBuf {
    dir.join(certificate_file_name(username))
}

/// Certificate body for `name`, issued on `date`
pub fn render_certificate(name: &str, date: NaiveDate) -> String {
    format!(
        "Certificate of Participation\n\
         \n\
         Awarded to: {}\n\
         Date: {}\n\
         \n\
         The Bem Digital platform, in partnership with the NGO Amigos do Bem, certifies that \
         the participant has completed the introductory activities on technology and good \
         digital practices.\n\
         \n\
         Congratulations on your achievement!\n",
        name,
        format_certificate_date(date)
    )
}

/// Map a 1-based menu answer to a user. `None` for non-numeric, zero or out-of-range input.
pub fn select_user<'a>(users: &'a [User], input: &str) -> Option<&'a User> {
    let choice = input.trim().parse::<usize>().ok()?;
    choice.checked_sub(1).and_then(|index| users.get(index))
}
