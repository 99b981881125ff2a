use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::password::hash_password;
use crate::modules::utils::logging::log_data_operation;

/// Custom error type for storage operations
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    InvalidData(String),
}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::Io(error)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        StoreError::InvalidData(error.to_string())
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "IO error: {}", e),
            StoreError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// A registered user as persisted in the data file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub username: String,
    pub password_hash: String, // hex SHA-256, never the plaintext
    pub age: i64,
    pub usage_minutes: i64, // self-reported daily usage
}

impl User {
    /// Build a record, hashing the plaintext password
    pub fn new(name: String, username: String, password: &str, age: i64, usage_minutes: i64) -> Self {
        Self {
            name,
            username,
            password_hash: hash_password(password),
            age,
            usage_minutes,
        }
    }

    /// True when both the username and the password digest match exactly
    pub fn matches_credentials(&self, username: &str, password_hash: &str) -> bool {
        self.username == username && self.password_hash == password_hash
    }
}

/// Handle to the JSON document holding every user record.
///
/// The document is read and rewritten whole on each operation; there is no locking and
/// the last writer wins.
#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records in file order. A missing document is an empty collection.
    pub fn load(&self) -> Result<Vec<User>, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };

        let users = serde_json::from_str(&data)?;
        Ok(users)
    }

    /// Overwrite the document with `users`, pretty-printed with four-space indentation
    pub fn save(&self, users: &[User]) -> Result<(), StoreError> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        users.serialize(&mut serializer)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, buffer)?;
        Ok(())
    }

    /// Append one record: load everything, push, save everything
    pub fn append(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.load()?;
        let username = user.username.clone();
        users.push(user);

        let resource = self.path.display().to_string();
        match self.save(&users) {
            Ok(()) => {
                log_data_operation("append_user", &username, &resource, true, None);
                Ok(())
            }
            Err(e) => {
                log_data_operation("append_user", &username, &resource, false, Some(&e.to_string()));
                Err(e)
            }
        }
    }
}

/// First record, in file order, whose username and password digest both match
pub fn authenticate<'a>(users: &'a [User], username: &str, password: &str) -> Option<&'a User> {
    let password_hash = hash_password(password);
    users
        .iter()
        .find(|user| user.matches_credentials(username, &password_hash))
}
