pub mod consent;
pub mod password;
pub mod store;
pub mod user_interface;

// Re-export the main types and functions
pub use consent::request_consent;
pub use password::{generate_password, hash_password, PASSWORD_ALPHABET};
pub use store::{authenticate, StoreError, User, UserStore};
pub use user_interface::{
    handle_login, handle_registration, list_users, LoginOutcome, RegistrationOutcome,
};
