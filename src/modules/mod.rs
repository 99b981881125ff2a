// Declare all modules
pub mod app;
pub mod auth;
pub mod certificate;
pub mod error;
pub mod stats;
pub mod utils;

// No re-exports here as they're handled in lib.rs
