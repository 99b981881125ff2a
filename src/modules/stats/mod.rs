pub mod summary;
mod user_interface;

pub use summary::{mean, median, mode, Median, Summary, UsageReport};
pub use user_interface::handle_statistics;
