use std::fmt;
use std::io;

use crate::modules::auth::store::StoreError;

/// Failure that aborts an interactive flow and, from the menu loop, the whole program
#[derive(Debug)]
pub enum FlowError {
    Io(io::Error),
    Store(StoreError),
    InvalidNumber { field: &'static str, input: String },
}

impl From<io::Error> for FlowError {
    fn from(error: io::Error) -> Self {
        FlowError::Io(error)
    }
}

impl From<StoreError> for FlowError {
    fn from(error: StoreError) -> Self {
        FlowError::Store(error)
    }
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowError::Io(e) => write!(f, "IO error: {}", e),
            FlowError::Store(e) => write!(f, "Storage error: {}", e),
            FlowError::InvalidNumber { field, input } => {
                write!(f, "Invalid number for {}: {:?}", field, input)
            }
        }
    }
}

impl std::error::Error for FlowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FlowError::Io(e) => Some(e),
            FlowError::Store(e) => Some(e),
            FlowError::InvalidNumber { .. } => None,
        }
    }
}
