use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryError;

pub mod console;
pub mod factory;
#[cfg(test)]
pub mod memory;
pub mod notification;
pub mod observer;

// NotifierVia selects where borrower notifications go.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum NotifierVia {
    Log,
}

impl TryFrom<&str> for NotifierVia {
    type Error = LibraryError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "log" => Ok(NotifierVia::Log),
            _ => Err(LibraryError::validation(
                format!("unknown notifier {}", s).as_str(), Some("400".to_string()))),
        }
    }
}

impl Display for NotifierVia {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            NotifierVia::Log => write!(f, "log"),
        }
    }
}
