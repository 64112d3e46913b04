use std::fmt::Display;
use std::str::FromStr;

use crate::entity::ValidationError;

/// Circulation state of a copy.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Status {
    CheckedIn,
    CheckedOut,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::CheckedIn => "CheckedIn",
            Status::CheckedOut => "CheckedOut",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CheckedIn" => Ok(Status::CheckedIn),
            "CheckedOut" => Ok(Status::CheckedOut),
            _ => Err(ValidationError::StatusInvalid),
        }
    }
}
