use std::fmt::Display;

use error_stack::Context;

use crate::entity::ValidationError;

#[derive(Debug)]
pub enum KernelError {
    Validation(ValidationError),
    NotFound,
    NotUnique,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation(error) => Display::fmt(error, f),
            KernelError::NotFound => write!(f, "Record not found"),
            KernelError::NotUnique => write!(f, "Record not unique"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
