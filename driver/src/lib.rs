use error_stack::{Report, ResultExt};
use kernel::KernelError;

pub mod database;
pub mod error;

pub(crate) fn env(key: &str) -> error_stack::Result<String, KernelError> {
    let value = dotenvy::var(key)
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| format!("{key} is not set"))?;
    if value.is_empty() {
        return Err(Report::new(KernelError::Internal).attach_printable(format!("{key} must not be empty")));
    }
    Ok(value)
}
