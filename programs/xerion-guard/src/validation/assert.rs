use crate::errors::{ErrorContext, XerionError};

/// Unwrap a required value, or fail with a configuration error.
pub fn assert_defined<T>(
    value: Option<T>,
    message: &str,
    context: ErrorContext,
) -> Result<T, XerionError> {
    value.ok_or_else(|| XerionError::config(message, context))
}

pub fn assert_condition(
    condition: bool,
    message: &str,
    context: ErrorContext,
) -> Result<(), XerionError> {
    if condition {
        Ok(())
    } else {
        Err(XerionError::config(message, context))
    }
}
