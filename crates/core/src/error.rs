#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required or malformed field. `field` names the offending attribute
    /// so callers can surface the message next to the right input.
    #[error("Validation failed on {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
}

impl CoreError {
    /// Shorthand for a validation failure on a named field.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        CoreError::Validation {
            field,
            message: message.into(),
        }
    }
}
