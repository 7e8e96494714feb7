use thiserror::Error;

/// Failure kinds of the parameter controller.
///
/// - `InvalidConfiguration` is permanent: the bounds must be fixed before any further computation.
/// - `InvalidInput` is per-call: the caller skips the cycle and keeps its last known-good parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControllerError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ControllerError {
    /// Returns `true` if the caller may simply retry on the next cycle.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ControllerError::InvalidInput(_))
    }

    /// Short stable label, suitable for log fields.
    pub fn as_label(&self) -> &'static str {
        match self {
            ControllerError::InvalidConfiguration(_) => "invalid_configuration",
            ControllerError::InvalidInput(_) => "invalid_input",
        }
    }
}

pub type ModelResult<T> = Result<T, ControllerError>;
