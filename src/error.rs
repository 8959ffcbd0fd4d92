use thiserror::Error;

/// Error taxonomy for the simulation engine.
///
/// `Validation` is the only error an honest caller should ever see; the rest
/// indicate a defect in the engine itself and should never be triggered by
/// well-formed input.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    #[error("internal arithmetic error: {message}")]
    Arithmetic { message: String },

    #[error("simulation cancelled")]
    Cancelled,

    #[error("resource exhausted: {message}")]
    ResourceExhausted { message: String },
}

impl EngineError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
