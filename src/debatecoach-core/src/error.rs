//! Error types for the feedback system.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoachError {
    /// Neither speech text nor audio was supplied.
    #[error("No speech text or audio was provided")]
    InsufficientInput,

    #[error("Remote coach service error: {0}")]
    RemoteService(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Audio error: {0}")]
    AudioError(String),
}

impl From<async_openai::error::OpenAIError> for CoachError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        CoachError::RemoteService(err.to_string())
    }
}
