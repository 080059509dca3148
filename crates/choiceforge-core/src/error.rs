//! Error types for ChoiceForge

use thiserror::Error;

/// Main error type for ChoiceForge operations.
///
/// Selection input that falls outside the configured layout is never an
/// error; unknown keys are ignored. These variants cover misuse of a session
/// or a configuration that cannot be turned into a rule at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChoiceForgeError {
    /// The session already reached a terminal state.
    #[error("Selection session has already ended")]
    SessionEnded,

    /// A rule whose bounds can never be satisfied together.
    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    /// Error loading or interpreting a session configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for ChoiceForge operations
pub type Result<T> = std::result::Result<T, ChoiceForgeError>;
