//! Error types for Legal Assist.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Assistant error: {0}")]
    Assistant(#[from] AssistantError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// LLM provider errors.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Provider {provider} request failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("Authentication failed for provider {provider}")]
    AuthFailed { provider: String },

    #[error("Model invocation is not available in this build (enable the `live` feature)")]
    Unavailable,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A candidate structured record failed the schema contract.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Missing field, wrong shape, null string, or unknown urgency level.
    #[error("Malformed record: {0}")]
    Malformed(String),

    #[error("Field {field} must not be empty")]
    EmptyField { field: &'static str },
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// The cause behind a failed assistant stage.
#[derive(Debug, thiserror::Error)]
pub enum StageCause {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Failures surfaced by the legal assistant pipeline.
///
/// Each variant names the stage that failed; the cause is kept intact so the
/// host can decide whether to retry, fall back, or abort.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("Extraction failed: {0}")]
    Extraction(#[source] StageCause),

    #[error("Draft failed: {0}")]
    Draft(#[source] StageCause),
}

impl AssistantError {
    /// Short stage label for logging.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Extraction(_) => "extraction",
            Self::Draft(_) => "draft",
        }
    }

    /// The underlying cause.
    pub fn cause(&self) -> &StageCause {
        match self {
            Self::Extraction(cause) | Self::Draft(cause) => cause,
        }
    }
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
