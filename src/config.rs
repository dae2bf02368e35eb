//! Configuration types.

use std::path::Path;

use secrecy::{ExposeSecret, SecretString};

use crate::error::ConfigError;
use crate::llm::LlmBackend;

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-4-turbo";

/// Assistant configuration.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// API credential. `None` selects mock mode.
    pub api_key: Option<SecretString>,
    /// Model identifier passed to the backend.
    pub model: String,
    /// Which provider serves the model.
    pub backend: LlmBackend,
}

impl AssistantConfig {
    /// Build a configuration with no credential and the default model.
    pub fn new() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            backend: LlmBackend::default(),
        }
    }

    /// Load from the environment.
    ///
    /// - `LEGAL_ASSIST_BACKEND`: `openai` (default) or `anthropic`
    /// - `OPENAI_API_KEY` / `ANTHROPIC_API_KEY`: credential for the backend
    /// - `LEGAL_ASSIST_MODEL`: model identifier (default `gpt-4-turbo`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `get` to resolve variables. Blank values count as unset.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let lookup = |key: &str| get(key).and_then(non_blank);

        let backend = match lookup("LEGAL_ASSIST_BACKEND") {
            Some(value) => value.parse()?,
            None => LlmBackend::default(),
        };

        Ok(Self {
            api_key: lookup(backend.api_key_env()).map(SecretString::from),
            model: lookup("LEGAL_ASSIST_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            backend,
        })
    }

    /// Override the credential; an explicit key wins over the environment.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let trimmed = api_key.trim();
        if !trimmed.is_empty() {
            self.api_key = Some(SecretString::from(trimmed.to_string()));
        }
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_backend(mut self, backend: LlmBackend) -> Self {
        self.backend = backend;
        self
    }

    /// True when a non-empty credential is configured.
    pub fn has_credential(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Read an input document (email or contract excerpt) from disk.
pub async fn read_input_file(path: impl AsRef<Path>) -> Result<String, ConfigError> {
    Ok(tokio::fs::read_to_string(path).await?)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn new_has_no_credential() {
        let config = AssistantConfig::new();
        assert!(!config.has_credential());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.backend, LlmBackend::OpenAi);
    }

    #[test]
    fn explicit_key_sets_credential() {
        let config = AssistantConfig::new().with_api_key("sk-test");
        assert!(config.has_credential());
    }

    #[test]
    fn blank_explicit_key_is_ignored() {
        let config = AssistantConfig::new().with_api_key("   ");
        assert!(!config.has_credential());
    }

    #[test]
    fn debug_output_does_not_leak_key() {
        let config = AssistantConfig::new().with_api_key("sk-very-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-very-secret"));
    }

    #[test]
    fn builder_overrides_model_and_backend() {
        let config = AssistantConfig::new()
            .with_model("claude-sonnet-4-20250514")
            .with_backend(LlmBackend::Anthropic);
        assert_eq!(config.model, "claude-sonnet-4-20250514");
        assert_eq!(config.backend, LlmBackend::Anthropic);
    }

    #[test]
    fn lookup_defaults_without_variables() {
        let config = AssistantConfig::from_lookup(lookup(&[])).unwrap();
        assert!(!config.has_credential());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.backend, LlmBackend::OpenAi);
    }

    #[test]
    fn lookup_blank_openai_key_counts_as_absent() {
        let config =
            AssistantConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "   ")])).unwrap();
        assert!(!config.has_credential());

        let config = AssistantConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "")])).unwrap();
        assert!(!config.has_credential());
    }

    #[test]
    fn lookup_reads_trimmed_openai_key_and_model() {
        let config = AssistantConfig::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "  sk-live  "),
            ("LEGAL_ASSIST_MODEL", "gpt-4o"),
        ]))
        .unwrap();
        assert!(config.has_credential());
        assert_eq!(config.api_key.unwrap().expose_secret(), "sk-live");
        assert_eq!(config.model, "gpt-4o");
    }

    #[test]
    fn lookup_anthropic_backend_uses_anthropic_key() {
        let config = AssistantConfig::from_lookup(lookup(&[
            ("LEGAL_ASSIST_BACKEND", "anthropic"),
            ("OPENAI_API_KEY", "sk-openai"),
            ("ANTHROPIC_API_KEY", "sk-ant-key"),
        ]))
        .unwrap();
        assert_eq!(config.backend, LlmBackend::Anthropic);
        assert_eq!(config.api_key.unwrap().expose_secret(), "sk-ant-key");

        let config = AssistantConfig::from_lookup(lookup(&[
            ("LEGAL_ASSIST_BACKEND", "anthropic"),
            ("OPENAI_API_KEY", "sk-openai"),
        ]))
        .unwrap();
        assert!(!config.has_credential());
    }

    #[test]
    fn lookup_unknown_backend_is_invalid() {
        let err = AssistantConfig::from_lookup(lookup(&[("LEGAL_ASSIST_BACKEND", "gemini")]))
            .unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "LEGAL_ASSIST_BACKEND"),
            "got {err:?}"
        );
    }

    #[tokio::test]
    async fn read_input_file_reads_contents() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
        let text = read_input_file(path).await.unwrap();
        assert!(text.contains("legal-assist"));
    }

    #[tokio::test]
    async fn read_input_file_missing_is_io_error() {
        let err = read_input_file("/nonexistent/legal-assist/email.txt")
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)), "got {err:?}");
    }
}
