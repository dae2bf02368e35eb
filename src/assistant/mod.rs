//! Legal assistant service: structured extraction and grounded drafting.
//!
//! Flow:
//! 1. `analyze()` — email text → validated `StructuredRecord`
//! 2. `draft()` — email + record + contract excerpt → reply text
//!
//! The mode (live or mock) is fixed when the assistant is built. Once live
//! mode is selected, failures are surfaced and never downgraded to mock output.

pub mod mock;
pub mod prompts;

use std::fmt;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error, info, warn};

use crate::config::AssistantConfig;
use crate::error::{AssistantError, LlmError, StageCause};
use crate::llm::{self, ChatMessage, CompletionRequest, LlmConfig, LlmProvider};
use crate::schema::{self, StructuredRecord};

use prompts::{EXTRACTION_SYSTEM_PROMPT, PROMPT_VERSION, build_draft_prompt};

/// Sampling temperature for every live call.
const TEMPERATURE: f32 = 0.0;

/// Operating mode, decided once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Live,
    Mock,
}

impl Mode {
    /// Live only when a credential is present and a model backend is available.
    pub fn resolve(credential_present: bool, capability_present: bool) -> Self {
        if credential_present && capability_present {
            Self::Live
        } else {
            Self::Mock
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Mock => "mock",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

enum Backend {
    Live(Arc<dyn LlmProvider>),
    Mock,
}

/// Analyzes inbound legal emails and drafts replies.
pub struct LegalAssistant {
    backend: Backend,
}

impl LegalAssistant {
    /// Build from configuration.
    ///
    /// Live mode needs a non-empty credential and a compiled-in backend;
    /// anything else falls back to mock mode.
    pub fn new(config: &AssistantConfig) -> Result<Self, LlmError> {
        let mode = Mode::resolve(config.has_credential(), llm::live_capability_available());
        match (mode, config.api_key.as_ref()) {
            (Mode::Live, Some(api_key)) => {
                let provider = llm::create_provider(&LlmConfig {
                    backend: config.backend,
                    api_key: api_key.clone(),
                    model: config.model.clone(),
                })?;
                Ok(Self::live(provider))
            }
            _ => Ok(Self::mock()),
        }
    }

    /// Build with an explicitly injected model capability.
    ///
    /// `provider` is the capability-presence flag: `None` means no backend is
    /// available in this runtime.
    pub fn with_provider(
        api_key: Option<&SecretString>,
        provider: Option<Arc<dyn LlmProvider>>,
    ) -> Self {
        let credential_present =
            api_key.is_some_and(|key| !key.expose_secret().trim().is_empty());
        match (Mode::resolve(credential_present, provider.is_some()), provider) {
            (Mode::Live, Some(provider)) => Self::live(provider),
            _ => Self::mock(),
        }
    }

    /// Force mock mode.
    pub fn mock() -> Self {
        warn!("Running in MOCK MODE (no API key found or model backend missing)");
        warn!("Returning simulated data for demonstration purposes");
        Self {
            backend: Backend::Mock,
        }
    }

    fn live(provider: Arc<dyn LlmProvider>) -> Self {
        info!(model = provider.model_name(), "Legal assistant running in live mode");
        Self {
            backend: Backend::Live(provider),
        }
    }

    pub fn mode(&self) -> Mode {
        match self.backend {
            Backend::Live(_) => Mode::Live,
            Backend::Mock => Mode::Mock,
        }
    }

    /// Extract a structured record from the email.
    ///
    /// Mock mode returns the fixed demonstration record whatever the input.
    pub async fn analyze(&self, email_text: &str) -> Result<StructuredRecord, AssistantError> {
        info!(
            mode = %self.mode(),
            email_chars = email_text.chars().count(),
            "Analyzing email"
        );

        let llm = match &self.backend {
            Backend::Mock => return Ok(mock::analysis()),
            Backend::Live(llm) => llm,
        };

        debug!(prompt_version = PROMPT_VERSION, "Requesting structured extraction");
        let request = CompletionRequest::new(vec![
            ChatMessage::system(EXTRACTION_SYSTEM_PROMPT),
            ChatMessage::user(email_text),
        ])
        .with_temperature(TEMPERATURE);

        let candidate = llm
            .complete_structured(request, schema::output_schema())
            .await
            .map_err(|e| {
                error!(error = %e, "Extraction call failed");
                AssistantError::Extraction(StageCause::Llm(e))
            })?;

        let record = schema::validate(&candidate).map_err(|e| {
            error!(error = %e, "Extracted record failed validation");
            AssistantError::Extraction(StageCause::Validation(e))
        })?;

        debug!(
            questions = record.questions.len(),
            urgency = %record.urgency_level,
            "Extraction complete"
        );
        Ok(record)
    }

    /// Draft a reply grounded in the contract excerpt.
    ///
    /// Mock mode interpolates the agreement reference into a fixed template
    /// and ignores `email_text` and `contract_text`.
    pub async fn draft(
        &self,
        email_text: &str,
        record: &StructuredRecord,
        contract_text: &str,
    ) -> Result<String, AssistantError> {
        info!(
            mode = %self.mode(),
            email_chars = email_text.chars().count(),
            contract_chars = contract_text.chars().count(),
            "Drafting reply"
        );

        let record = schema::validate(&record.to_value()).map_err(|e| {
            error!(error = %e, "Refusing to draft from a malformed record");
            AssistantError::Draft(StageCause::Validation(e))
        })?;

        let llm = match &self.backend {
            Backend::Mock => return Ok(mock::draft(&record)),
            Backend::Live(llm) => llm,
        };

        let prompt = build_draft_prompt(
            &record.parties.client,
            contract_text,
            email_text,
            &record.to_pretty_json(),
        );
        debug!(
            prompt_version = PROMPT_VERSION,
            prompt_chars = prompt.len(),
            "Requesting draft"
        );
        let request =
            CompletionRequest::new(vec![ChatMessage::user(prompt)]).with_temperature(TEMPERATURE);

        let response = llm.complete(request).await.map_err(|e| {
            error!(error = %e, "Draft call failed");
            AssistantError::Draft(StageCause::Llm(e))
        })?;

        debug!(
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "Draft complete"
        );
        Ok(response.content)
    }
}
