//! Legal Assist — structured email analysis and grounded reply drafting.

pub mod assistant;
pub mod config;
pub mod error;
pub mod llm;
pub mod samples;
pub mod schema;

pub use assistant::{LegalAssistant, Mode};
pub use config::AssistantConfig;
pub use schema::{StructuredRecord, validate};
