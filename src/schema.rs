//! Structured record extracted from an inbound legal email.
//!
//! Both the mock path and the live extraction path hand back a
//! `StructuredRecord` that has gone through [`validate`], so callers never
//! branch on the assistant's mode.

use std::fmt;
use std::sync::LazyLock;

use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

/// The canonical output of analysis and input of drafting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StructuredRecord {
    /// The primary intent of the email
    pub intent: String,
    /// The main legal topic discussed
    pub primary_topic: String,
    pub parties: Parties,
    pub agreement_reference: AgreementReference,
    /// List of specific questions asked in the email, in order of appearance
    pub questions: Vec<String>,
    /// The date by which advice is requested
    pub requested_due_date: String,
    /// Inferred urgency: low, medium, or high
    pub urgency_level: UrgencyLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Parties {
    /// The name of the client organization
    pub client: String,
    /// The name of the other party in the agreement
    pub counterparty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AgreementReference {
    /// Type of agreement (e.g., Master Services Agreement)
    #[serde(rename = "type")]
    pub kind: String,
    /// Date of the agreement, kept as written
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
}

impl UrgencyLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StructuredRecord {
    pub fn to_value(&self) -> Value {
        // Plain strings and an enum; serialization cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Validate a candidate value against the record contract.
///
/// Rejects missing fields, wrong shapes, `null` strings, urgency levels
/// outside low/medium/high, and blank party names. Extra fields are ignored.
pub fn validate(candidate: &Value) -> Result<StructuredRecord, ValidationError> {
    let record = StructuredRecord::deserialize(candidate)?;

    if record.parties.client.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            field: "parties.client",
        });
    }
    if record.parties.counterparty.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            field: "parties.counterparty",
        });
    }

    Ok(record)
}

/// Validate a raw JSON document.
pub fn validate_json(raw: &str) -> Result<StructuredRecord, ValidationError> {
    let candidate: Value = serde_json::from_str(raw)?;
    validate(&candidate)
}

static OUTPUT_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    serde_json::to_value(schema_for!(StructuredRecord))
        .expect("structured record schema should be serializable")
});

/// JSON Schema of [`StructuredRecord`], sent to the model for extraction.
pub fn output_schema() -> &'static Value {
    &OUTPUT_SCHEMA
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn candidate() -> Value {
        json!({
            "intent": "legal_advice_request",
            "primary_topic": "termination_for_cause",
            "parties": {
                "client": "Acme Technologies Pvt. Ltd.",
                "counterparty": "Brightwave Solutions LLP"
            },
            "agreement_reference": {
                "type": "Master Services Agreement",
                "date": "10 March 2023"
            },
            "questions": ["First?", "Second?"],
            "requested_due_date": "18 November 2025",
            "urgency_level": "high"
        })
    }

    #[test]
    fn validate_accepts_well_formed_candidate() {
        let record = validate(&candidate()).unwrap();
        assert_eq!(record.parties.client, "Acme Technologies Pvt. Ltd.");
        assert_eq!(record.agreement_reference.kind, "Master Services Agreement");
        assert_eq!(record.questions, vec!["First?", "Second?"]);
        assert_eq!(record.urgency_level, UrgencyLevel::High);
    }

    #[test]
    fn validate_is_idempotent_over_serialization() {
        let record = validate(&candidate()).unwrap();
        let again = validate(&record.to_value()).unwrap();
        assert_eq!(record, again);

        let from_text = validate_json(&record.to_pretty_json()).unwrap();
        assert_eq!(record, from_text);
    }

    #[test]
    fn validate_rejects_unknown_urgency() {
        let mut value = candidate();
        value["urgency_level"] = json!("critical");
        let err = validate(&value).unwrap_err();
        assert!(matches!(err, ValidationError::Malformed(_)), "got {err:?}");
    }

    #[test]
    fn validate_rejects_missing_counterparty() {
        let mut value = candidate();
        value["parties"].as_object_mut().unwrap().remove("counterparty");
        let err = validate(&value).unwrap_err();
        assert!(err.to_string().contains("counterparty"), "got {err}");
    }

    #[test]
    fn validate_rejects_missing_top_level_field() {
        let mut value = candidate();
        value.as_object_mut().unwrap().remove("requested_due_date");
        assert!(validate(&value).is_err());
    }

    #[test]
    fn validate_rejects_null_string() {
        let mut value = candidate();
        value["intent"] = Value::Null;
        assert!(matches!(
            validate(&value),
            Err(ValidationError::Malformed(_))
        ));
    }

    #[test]
    fn validate_rejects_wrong_shape() {
        let mut value = candidate();
        value["parties"] = json!("Acme vs Brightwave");
        assert!(validate(&value).is_err());

        let mut value = candidate();
        value["questions"] = json!("just one question");
        assert!(validate(&value).is_err());
    }

    #[test]
    fn validate_rejects_blank_party_name() {
        let mut value = candidate();
        value["parties"]["client"] = json!("  ");
        let err = validate(&value).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::EmptyField {
                field: "parties.client"
            }
        ));
    }

    #[test]
    fn validate_allows_empty_questions_and_extra_fields() {
        let mut value = candidate();
        value["questions"] = json!([]);
        value["confidence"] = json!(0.4);
        let record = validate(&value).unwrap();
        assert!(record.questions.is_empty());
    }

    #[test]
    fn validate_json_rejects_invalid_json() {
        assert!(matches!(
            validate_json("{not json"),
            Err(ValidationError::Malformed(_))
        ));
    }

    #[test]
    fn output_schema_lists_required_fields_and_urgency_levels() {
        let schema = output_schema().to_string();
        for field in [
            "intent",
            "primary_topic",
            "parties",
            "agreement_reference",
            "questions",
            "requested_due_date",
            "urgency_level",
        ] {
            assert!(schema.contains(field), "schema missing {field}");
        }
        assert!(schema.contains("\"low\""));
        assert!(schema.contains("\"medium\""));
        assert!(schema.contains("\"high\""));
        assert!(schema.contains("The name of the client organization"));
    }
}
