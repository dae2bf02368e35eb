//! Fixed results returned in mock mode.
//!
//! Mock mode ignores the email and contract text entirely. It exists to run
//! the pipeline end to end without a credential; it is not a drafting
//! strategy.

use crate::schema::{AgreementReference, Parties, StructuredRecord, UrgencyLevel};

/// The demonstration record returned by mock `analyze`.
pub fn analysis() -> StructuredRecord {
    StructuredRecord {
        intent: "legal_advice_request".to_string(),
        primary_topic: "termination_for_cause".to_string(),
        parties: Parties {
            client: "Acme Technologies Pvt. Ltd.".to_string(),
            counterparty: "Brightwave Solutions LLP".to_string(),
        },
        agreement_reference: AgreementReference {
            kind: "Master Services Agreement".to_string(),
            date: "10 March 2023".to_string(),
        },
        questions: vec![
            "Whether we are contractually entitled to terminate for cause on the basis of repeated delays in delivery".to_string(),
            "The minimum notice period required".to_string(),
        ],
        requested_due_date: "18 November 2025".to_string(),
        urgency_level: UrgencyLevel::High,
    }
}

/// The templated reply returned by mock `draft`.
pub fn draft(record: &StructuredRecord) -> String {
    format!(
        "Dear Ms. Sharma,\n\n\
         Thank you for your email regarding the {kind} dated {date}.\n\n\
         Regarding your query on termination for cause: Under Clause 9.2 of the Agreement, \
         repeated failure to meet delivery timelines explicitly constitutes a 'material breach.' \
         Therefore, you are contractually entitled to terminate the agreement on these grounds.\n\n\
         As per Clause 9.1 read in conjunction with Clause 10.2, the minimum notice period required \
         to effect this termination is thirty (30) days' prior written notice.\n\n\
         Please let us know if you would like our assistance in drafting the formal notice.\n\n\
         Regards,\n\
         Legal Team",
        kind = record.agreement_reference.kind,
        date = record.agreement_reference.date,
    )
}
