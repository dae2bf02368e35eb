//! Prompt constants and templates for extraction and drafting.
//!
//! Tests assert the exact presence of these strings in outbound requests, so
//! any wording change must bump [`PROMPT_VERSION`].

use std::sync::LazyLock;

use regex::Regex;

/// Version tag for the prompt set below.
pub const PROMPT_VERSION: &str = "2025-11-01";

/// System instruction for structured extraction.
pub const EXTRACTION_SYSTEM_PROMPT: &str =
    "You are a legal AI assistant. Extract structured data from the provided email.";

/// Fixed drafting requirements, in the order they are numbered in the prompt.
pub const DRAFT_REQUIREMENTS: [&str; 7] = [
    "Use a professional legal tone.",
    "Clearly answer the specific questions identified in the analysis.",
    "Cite specific clauses (e.g., 9.1, 9.2, 10.2) to support your answers.",
    "Explicitly mention that repeated failure to meet delivery timelines is a material breach.",
    "State the notice period clearly.",
    "Do NOT admit liability.",
    "Keep it concise.",
];

static CLAUSE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)(?:^[ \t]*|\b(?:clause|section)[ \t]+)(\d{1,3}(?:\.\d{1,3})+)\b")
        .expect("valid clause regex")
});

/// Numbered clauses (`9.1`, `10.2`, ...) in order of first appearance.
///
/// A number counts only at the start of a line or after "Clause"/"Section";
/// dotted dates such as `10.03.2023` are skipped.
pub fn clause_numbers(contract_text: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for capture in CLAUSE_NUMBER.captures_iter(contract_text) {
        let Some(number) = capture.get(1) else {
            continue;
        };
        let mut rest = contract_text[number.end()..].chars();
        if rest.next() == Some('.') && rest.next().is_some_and(|c| c.is_ascii_digit()) {
            continue;
        }
        let number = number.as_str();
        if !seen.iter().any(|n| n == number) {
            seen.push(number.to_string());
        }
    }
    seen
}

/// Render the drafting prompt.
///
/// `analysis_json` is the record already serialized as pretty JSON.
pub fn build_draft_prompt(
    client: &str,
    contract_text: &str,
    email_text: &str,
    analysis_json: &str,
) -> String {
    let mut prompt = String::with_capacity(
        1024 + contract_text.len() + email_text.len() + analysis_json.len(),
    );

    prompt.push_str(
        "You are a professional lawyer. Draft a reply to the following email based on the \
         provided analysis and contract clauses.\n\n",
    );

    prompt.push_str("CONTEXT:\n");
    prompt.push_str(&format!("- Your Client: {}\n", client));
    prompt.push_str("- Sender Name (address them): Derived from email signature\n");
    let clauses = clause_numbers(contract_text);
    if !clauses.is_empty() {
        prompt.push_str(&format!("- Clause Numbers Available: {}\n", clauses.join(", ")));
    }
    prompt.push_str("- Contract Clauses:\n");
    prompt.push_str(contract_text.trim_end());
    prompt.push_str("\n\n");

    prompt.push_str("INCOMING EMAIL:\n");
    prompt.push_str(email_text.trim_end());
    prompt.push_str("\n\n");

    prompt.push_str("ANALYSIS DATA:\n");
    prompt.push_str(analysis_json);
    prompt.push_str("\n\n");

    prompt.push_str("REQUIREMENTS:\n");
    for (i, requirement) in DRAFT_REQUIREMENTS.iter().enumerate() {
        prompt.push_str(&format!("{}. {}\n", i + 1, requirement));
    }

    prompt
}
