//! Prompt composition for the three generative request shapes.
//!
//! Every prompt carries the full rule catalog as context and pins the
//! exact JSON shape the parser expects. The split/do-not-split
//! criterion in the analyze prompt is the contract the classifier
//! depends on: split when the requirement contains multiple
//! independently verifiable actions or an enumeration of distinct
//! items; do NOT split when parameters are semantically inseparable
//! from one capability.

use crate::rules::INCOSE_RULES;

pub const SYSTEM_PROMPT: &str = r#"
You are a requirements engineering assistant applying the INCOSE rules
for writing ISO 29148-compliant requirement statements.

RULES — ABSOLUTE, NO EXCEPTIONS:
1. Respond with a single JSON payload and nothing else.
2. The JSON may be wrapped in a ```json fenced block, but no prose
   before or after it.
3. Preserve every [PLACEHOLDER_NAME] token from the original
   requirement exactly as written.
4. Never invent capabilities that are not present in the original text.
"#;

/// Classification prompt: must the requirement be split (R18)?
pub fn build_analyze_prompt(requirement: &str) -> String {
    format!(
        r#"Analyze whether the requirement below must be SPLIT into atomic requirements (R18).

SPLIT is required when the requirement contains multiple independently
verifiable actions, or an enumeration of distinct items.
Do NOT split when parameters are semantically inseparable from one
capability (e.g. a duration and an associated headcount describing one
scenario).

REQUIREMENT: {requirement}

{rules}

Respond with JSON only:
{{"should_split": true/false, "num": 1-10, "capabilities": ["..."], "placeholders": ["..."]}}"#,
        rules = INCOSE_RULES,
    )
}

/// Improve prompt: rewrite one atomic requirement to full compliance,
/// enumerating every vague-term replacement and tolerance introduced.
pub fn build_improve_prompt(requirement: &str) -> String {
    format!(
        r#"Transform the requirement below into a single INCOSE-compliant requirement,
applying the full rule catalog. Explicitly enumerate every vague term you
replace and every numeric tolerance you introduce.

REQUIREMENT: {requirement}

{rules}

Respond with JSON only:
{{"type": "Functional|Performance|Interface|Safety|Security", "requirement": "...", "verification": "Test|Inspection|Analysis|Demonstration", "placeholders": ["..."], "rules": ["R..."], "vague_removed": ["old → new"], "tolerances": ["metric: value ± tolerance"], "summary": "..."}}"#,
        rules = INCOSE_RULES,
    )
}

/// Split prompt: produce exactly `count` atomic requirements, one per
/// identified capability, distributing the original's placeholders so
/// their union covers the original text's placeholders.
pub fn build_split_prompt(requirement: &str, count: usize, capabilities: &[String]) -> String {
    format!(
        r#"Split the requirement below into exactly {count} atomic INCOSE-compliant
requirements, one per capability. Distribute the original's [PLACEHOLDER]
tokens across them so that every placeholder appears in at least one
produced requirement.

REQUIREMENT: {requirement}
CAPABILITIES: {capabilities}

{rules}

Respond with a JSON array only:
[{{"id": "1", "type": "Functional|Performance|Interface|Safety|Security", "requirement": "...", "verification": "Test|Inspection|Analysis|Demonstration", "placeholders": ["..."], "rules": ["R..."], "vague_removed": ["..."], "tolerances": ["..."], "summary": "..."}}]"#,
        capabilities = capabilities.join(", "),
        rules = INCOSE_RULES,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_prompt_carries_requirement_and_rules() {
        let prompt = build_analyze_prompt("The system shall validate input.");
        assert!(prompt.contains("The system shall validate input."));
        assert!(prompt.contains("R18"));
        assert!(prompt.contains("\"should_split\""));
    }

    #[test]
    fn analyze_prompt_states_split_criterion() {
        let prompt = build_analyze_prompt("anything");
        assert!(prompt.contains("independently"));
        assert!(prompt.contains("semantically inseparable"));
    }

    #[test]
    fn improve_prompt_demands_enumerated_changes() {
        let prompt = build_improve_prompt("The system shall be fast.");
        assert!(prompt.contains("The system shall be fast."));
        assert!(prompt.contains("vague_removed"));
        assert!(prompt.contains("tolerances"));
        assert!(prompt.contains("R42"));
    }

    #[test]
    fn split_prompt_pins_count_and_capabilities() {
        let caps = vec!["validate input".to_string(), "log errors".to_string()];
        let prompt = build_split_prompt("The system shall validate and log.", 2, &caps);
        assert!(prompt.contains("exactly 2 atomic"));
        assert!(prompt.contains("validate input, log errors"));
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn system_prompt_pins_json_only_output() {
        assert!(SYSTEM_PROMPT.contains("JSON"));
        assert!(SYSTEM_PROMPT.contains("[PLACEHOLDER_NAME]"));
    }
}
