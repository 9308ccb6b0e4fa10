//! Aggregator: flatten one item's atomic requirements into report rows.
//!
//! One row per atomic requirement, input order preserved. The group's
//! consolidated and detailed summaries are attached only to the first
//! row; every later row of the same group carries empty strings for
//! both — downstream consumers treat "first row of group" as the group
//! summary locus, so this sparse-attachment convention is load-bearing.

use crate::models::{AtomicRequirement, RawRequirement};
use crate::report::ReportRow;

/// Semicolon-joined rendering of a list field.
fn join_list(items: &[String]) -> String {
    items.join("; ")
}

/// One-line group summary for a multi-requirement group: the count and
/// the set of requirement types involved, first-seen order.
fn consolidated_summary(results: &[AtomicRequirement]) -> String {
    let mut types: Vec<&str> = Vec::new();
    for atomic in results {
        let name = atomic.requirement_type.as_str();
        if !types.contains(&name) {
            types.push(name);
        }
    }
    format!(
        "System shall meet {} requirements ({}).",
        results.len(),
        types.join(", ")
    )
}

/// Numbered enumeration of every sub-requirement's text.
fn detailed_summary(results: &[AtomicRequirement]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(i, atomic)| format!("{}. {}", i + 1, atomic.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Flatten one item's results into report rows, one per atomic
/// requirement, in order.
pub fn aggregate(requirement: &RawRequirement, results: &[AtomicRequirement]) -> Vec<ReportRow> {
    let (consolidated, detailed) = match results {
        [single] => (single.text.clone(), single.text.clone()),
        _ => (consolidated_summary(results), detailed_summary(results)),
    };

    results
        .iter()
        .enumerate()
        .map(|(i, atomic)| ReportRow {
            category: requirement.category.clone(),
            customer_req: requirement.text.clone(),
            ambiguities_identified: atomic.summary.clone(),
            improvements_made: join_list(&atomic.applied_rules),
            vague_terms_removed: join_list(&atomic.vague_replacements),
            tolerances_added: join_list(&atomic.tolerances),
            consolidated_requirement: if i == 0 { consolidated.clone() } else { String::new() },
            detailed_requirement: if i == 0 { detailed.clone() } else { String::new() },
            sub_requirement_text: atomic.text.clone(),
            verification_method: atomic.verification.to_string(),
        })
        .collect()
}

/// Single error row for a whole-item processing failure. The batch
/// continues to the next requirement afterwards.
pub fn error_row(requirement: &RawRequirement, message: &str) -> ReportRow {
    let marker = format!("ERROR: {message}");
    ReportRow {
        category: requirement.category.clone(),
        customer_req: requirement.text.clone(),
        ambiguities_identified: String::new(),
        improvements_made: String::new(),
        vague_terms_removed: String::new(),
        tolerances_added: String::new(),
        consolidated_requirement: marker.clone(),
        detailed_requirement: marker.clone(),
        sub_requirement_text: marker,
        verification_method: "N/A".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RequirementType, VerificationMethod};

    fn raw() -> RawRequirement {
        RawRequirement {
            category: "REQ_007".into(),
            text: "The system shall validate input and log errors.".into(),
            ordinal: 6,
        }
    }

    fn atomic(text: &str, requirement_type: RequirementType) -> AtomicRequirement {
        AtomicRequirement {
            requirement_type,
            text: text.into(),
            verification: VerificationMethod::Test,
            placeholders: vec![],
            applied_rules: vec!["R18".into(), "R22".into()],
            vague_replacements: vec!["quickly → within 2.0 s".into()],
            tolerances: vec!["latency: 2.0 ± 0.5 s".into()],
            summary: "tightened wording".into(),
        }
    }

    #[test]
    fn single_result_consolidated_equals_detailed_equals_text() {
        let results = [atomic("The system shall validate each input record.", RequirementType::Functional)];
        let rows = aggregate(&raw(), &results);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].consolidated_requirement, results[0].text);
        assert_eq!(rows[0].detailed_requirement, results[0].text);
        assert_eq!(rows[0].sub_requirement_text, results[0].text);
    }

    #[test]
    fn multi_result_sparse_attachment() {
        let results = [
            atomic("The system shall validate each input record.", RequirementType::Functional),
            atomic("The system shall log each detected error.", RequirementType::Functional),
            atomic("The system shall notify the administrator.", RequirementType::Interface),
        ];
        let rows = aggregate(&raw(), &results);

        assert_eq!(rows.len(), 3);
        assert!(!rows[0].consolidated_requirement.is_empty());
        assert!(!rows[0].detailed_requirement.is_empty());
        for row in &rows[1..] {
            assert!(row.consolidated_requirement.is_empty());
            assert!(row.detailed_requirement.is_empty());
        }
    }

    #[test]
    fn consolidated_names_count_and_types() {
        let results = [
            atomic("a", RequirementType::Functional),
            atomic("b", RequirementType::Functional),
            atomic("c", RequirementType::Interface),
        ];
        let rows = aggregate(&raw(), &results);
        let consolidated = &rows[0].consolidated_requirement;

        assert!(consolidated.contains('3'));
        assert!(consolidated.contains("Functional"));
        assert!(consolidated.contains("Interface"));
    }

    #[test]
    fn detailed_is_numbered_enumeration() {
        let results = [
            atomic("first requirement", RequirementType::Functional),
            atomic("second requirement", RequirementType::Safety),
        ];
        let rows = aggregate(&raw(), &results);

        assert_eq!(
            rows[0].detailed_requirement,
            "1. first requirement\n2. second requirement"
        );
    }

    #[test]
    fn per_row_lists_are_own_not_group_union() {
        let mut first = atomic("a", RequirementType::Functional);
        first.vague_replacements = vec!["fast → 2.0 s".into()];
        let mut second = atomic("b", RequirementType::Functional);
        second.vague_replacements = vec!["robust → MTBF ≥ 1000 h".into(), "easy → 3 steps".into()];

        let rows = aggregate(&raw(), &[first, second]);
        assert_eq!(rows[0].vague_terms_removed, "fast → 2.0 s");
        assert_eq!(rows[1].vague_terms_removed, "robust → MTBF ≥ 1000 h; easy → 3 steps");
    }

    #[test]
    fn rows_carry_parent_identity_in_order() {
        let results = [
            atomic("a", RequirementType::Functional),
            atomic("b", RequirementType::Functional),
        ];
        let rows = aggregate(&raw(), &results);
        for row in &rows {
            assert_eq!(row.category, "REQ_007");
            assert_eq!(row.customer_req, "The system shall validate input and log errors.");
        }
        assert_eq!(rows[0].sub_requirement_text, "a");
        assert_eq!(rows[1].sub_requirement_text, "b");
    }

    #[test]
    fn error_row_carries_markers_everywhere_downstream_looks() {
        let row = error_row(&raw(), "pipeline blew up");
        assert_eq!(row.category, "REQ_007");
        assert!(row.sub_requirement_text.contains("ERROR: pipeline blew up"));
        assert!(row.consolidated_requirement.starts_with("ERROR:"));
        assert!(row.detailed_requirement.starts_with("ERROR:"));
        assert_eq!(row.verification_method, "N/A");
    }

    #[test]
    fn sentinel_group_renders_na_verification() {
        let sentinel = AtomicRequirement::failure("service exhausted");
        let rows = aggregate(&raw(), &[sentinel]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].verification_method, "N/A");
        assert!(rows[0].sub_requirement_text.starts_with("ERROR:"));
    }
}
