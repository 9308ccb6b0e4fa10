//! Static catalog of the 42 INCOSE requirement-writing rules.
//!
//! Language-agnostic knowledge base supplied verbatim as context in
//! every prompt sent to the completion service. The catalog is never
//! interpreted locally — the service applies it; the pipeline only
//! records which rule identifiers the service reports as applied.

/// Number of rules in the catalog.
pub const RULE_COUNT: usize = 42;

/// The full rule catalog, R1–R42, plus the quality characteristics and
/// the placeholder-preservation instruction.
pub const INCOSE_RULES: &str = r#"
R1 – Structured Statements
- Use consistent pattern: [WHEN condition], [ENTITY] shall [ACTION] [OBJECT] [PERFORMANCE ± tolerance]
- Example: "When processing user queries, the Database_System shall return search results within 2.0 ± 0.5 seconds"
R2 – Active Voice
- Place responsible entity at beginning: "The Security_Module shall encrypt..." not "Data shall be encrypted..."
R3 – Appropriate Subject-Verb
- System requirements have system as subject, not users
- Good: "The Authentication_System shall prompt..." not "The user shall enter..."
R4 – Defined Terms
- All technical terms must be in glossary and used consistently
- Maintain terminology consistency across all artifacts
R5 – Definite Articles
- Use "the" for specific entities: "the Database_System" not "a database system"
R6 – Common Units of Measure
- Use consistent units throughout (no mixing metric/imperial)
R7 – Vague Terms
- Replace subjective terms with measurable criteria
- Avoid: "adequate", "reasonable", "user-friendly", "fast", "robust", "flexible"
R8 – Escape Clauses
- Eliminate: "where possible", "as appropriate", "if necessary", "to the extent possible"
R9 – Open-Ended Clauses
- Avoid: "including but not limited to", "etc.", "and so on"
- Explicitly list all items or create separate requirements
R10 – Superfluous Infinitives
- Remove "shall be able to" → use direct "shall"
- Remove "shall be capable of" → use direct "shall"
R11 – Separate Clauses
- Each condition or qualification in its own clause for clarity
R12 – Correct Grammar
- Ensure grammatically correct statements, critical for international teams
R13 – Correct Spelling
- Check spelling, watch for correctly spelled wrong words
R14 – Correct Punctuation
- Use proper punctuation to clarify clause relationships
R15 – Logical Expressions
- Use explicit notation: [X AND Y], [X OR Y] instead of ambiguous constructions
R16 – Use of "Not"
- Avoid negative requirements ("shall not fail")
- Use positive formulations: "shall have ≥99.9% availability"
R17 – Use of Oblique Symbol
- Don't use "/" - it can mean "and", "or", "per", or alternatives
- Use explicit language instead
R18 – Single Thought Sentence
- One requirement = one capability/action
- Split compound requirements: "validate AND log AND notify" → 3 requirements
- Exception: Semantically linked parameters for ONE capability stay together
R19 – Combinators
- Words "and", "or", "then" often indicate multiple thoughts → split
R20 – Purpose Phrases
- Avoid "in order to", "so that" in requirement text
- Put explanations in rationale attributes
R21 – Parentheses
- Avoid parenthetical information in requirements
- Move supplementary info to rationale
R22 – Enumeration
- Don't list multiple items in one requirement
- Create separate requirement for each enumerated item
R23 – Supporting Diagrams
- Reference diagrams/models for complex behaviors
- Don't try to capture everything in text
R24 – Pronouns
- Avoid "it", "they", "this", "that"
- Repeat nouns for self-contained statements
R25 – Headings
- Requirements must be complete without depending on headings
- Each requirement understandable in isolation
R26 – Absolutes
- Avoid "100%", "always", "never", "all" unless truly absolute
- Use realistic values: "≥99.9%" instead of "100%"
R27 – Explicit Conditions
- State all applicable conditions directly
- "When transmitting over public networks..." not just "shall encrypt"
R28 – Multiple Conditions
- Clarify AND vs OR when multiple conditions apply
- "[Condition_A AND Condition_B]" or "[Condition_A OR Condition_B]"
R29 – Classification
- Classify by type: functional, performance, interface, safety, security
- Enables gap analysis and conflict detection
R30 – Unique Expression
- Each requirement appears exactly once
- No duplication with different wording
R31 – Solution Free
- Describe WHAT (capabilities), not HOW (implementation)
- Avoid: "MySQL", "REST API", "Python" unless truly constrained
R32 – Universal Qualification
- Use "each" not "all", "any", "both"
- Clarifies: applies to every individual item, not collection as whole
R33 – Range of Values
- Provide tolerance ranges: "2.0 ± 0.3 seconds"
- Formats: X ± Y, X +Y/-Z, ≥X, ≤X, X to Y
R34 – Measurable Performance
- Replace subjective terms with specific measurable criteria
- "fast" → "within 2.0 ± 0.5 seconds"
R35 – Temporal Dependencies
- Replace vague terms: "eventually", "soon", "before"
- Use specific time constraints: "within 5.0 ± 1.0 minutes"
R36 – Consistent Terms and Units
- Identical terminology in requirements, design, tests, manuals
- Maintain and enforce project glossary
R37 – Acronyms
- Use same acronym consistently throughout
- Don't mix "GPS" and "Global Positioning System" randomly
R38 – Abbreviations
- Avoid unless necessary and clearly defined
- Many have multiple meanings depending on context
R39 – Style Guide
- Follow organization-wide standards for patterns, attributes, formatting
R40 – Decimal Format
- Consistent decimal notation and significant digits
- Don't mix "5.0" and "5.00" randomly
R41 – Related Requirements
- Group related requirements logically
- Helps identify gaps and conflicts
R42 – Structured Sets
- Use consistent organizational templates
- Ensure all requirement types considered: functional, performance, interface, safety, security

Quality Characteristics:
1. SINGULAR (R18): One capability per requirement
2. UNAMBIGUOUS (R2, R3, R7): Clear, active voice, no vague terms
3. COMPLETE (R1, R27): All necessary elements present
4. FEASIBLE (R26): Realistic, achievable within constraints
5. VERIFIABLE (R33, R34): Measurable criteria with tolerances
6. APPROPRIATE (R31): Level-appropriate, solution-free
7. CONSISTENT (R4, R36, R37): Terminology maintained throughout

ALL placeholders in format [PLACEHOLDER_NAME] from original requirement MUST be preserved exactly in transformed requirement.
"#;
