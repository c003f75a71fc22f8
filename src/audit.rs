// SPDX-License-Identifier: PMPL-1.0-or-later
//! Catalog integrity audit.
//!
//! Runs once when a registry is built. Error findings are authoring defects
//! that make the catalog unusable (duplicate ids, records filed under the
//! wrong guideline or principle, broken ordering); warnings and info findings
//! are reported but do not block construction.

use crate::criterion::{id_from_number, Principle, SuccessCriterion};
use crate::principle::info_for;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Severity levels for findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Integrity violation - blocks registry construction
    Error,
    /// Should be addressed
    Warning,
    /// Informational
    Info,
}

impl Severity {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Info => write!(f, "INFO"),
        }
    }
}

/// A single audit finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Rule identifier (e.g., "CAT-duplicate-id")
    pub rule_id: String,
    pub severity: Severity,
    pub message: String,
    /// Criterion id the finding is about
    pub criterion: Option<String>,
    /// Record field involved
    pub field: Option<String>,
    pub suggestion: Option<String>,
}

impl Finding {
    pub fn new(rule_id: &str, severity: Severity, message: &str) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            severity,
            message: message.to_string(),
            criterion: None,
            field: None,
            suggestion: None,
        }
    }

    pub fn with_criterion(mut self, id: &str) -> Self {
        self.criterion = Some(id.to_string());
        self
    }

    pub fn with_field(mut self, field: &str) -> Self {
        self.field = Some(field.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    /// Location string for display, e.g. "2-1-1.testing"
    pub fn location_string(&self) -> String {
        match (&self.criterion, &self.field) {
            (Some(c), Some(f)) => format!("{}.{}", c, f),
            (Some(c), None) => c.clone(),
            (None, Some(f)) => f.clone(),
            (None, None) => "<catalog>".to_string(),
        }
    }
}

/// A collection of findings with aggregation methods
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindingSet {
    pub findings: Vec<Finding>,
}

impl FindingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn by_severity(&self, severity: Severity) -> Vec<&Finding> {
        self.findings.iter().filter(|f| f.severity == severity).collect()
    }

    pub fn for_criterion(&self, id: &str) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| f.criterion.as_deref() == Some(id))
            .collect()
    }

    pub fn errors(&self) -> Vec<&Finding> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> Vec<&Finding> {
        self.by_severity(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity.is_fatal())
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// One-line summary of the error findings
    pub fn error_summary(&self) -> String {
        self.errors()
            .iter()
            .map(|f| format!("[{}] {}", f.rule_id, f.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Audit a registry-ordered list of criteria
pub fn audit(criteria: &[SuccessCriterion]) -> FindingSet {
    let mut findings = FindingSet::new();

    check_uniqueness(criteria, &mut findings);
    check_order(criteria, &mut findings);

    let numbers: HashSet<&str> = criteria.iter().map(|c| c.number.as_str()).collect();
    for c in criteria {
        check_identity(c, &mut findings);
        check_required_text(c, &mut findings);
        check_optional_sections(c, &mut findings);
        check_related(c, &numbers, &mut findings);
        check_resources(c, &mut findings);
    }

    check_principle_table(criteria, &mut findings);

    findings
}

fn check_uniqueness(criteria: &[SuccessCriterion], findings: &mut FindingSet) {
    let mut ids: HashSet<&str> = HashSet::new();
    let mut numbers: HashSet<&str> = HashSet::new();

    for c in criteria {
        if !ids.insert(&c.id) {
            findings.add(
                Finding::new(
                    "CAT-duplicate-id",
                    Severity::Error,
                    &format!("Criterion id {} is declared more than once", c.id),
                )
                .with_criterion(&c.id)
                .with_field("id"),
            );
        }
        if !numbers.insert(&c.number) {
            findings.add(
                Finding::new(
                    "CAT-duplicate-number",
                    Severity::Error,
                    &format!("Criterion number {} is declared more than once", c.number),
                )
                .with_criterion(&c.id)
                .with_field("number"),
            );
        }
    }
}

/// Parse a dotted number into numeric components; non-numeric parts sort last
fn number_key(number: &str) -> Vec<u32> {
    number
        .split('.')
        .map(|p| p.parse::<u32>().unwrap_or(u32::MAX))
        .collect()
}

fn check_order(criteria: &[SuccessCriterion], findings: &mut FindingSet) {
    for pair in criteria.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);

        if next.principle < prev.principle {
            findings.add(
                Finding::new(
                    "CAT-principle-order",
                    Severity::Error,
                    &format!(
                        "{} ({}) follows {} ({}); principles must appear in perceivable, operable, understandable, robust order",
                        next.number, next.principle, prev.number, prev.principle
                    ),
                )
                .with_criterion(&next.id)
                .with_field("principle"),
            );
        } else if next.principle == prev.principle
            && number_key(&next.guideline_number) < number_key(&prev.guideline_number)
        {
            findings.add(
                Finding::new(
                    "CAT-guideline-order",
                    Severity::Error,
                    &format!(
                        "Guideline {} appears after guideline {}",
                        next.guideline_number, prev.guideline_number
                    ),
                )
                .with_criterion(&next.id)
                .with_field("guidelineNumber"),
            );
        }
    }
}

fn check_identity(c: &SuccessCriterion, findings: &mut FindingSet) {
    if id_from_number(&c.number) != c.id {
        findings.add(
            Finding::new(
                "CAT-id-number-mismatch",
                Severity::Error,
                &format!("Criterion id {} does not match number {}", c.id, c.number),
            )
            .with_criterion(&c.id)
            .with_field("id")
            .with_suggestion(&format!("Use id \"{}\"", id_from_number(&c.number))),
        );
    }

    let prefix = format!("{}.", c.guideline_number);
    if !c.number.starts_with(&prefix) {
        findings.add(
            Finding::new(
                "CAT-guideline-prefix",
                Severity::Error,
                &format!(
                    "Criterion {} is filed under guideline {}",
                    c.number, c.guideline_number
                ),
            )
            .with_criterion(&c.id)
            .with_field("guidelineNumber"),
        );
    }

    let leading = c.guideline_number.split('.').next().unwrap_or("");
    if leading != c.principle.number().to_string() {
        findings.add(
            Finding::new(
                "CAT-principle-mismatch",
                Severity::Error,
                &format!(
                    "Guideline {} does not belong to principle {}",
                    c.guideline_number, c.principle
                ),
            )
            .with_criterion(&c.id)
            .with_field("principle"),
        );
    }
}

fn blank_text_finding(c: &SuccessCriterion, field: &str) -> Finding {
    Finding::new(
        "CAT-blank-text",
        Severity::Error,
        &format!("Criterion {} has blank text in {}", c.number, field),
    )
    .with_criterion(&c.id)
    .with_field(field)
}

fn check_required_text(c: &SuccessCriterion, findings: &mut FindingSet) {
    let required = [
        ("title", &c.title),
        ("guideline", &c.guideline),
        ("description", &c.description),
        ("summary", &c.summary),
        ("whyItMatters", &c.why_it_matters),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            findings.add(blank_text_finding(c, field));
        }
    }

    if let Some(testing) = &c.testing {
        if testing.manual.iter().any(|s| s.trim().is_empty()) {
            findings.add(blank_text_finding(c, "testing.manual"));
        }
        if testing.automated.iter().any(|s| s.trim().is_empty()) {
            findings.add(blank_text_finding(c, "testing.automated"));
        }
    }

    for example in c.examples.iter().flatten() {
        if example.title.trim().is_empty() || example.description.trim().is_empty() {
            findings.add(blank_text_finding(c, "examples"));
            break;
        }
    }
}

fn check_optional_sections(c: &SuccessCriterion, findings: &mut FindingSet) {
    let lists = [
        ("examples", c.examples.as_ref().map(Vec::len)),
        ("complianceRequirements", c.compliance_requirements.as_ref().map(Vec::len)),
        ("beyondCompliance", c.beyond_compliance.as_ref().map(Vec::len)),
        ("myths", c.myths.as_ref().map(Vec::len)),
        ("commonFailures", c.common_failures.as_ref().map(Vec::len)),
        ("keyTerms", c.key_terms.as_ref().map(Vec::len)),
        ("relatedCriteria", c.related_criteria.as_ref().map(Vec::len)),
        ("implementationChecklist", c.implementation_checklist.as_ref().map(Vec::len)),
        ("officialResources", c.official_resources.as_ref().map(Vec::len)),
    ];

    for (field, len) in lists {
        if len == Some(0) {
            findings.add(
                Finding::new(
                    "CAT-empty-section",
                    Severity::Warning,
                    &format!("Criterion {} declares {} with no entries", c.number, field),
                )
                .with_criterion(&c.id)
                .with_field(field)
                .with_suggestion("Remove the field or add entries"),
            );
        }
    }

    if let Some(testing) = &c.testing {
        if testing.manual.is_empty() && testing.automated.is_empty() {
            findings.add(
                Finding::new(
                    "CAT-empty-section",
                    Severity::Warning,
                    &format!("Criterion {} declares testing with no procedures", c.number),
                )
                .with_criterion(&c.id)
                .with_field("testing"),
            );
        }
    }
}

fn check_related(c: &SuccessCriterion, numbers: &HashSet<&str>, findings: &mut FindingSet) {
    for related in c.related_criteria.iter().flatten() {
        if related.number == c.number {
            findings.add(
                Finding::new(
                    "CAT-related-self",
                    Severity::Warning,
                    &format!("Criterion {} lists itself as related", c.number),
                )
                .with_criterion(&c.id)
                .with_field("relatedCriteria"),
            );
        } else if !numbers.contains(related.number.as_str()) {
            findings.add(
                Finding::new(
                    "CAT-related-dangling",
                    Severity::Warning,
                    &format!(
                        "Criterion {} links to unknown criterion {}",
                        c.number, related.number
                    ),
                )
                .with_criterion(&c.id)
                .with_field("relatedCriteria"),
            );
        }
    }
}

fn check_resources(c: &SuccessCriterion, findings: &mut FindingSet) {
    for resource in c.official_resources.iter().flatten() {
        if !resource.url.starts_with("http") {
            findings.add(
                Finding::new(
                    "CAT-resource-url",
                    Severity::Warning,
                    &format!("Resource {:?} has a non-HTTP URL: {}", resource.title, resource.url),
                )
                .with_criterion(&c.id)
                .with_field("officialResources"),
            );
        } else if !resource.url.contains("w3.org") {
            findings.add(
                Finding::new(
                    "CAT-resource-non-w3c",
                    Severity::Info,
                    &format!("Resource {:?} is not hosted by the W3C", resource.title),
                )
                .with_criterion(&c.id)
                .with_field("officialResources"),
            );
        }
    }
}

fn check_principle_table(criteria: &[SuccessCriterion], findings: &mut FindingSet) {
    let mut seen: HashMap<(Principle, &str), &str> = HashMap::new();
    for c in criteria {
        seen.entry((c.principle, c.guideline_number.as_str()))
            .or_insert(c.guideline.as_str());
    }

    let mut keys: Vec<_> = seen.into_iter().collect();
    keys.sort_by(|a, b| a.0.cmp(&b.0));

    for ((principle, number), title) in keys {
        match info_for(principle).guideline(number) {
            Some(entry) if entry.title == title => {}
            Some(entry) => findings.add(
                Finding::new(
                    "CAT-principle-table",
                    Severity::Warning,
                    &format!(
                        "Guideline {} is titled {:?} in the criteria but {:?} in the principle table",
                        number, title, entry.title
                    ),
                )
                .with_field("guideline"),
            ),
            None => findings.add(
                Finding::new(
                    "CAT-principle-table",
                    Severity::Warning,
                    &format!(
                        "Guideline {} {} is missing from the {} principle table",
                        number, title, principle
                    ),
                )
                .with_field("guidelineNumber"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criterion::{
        Example, ExampleKind, OfficialResource, RelatedCriterion, ResourceType, Testing, WcagLevel,
    };

    fn criterion(number: &str, principle: Principle, guideline: &str, title: &str) -> SuccessCriterion {
        let guideline_number = number.rsplit_once('.').map(|(g, _)| g).unwrap_or("").to_string();
        SuccessCriterion {
            id: id_from_number(number),
            number: number.to_string(),
            title: title.to_string(),
            level: WcagLevel::A,
            principle,
            guideline: guideline.to_string(),
            guideline_number,
            is_new: false,
            description: "description".to_string(),
            official_definition: None,
            summary: "summary".to_string(),
            detailed_summary: None,
            why_it_matters: "why".to_string(),
            who_benefits: vec![],
            details: None,
            examples: None,
            code_examples: None,
            testing: None,
            compliance_requirements: None,
            beyond_compliance: None,
            example_component: None,
            myths: None,
            common_failures: None,
            key_terms: None,
            related_criteria: None,
            implementation_checklist: None,
            official_resources: None,
        }
    }

    fn keyboard() -> SuccessCriterion {
        criterion("2.1.1", Principle::Operable, "Keyboard Accessible", "Keyboard")
    }

    fn rule_ids(findings: &FindingSet) -> Vec<&str> {
        findings.findings.iter().map(|f| f.rule_id.as_str()).collect()
    }

    #[test]
    fn test_clean_catalog() {
        let criteria = vec![
            criterion("1.1.1", Principle::Perceivable, "Text Alternatives", "Non-text Content"),
            keyboard(),
            criterion("2.1.2", Principle::Operable, "Keyboard Accessible", "No Keyboard Trap"),
        ];
        let findings = audit(&criteria);
        assert!(findings.is_empty(), "unexpected findings: {:?}", rule_ids(&findings));
    }

    #[test]
    fn test_duplicate_id_and_number() {
        let findings = audit(&[keyboard(), keyboard()]);
        assert!(findings.has_errors());
        let ids = rule_ids(&findings);
        assert!(ids.contains(&"CAT-duplicate-id"));
        assert!(ids.contains(&"CAT-duplicate-number"));
    }

    #[test]
    fn test_id_number_mismatch() {
        let mut c = keyboard();
        c.id = "2-1-9".to_string();
        let findings = audit(&[c]);
        assert_eq!(findings.errors()[0].rule_id, "CAT-id-number-mismatch");
        assert_eq!(findings.errors()[0].suggestion.as_deref(), Some("Use id \"2-1-1\""));
    }

    #[test]
    fn test_guideline_prefix_and_principle_mismatch() {
        let mut c = keyboard();
        c.guideline_number = "2.2".to_string();
        c.guideline = "Enough Time".to_string();
        let findings = audit(&[c]);
        assert!(rule_ids(&findings).contains(&"CAT-guideline-prefix"));

        let mut c = keyboard();
        c.principle = Principle::Robust;
        let findings = audit(&[c]);
        assert!(rule_ids(&findings).contains(&"CAT-principle-mismatch"));
    }

    #[test]
    fn test_order_violations() {
        let findings = audit(&[
            keyboard(),
            criterion("1.1.1", Principle::Perceivable, "Text Alternatives", "Non-text Content"),
        ]);
        assert!(rule_ids(&findings).contains(&"CAT-principle-order"));

        let findings = audit(&[
            criterion("2.2.1", Principle::Operable, "Enough Time", "Timing Adjustable"),
            keyboard(),
        ]);
        assert!(rule_ids(&findings).contains(&"CAT-guideline-order"));
    }

    #[test]
    fn test_guideline_order_is_numeric() {
        let findings = audit(&[
            criterion("2.4.9", Principle::Operable, "Navigable", "Link Purpose"),
            criterion("2.4.10", Principle::Operable, "Navigable", "Section Headings"),
        ]);
        assert!(!findings.has_errors());
    }

    #[test]
    fn test_blank_testing_entry_is_error() {
        let mut c = keyboard();
        c.testing = Some(Testing {
            manual: vec!["Tab through the page".to_string(), "  ".to_string()],
            automated: vec![],
        });
        let findings = audit(&[c]);
        assert!(findings.has_errors());
        assert_eq!(findings.errors()[0].field.as_deref(), Some("testing.manual"));
    }

    #[test]
    fn test_blank_title_is_error() {
        let mut c = keyboard();
        c.title = "   ".to_string();
        let findings = audit(&[c]);
        assert_eq!(findings.errors().len(), 1);
        assert_eq!(findings.errors()[0].rule_id, "CAT-blank-text");
        assert_eq!(findings.errors()[0].location_string(), "2-1-1.title");
        assert_eq!(
            findings.error_summary(),
            "[CAT-blank-text] Criterion 2.1.1 has blank text in title"
        );
    }

    #[test]
    fn test_blank_required_fields_reported_separately() {
        let mut c = keyboard();
        c.summary = String::new();
        c.why_it_matters = "\n".to_string();
        let findings = audit(&[c]);
        let fields: Vec<_> = findings.errors().iter().filter_map(|f| f.field.as_deref()).collect();
        assert_eq!(fields, vec!["summary", "whyItMatters"]);
    }

    #[test]
    fn test_blank_example_description_is_error() {
        let mut c = keyboard();
        c.examples = Some(vec![
            Example {
                title: "Native button".to_string(),
                description: "A <button> element is reachable with Tab".to_string(),
                kind: ExampleKind::Good,
                image: None,
                code: None,
            },
            Example {
                title: "Clickable div".to_string(),
                description: " ".to_string(),
                kind: ExampleKind::Bad,
                image: None,
                code: None,
            },
        ]);
        let findings = audit(&[c]);
        assert_eq!(findings.errors().len(), 1);
        assert_eq!(findings.errors()[0].rule_id, "CAT-blank-text");
        assert_eq!(findings.errors()[0].field.as_deref(), Some("examples"));
    }

    #[test]
    fn test_empty_section_is_warning() {
        let mut c = keyboard();
        c.myths = Some(vec![]);
        let findings = audit(&[c]);
        assert!(!findings.has_errors());
        assert_eq!(findings.warnings().len(), 1);
        assert_eq!(findings.warnings()[0].location_string(), "2-1-1.myths");
    }

    #[test]
    fn test_related_links() {
        let mut c = keyboard();
        c.related_criteria = Some(vec![
            RelatedCriterion {
                number: "9.9.9".to_string(),
                title: "Nothing".to_string(),
                relationship: "Related to".to_string(),
            },
            RelatedCriterion {
                number: "2.1.1".to_string(),
                title: "Keyboard".to_string(),
                relationship: "Related to".to_string(),
            },
        ]);
        let findings = audit(&[c]);
        let ids = rule_ids(&findings);
        assert!(ids.contains(&"CAT-related-dangling"));
        assert!(ids.contains(&"CAT-related-self"));
        assert!(!findings.has_errors());
    }

    #[test]
    fn test_resource_urls() {
        let mut c = keyboard();
        c.official_resources = Some(vec![
            OfficialResource {
                title: "Local".to_string(),
                url: "/understanding/keyboard".to_string(),
                kind: ResourceType::Understanding,
            },
            OfficialResource {
                title: "Blog".to_string(),
                url: "https://example.com/keyboard".to_string(),
                kind: ResourceType::Techniques,
            },
        ]);
        let findings = audit(&[c]);
        assert_eq!(findings.warnings().len(), 1);
        assert_eq!(findings.by_severity(Severity::Info).len(), 1);
    }

    #[test]
    fn test_guideline_missing_from_principle_table() {
        let c = criterion("2.9.1", Principle::Operable, "Imaginary", "Nothing");
        let findings = audit(&[c]);
        assert_eq!(rule_ids(&findings), vec!["CAT-principle-table"]);
    }

    #[test]
    fn test_guideline_title_differs_from_principle_table() {
        let c = criterion("2.1.1", Principle::Operable, "Keyboard Access", "Keyboard");
        let findings = audit(&[c]);
        assert!(!findings.has_errors());
        assert_eq!(rule_ids(&findings), vec!["CAT-principle-table"]);
        let warning = findings.warnings()[0];
        assert!(warning.message.contains("\"Keyboard Access\""));
        assert!(warning.message.contains("\"Keyboard Accessible\""));
        assert_eq!(warning.field.as_deref(), Some("guideline"));
    }

    #[test]
    fn test_for_criterion_and_summary() {
        let findings = audit(&[keyboard(), keyboard()]);
        assert_eq!(findings.for_criterion("2-1-1").len(), 2);
        assert!(findings.error_summary().contains("CAT-duplicate-id"));
    }
}
