// SPDX-License-Identifier: PMPL-1.0-or-later
//! Success criterion records and the closed enumerations they use.
//!
//! Records are deserialized from the embedded guideline payloads with the
//! camelCase field names used by the payload files. Unknown fields and
//! out-of-range enumeration values are rejected at parse time.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

/// WCAG conformance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Level A - minimum conformance
    A,
    /// Level AA - standard conformance
    AA,
    /// Level AAA - enhanced conformance
    AAA,
}

impl WcagLevel {
    /// All levels, lowest first
    pub const ALL: [WcagLevel; 3] = [WcagLevel::A, WcagLevel::AA, WcagLevel::AAA];

    /// Whether conforming at `self` requires meeting a criterion of `level`.
    ///
    /// Conformance is cumulative: AA requires every A and AA criterion, AAA
    /// requires everything.
    pub fn requires(self, level: WcagLevel) -> bool {
        match self {
            WcagLevel::A => level == WcagLevel::A,
            WcagLevel::AA => matches!(level, WcagLevel::A | WcagLevel::AA),
            WcagLevel::AAA => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WcagLevel::A => "A",
            WcagLevel::AA => "AA",
            WcagLevel::AAA => "AAA",
        }
    }
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for WcagLevel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(WcagLevel::A),
            "AA" => Ok(WcagLevel::AA),
            "AAA" => Ok(WcagLevel::AAA),
            _ => Err(CatalogError::InvalidLevel(s.to_string())),
        }
    }
}

/// One of the four top-level WCAG principles (POUR)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Principle {
    Perceivable,
    Operable,
    Understandable,
    Robust,
}

impl Principle {
    /// Principles in registry order
    pub const ALL: [Principle; 4] = [
        Principle::Perceivable,
        Principle::Operable,
        Principle::Understandable,
        Principle::Robust,
    ];

    /// Key used in criterion records and the principle metadata table
    pub fn as_str(self) -> &'static str {
        match self {
            Principle::Perceivable => "perceivable",
            Principle::Operable => "operable",
            Principle::Understandable => "understandable",
            Principle::Robust => "robust",
        }
    }

    /// Capitalised display title
    pub fn title(self) -> &'static str {
        match self {
            Principle::Perceivable => "Perceivable",
            Principle::Operable => "Operable",
            Principle::Understandable => "Understandable",
            Principle::Robust => "Robust",
        }
    }

    /// Leading component of every guideline number under this principle
    pub fn number(self) -> u8 {
        match self {
            Principle::Perceivable => 1,
            Principle::Operable => 2,
            Principle::Understandable => 3,
            Principle::Robust => 4,
        }
    }
}

impl std::fmt::Display for Principle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Principle {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "perceivable" => Ok(Principle::Perceivable),
            "operable" => Ok(Principle::Operable),
            "understandable" => Ok(Principle::Understandable),
            "robust" => Ok(Principle::Robust),
            _ => Err(CatalogError::InvalidPrinciple(s.to_string())),
        }
    }
}

/// Introduction and intent text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Details {
    pub introduction: String,
    pub intent: String,
}

/// Whether an example demonstrates a pass or a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExampleKind {
    Good,
    Bad,
}

impl std::fmt::Display for ExampleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExampleKind::Good => write!(f, "good"),
            ExampleKind::Bad => write!(f, "bad"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Example {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ExampleKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Code snippets keyed by technology
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodeExamples {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub react: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vue: Option<String>,
}

impl CodeExamples {
    /// Present snippets as (language, code) pairs in a fixed order
    pub fn snippets(&self) -> Vec<(&'static str, &str)> {
        [
            ("html", &self.html),
            ("css", &self.css),
            ("js", &self.js),
            ("react", &self.react),
            ("vue", &self.vue),
        ]
        .into_iter()
        .filter_map(|(lang, code)| code.as_deref().map(|c| (lang, c)))
        .collect()
    }
}

/// Manual and automated testing procedures
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testing {
    pub manual: Vec<String>,
    pub automated: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Myth {
    pub myth: String,
    pub reality: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommonFailure {
    pub failure: String,
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyTerm {
    pub term: String,
    pub definition: String,
    pub context: String,
}

/// Link to another criterion by dotted number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelatedCriterion {
    pub number: String,
    pub title: String,
    pub relationship: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChecklistSection {
    pub category: String,
    pub items: Vec<String>,
}

/// Kind of W3C reference document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    Understanding,
    Techniques,
    Testing,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceType::Understanding => write!(f, "Understanding"),
            ResourceType::Techniques => write!(f, "Techniques"),
            ResourceType::Testing => write!(f, "Testing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OfficialResource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
}

/// One WCAG success criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SuccessCriterion {
    /// Stable identifier, e.g. "2-1-1"
    pub id: String,
    /// Dotted display number, e.g. "2.1.1"
    pub number: String,
    pub title: String,
    pub level: WcagLevel,
    pub principle: Principle,
    /// Parent guideline name, e.g. "Keyboard Accessible"
    pub guideline: String,
    /// Parent guideline number, e.g. "2.1"
    pub guideline_number: String,
    /// Introduced in WCAG 2.2
    pub is_new: bool,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_definition: Option<String>,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_summary: Option<String>,
    pub why_it_matters: String,
    pub who_benefits: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Example>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_examples: Option<CodeExamples>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testing: Option<Testing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_requirements: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beyond_compliance: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_component: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub myths: Option<Vec<Myth>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_failures: Option<Vec<CommonFailure>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_terms: Option<Vec<KeyTerm>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_criteria: Option<Vec<RelatedCriterion>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_checklist: Option<Vec<ChecklistSection>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_resources: Option<Vec<OfficialResource>>,
}

impl SuccessCriterion {
    /// Normative long-form text, falling back to the description when the
    /// record carries no separate definition
    pub fn official_definition(&self) -> &str {
        self.official_definition.as_deref().unwrap_or(&self.description)
    }

    /// Extended plain-language summary, falling back to the short summary
    pub fn detailed_summary(&self) -> &str {
        self.detailed_summary.as_deref().unwrap_or(&self.summary)
    }

    /// Examples of the given kind, in declaration order
    pub fn examples_of(&self, kind: ExampleKind) -> Vec<&Example> {
        self.examples
            .iter()
            .flatten()
            .filter(|e| e.kind == kind)
            .collect()
    }

    /// Whether the record carries any of the optional enrichment sections
    pub fn is_enriched(&self) -> bool {
        self.details.is_some()
            || self.examples.is_some()
            || self.testing.is_some()
            || self.myths.is_some()
            || self.common_failures.is_some()
    }

    /// Display label, e.g. "2.1.1 Keyboard"
    pub fn label(&self) -> String {
        format!("{} {}", self.number, self.title)
    }
}

/// Convert a dotted criterion number ("2.1.1") to its identifier ("2-1-1")
pub fn id_from_number(number: &str) -> String {
    number.replace('.', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json() -> &'static str {
        r#"{
            "id": "2-1-1",
            "number": "2.1.1",
            "title": "Keyboard",
            "level": "A",
            "principle": "operable",
            "guideline": "Keyboard Accessible",
            "guidelineNumber": "2.1",
            "isNew": false,
            "description": "All functionality is operable through a keyboard interface.",
            "summary": "Everything works with a keyboard.",
            "whyItMatters": "Some users cannot use a mouse.",
            "whoBenefits": ["Keyboard users"]
        }"#
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("A".parse::<WcagLevel>().unwrap(), WcagLevel::A);
        assert_eq!("aa".parse::<WcagLevel>().unwrap(), WcagLevel::AA);
        assert_eq!(" AAA ".parse::<WcagLevel>().unwrap(), WcagLevel::AAA);
        assert!(matches!(
            "AAAA".parse::<WcagLevel>(),
            Err(CatalogError::InvalidLevel(_))
        ));
        assert!("".parse::<WcagLevel>().is_err());
    }

    #[test]
    fn test_level_requires_is_cumulative() {
        assert!(WcagLevel::A.requires(WcagLevel::A));
        assert!(!WcagLevel::A.requires(WcagLevel::AA));
        assert!(WcagLevel::AA.requires(WcagLevel::A));
        assert!(!WcagLevel::AA.requires(WcagLevel::AAA));
        for level in WcagLevel::ALL {
            assert!(WcagLevel::AAA.requires(level));
        }
    }

    #[test]
    fn test_display_honours_width() {
        assert_eq!(format!("[{:<4}]", WcagLevel::A), "[A   ]");
        assert_eq!(format!("[{:>3}]", WcagLevel::AA), "[ AA]");
        assert_eq!(format!("[{:<15}]", Principle::Robust), "[robust         ]");
    }

    #[test]
    fn test_principle_parse_and_display() {
        for p in Principle::ALL {
            assert_eq!(p.as_str().parse::<Principle>().unwrap(), p);
            assert_eq!(p.to_string(), p.as_str());
        }
        assert_eq!("Operable".parse::<Principle>().unwrap(), Principle::Operable);
        assert!(matches!(
            "usable".parse::<Principle>(),
            Err(CatalogError::InvalidPrinciple(_))
        ));
    }

    #[test]
    fn test_minimal_record_deserializes() {
        let c: SuccessCriterion = serde_json::from_str(minimal_json()).unwrap();
        assert_eq!(c.level, WcagLevel::A);
        assert_eq!(c.principle, Principle::Operable);
        assert_eq!(c.guideline_number, "2.1");
        assert!(c.testing.is_none());
        assert!(!c.is_enriched());
        assert_eq!(c.official_definition(), c.description);
        assert_eq!(c.detailed_summary(), c.summary);
        assert_eq!(c.label(), "2.1.1 Keyboard");
    }

    #[test]
    fn test_unknown_level_rejected() {
        let json = minimal_json().replace(r#""level": "A""#, r#""level": "B""#);
        assert!(serde_json::from_str::<SuccessCriterion>(&json).is_err());
    }

    #[test]
    fn test_unknown_example_type_rejected() {
        let json = minimal_json().replace(
            r#""whoBenefits""#,
            r#""examples": [{"title": "t", "description": "d", "type": "ugly"}], "whoBenefits""#,
        );
        assert!(serde_json::from_str::<SuccessCriterion>(&json).is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let json = minimal_json().replace(r#""isNew""#, r#""isNeww": true, "isNew""#);
        assert!(serde_json::from_str::<SuccessCriterion>(&json).is_err());
    }

    #[test]
    fn test_absent_optionals_not_serialized() {
        let c: SuccessCriterion = serde_json::from_str(minimal_json()).unwrap();
        let value = serde_json::to_value(&c).unwrap();
        assert!(value.get("testing").is_none());
        assert_eq!(value["guidelineNumber"], "2.1");
        assert_eq!(value["isNew"], false);
    }

    #[test]
    fn test_examples_of_kind() {
        let json = minimal_json().replace(
            r#""whoBenefits""#,
            r#""examples": [
                {"title": "Bad", "description": "d", "type": "bad"},
                {"title": "Good", "description": "d", "type": "good", "code": "<button>"}
            ], "whoBenefits""#,
        );
        let c: SuccessCriterion = serde_json::from_str(&json).unwrap();
        let good = c.examples_of(ExampleKind::Good);
        assert_eq!(good.len(), 1);
        assert_eq!(good[0].code.as_deref(), Some("<button>"));
        assert!(c.is_enriched());
    }

    #[test]
    fn test_code_snippets_order() {
        let code = CodeExamples {
            react: Some("<Button/>".to_string()),
            html: Some("<button>".to_string()),
            ..Default::default()
        };
        let langs: Vec<_> = code.snippets().into_iter().map(|(l, _)| l).collect();
        assert_eq!(langs, vec!["html", "react"]);
    }

    #[test]
    fn test_id_from_number() {
        assert_eq!(id_from_number("2.4.11"), "2-4-11");
    }
}
