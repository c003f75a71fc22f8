// SPDX-License-Identifier: PMPL-1.0-or-later
//! Conformance checklist export.
//!
//! A checklist is a filtered table of criteria with a configurable column
//! set and a summary block. Level filtering here is exact membership in the
//! chosen level set, not cumulative conformance.

use crate::criterion::{Principle, SuccessCriterion, WcagLevel};
use crate::registry::Registry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which criteria go into the checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistFilter {
    /// Levels to include
    #[serde(default = "default_levels")]
    pub levels: Vec<WcagLevel>,
    /// Principles to include; empty means all
    #[serde(default)]
    pub principles: Vec<Principle>,
    /// Only WCAG 2.2 additions
    #[serde(default)]
    pub new_only: bool,
}

impl Default for ChecklistFilter {
    fn default() -> Self {
        Self {
            levels: default_levels(),
            principles: Principle::ALL.to_vec(),
            new_only: false,
        }
    }
}

fn default_levels() -> Vec<WcagLevel> {
    vec![WcagLevel::A, WcagLevel::AA]
}

impl ChecklistFilter {
    pub fn matches(&self, criterion: &SuccessCriterion) -> bool {
        self.levels.contains(&criterion.level)
            && (self.principles.is_empty() || self.principles.contains(&criterion.principle))
            && (!self.new_only || criterion.is_new)
    }
}

/// Checklist column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Number,
    Title,
    Level,
    Principle,
    Guideline,
    IsNew,
    Summary,
    Description,
    WhyItMatters,
    WhoBenefits,
    ImplementationChecklist,
    TestingManual,
    TestingAutomated,
    CommonFailures,
}

impl Column {
    pub const ALL: [Column; 14] = [
        Column::Number,
        Column::Title,
        Column::Level,
        Column::Principle,
        Column::Guideline,
        Column::IsNew,
        Column::Summary,
        Column::Description,
        Column::WhyItMatters,
        Column::WhoBenefits,
        Column::ImplementationChecklist,
        Column::TestingManual,
        Column::TestingAutomated,
        Column::CommonFailures,
    ];

    /// Config/CLI key, matching the serde name
    pub fn key(self) -> &'static str {
        match self {
            Column::Number => "number",
            Column::Title => "title",
            Column::Level => "level",
            Column::Principle => "principle",
            Column::Guideline => "guideline",
            Column::IsNew => "is_new",
            Column::Summary => "summary",
            Column::Description => "description",
            Column::WhyItMatters => "why_it_matters",
            Column::WhoBenefits => "who_benefits",
            Column::ImplementationChecklist => "implementation_checklist",
            Column::TestingManual => "testing_manual",
            Column::TestingAutomated => "testing_automated",
            Column::CommonFailures => "common_failures",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::Number => "Criterion Number",
            Column::Title => "Title",
            Column::Level => "Level",
            Column::Principle => "Principle",
            Column::Guideline => "Guideline",
            Column::IsNew => "New in 2.2",
            Column::Summary => "Summary",
            Column::Description => "Description",
            Column::WhyItMatters => "Why It Matters",
            Column::WhoBenefits => "Who Benefits",
            Column::ImplementationChecklist => "Implementation Checklist",
            Column::TestingManual => "Manual Testing",
            Column::TestingAutomated => "Automated Testing",
            Column::CommonFailures => "Common Failures",
        }
    }

    /// Preferred display width in characters
    pub fn width(self) -> usize {
        match self {
            Column::Number => 15,
            Column::Title => 35,
            Column::Level => 8,
            Column::Principle => 15,
            Column::Guideline => 25,
            Column::IsNew => 12,
            Column::Summary | Column::WhyItMatters | Column::ImplementationChecklist | Column::CommonFailures => 50,
            Column::Description => 60,
            Column::WhoBenefits | Column::TestingManual | Column::TestingAutomated => 40,
        }
    }

    pub fn enabled_by_default(self) -> bool {
        matches!(
            self,
            Column::Number | Column::Title | Column::Level | Column::Principle | Column::Summary
        )
    }

    pub fn defaults() -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|c| c.enabled_by_default())
            .collect()
    }

    /// Cell text for a criterion
    pub fn value(self, c: &SuccessCriterion) -> String {
        match self {
            Column::Number => c.number.clone(),
            Column::Title => c.title.clone(),
            Column::Level => c.level.to_string(),
            Column::Principle => c.principle.title().to_string(),
            Column::Guideline => c.guideline.clone(),
            Column::IsNew => (if c.is_new { "Yes" } else { "No" }).to_string(),
            Column::Summary => c.summary.clone(),
            Column::Description => c.description.clone(),
            Column::WhyItMatters => c.why_it_matters.clone(),
            Column::WhoBenefits => c.who_benefits.join("; "),
            Column::ImplementationChecklist => c
                .implementation_checklist
                .iter()
                .flatten()
                .map(|s| format!("{}: {}", s.category, s.items.join(", ")))
                .collect::<Vec<_>>()
                .join("\n"),
            Column::TestingManual => c
                .testing
                .as_ref()
                .map(|t| t.manual.join("\n"))
                .unwrap_or_default(),
            Column::TestingAutomated => c
                .testing
                .as_ref()
                .map(|t| t.automated.join("\n"))
                .unwrap_or_default(),
            Column::CommonFailures => c
                .common_failures
                .iter()
                .flatten()
                .map(|f| format!("• {}", f.failure))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

impl std::str::FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['-', ' '], "_");
        Column::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| format!("Unknown checklist column: {}", s))
    }
}

/// Counts shown alongside the checklist
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistSummary {
    pub total: usize,
    pub level_a: usize,
    pub level_aa: usize,
    pub level_aaa: usize,
    pub new_in_22: usize,
    pub principles: Vec<Principle>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Checklist {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub summary: ChecklistSummary,
}

impl Checklist {
    pub fn build(registry: &Registry, filter: &ChecklistFilter, columns: &[Column]) -> Self {
        let selected: Vec<&SuccessCriterion> =
            registry.all().iter().filter(|c| filter.matches(c)).collect();

        let rows = selected
            .iter()
            .map(|c| columns.iter().map(|col| col.value(c)).collect())
            .collect();

        let count = |level: WcagLevel| selected.iter().filter(|c| c.level == level).count();
        let principles = if filter.principles.is_empty() {
            Principle::ALL.to_vec()
        } else {
            filter.principles.clone()
        };

        let summary = ChecklistSummary {
            total: selected.len(),
            level_a: count(WcagLevel::A),
            level_aa: count(WcagLevel::AA),
            level_aaa: count(WcagLevel::AAA),
            new_in_22: selected.iter().filter(|c| c.is_new).count(),
            principles,
            generated_at: Utc::now(),
        };

        debug!(rows = summary.total, columns = columns.len(), "Built checklist");
        Self {
            columns: columns.to_vec(),
            rows,
            summary,
        }
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.label()).collect()
    }
}
