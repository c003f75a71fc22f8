// SPDX-License-Identifier: PMPL-1.0-or-later
//! Rendering of catalog data for the command line.
//!
//! Supports multiple output formats:
//! - Text: human-readable listings and detail views
//! - JSON: structured data for programmatic consumption
//! - Markdown: tables and sections for documentation sites

use crate::audit::{FindingSet, Severity};
use crate::checklist::Checklist;
use crate::criterion::{ExampleKind, SuccessCriterion};
use crate::principle::PrincipleInfo;
use crate::search::SearchResult;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// Markdown tables and sections
    Markdown,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize output: {}\"}}", e))
}

/// Escape a cell for a Markdown table
fn md_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "<br>")
}

fn new_marker(c: &SuccessCriterion) -> &'static str {
    if c.is_new {
        " [new in 2.2]"
    } else {
        ""
    }
}

/// Render a list of criteria
pub fn render_criteria(criteria: &[&SuccessCriterion], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(criteria),
        OutputFormat::Text => {
            let mut output = String::new();
            if criteria.is_empty() {
                output.push_str("No matching success criteria.\n");
                return output;
            }
            for c in criteria {
                output.push_str(&format!(
                    "{:<8} {:<4} {}{}\n",
                    c.number,
                    c.level,
                    c.title,
                    new_marker(c)
                ));
            }
            output.push_str(&format!("\n{} criterion(s)\n", criteria.len()));
            output
        }
        OutputFormat::Markdown => {
            let mut output = String::from("| Number | Level | Title | Guideline |\n|---|---|---|---|\n");
            for c in criteria {
                output.push_str(&format!(
                    "| {} | {} | {}{} | {} {} |\n",
                    c.number,
                    c.level,
                    md_cell(&c.title),
                    new_marker(c),
                    c.guideline_number,
                    md_cell(&c.guideline)
                ));
            }
            output
        }
    }
}

/// Render the detail view of one criterion
pub fn render_criterion(
    criterion: &SuccessCriterion,
    related: &[&SuccessCriterion],
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Json => to_json(criterion),
        OutputFormat::Text => render_criterion_text(criterion, related),
        OutputFormat::Markdown => render_criterion_markdown(criterion, related),
    }
}

fn render_criterion_text(c: &SuccessCriterion, related: &[&SuccessCriterion]) -> String {
    let mut output = String::new();

    output.push_str(&format!("=== {} {}{} ===\n\n", c.number, c.title, new_marker(c)));
    output.push_str(&format!("Level:     {}\n", c.level));
    output.push_str(&format!("Principle: {}\n", c.principle.title()));
    output.push_str(&format!("Guideline: {} {}\n\n", c.guideline_number, c.guideline));

    output.push_str(&format!("{}\n\n", c.official_definition()));
    output.push_str(&format!("In short: {}\n\n", c.detailed_summary()));
    output.push_str(&format!("Why it matters: {}\n", c.why_it_matters));

    if !c.who_benefits.is_empty() {
        output.push_str(&format!("Who benefits: {}\n", c.who_benefits.join(", ")));
    }

    if let Some(testing) = &c.testing {
        output.push_str("\n--- Testing ---\n");
        for step in &testing.manual {
            output.push_str(&format!("  [manual] {}\n", step));
        }
        for tool in &testing.automated {
            output.push_str(&format!("  [automated] {}\n", tool));
        }
    }

    if let Some(failures) = &c.common_failures {
        output.push_str("\n--- Common failures ---\n");
        for f in failures {
            output.push_str(&format!("  - {}\n    Fix: {}\n", f.failure, f.solution));
        }
    }

    if !related.is_empty() {
        output.push_str("\n--- Related ---\n");
        for r in related {
            output.push_str(&format!("  {} {} (Level {})\n", r.number, r.title, r.level));
        }
    }

    if !c.is_enriched() {
        output.push_str("\n(no extended guidance recorded)\n");
    }

    if let Some(resources) = &c.official_resources {
        output.push_str("\n--- Resources ---\n");
        for r in resources {
            output.push_str(&format!("  [{}] {} <{}>\n", r.kind, r.title, r.url));
        }
    }

    output
}

fn render_criterion_markdown(c: &SuccessCriterion, related: &[&SuccessCriterion]) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {} {}\n\n", c.number, c.title));
    output.push_str(&format!(
        "**Level {}** · {} · Guideline {} {}{}\n\n",
        c.level,
        c.principle.title(),
        c.guideline_number,
        c.guideline,
        new_marker(c)
    ));
    output.push_str(&format!("> {}\n\n", c.official_definition()));
    output.push_str(&format!("{}\n\n", c.detailed_summary()));
    output.push_str(&format!("## Why it matters\n\n{}\n\n", c.why_it_matters));

    if let Some(details) = &c.details {
        output.push_str(&format!("## Intent\n\n{}\n\n", details.intent));
    }

    for (heading, kind) in [("Passing examples", ExampleKind::Good), ("Failing examples", ExampleKind::Bad)] {
        let examples = c.examples_of(kind);
        if examples.is_empty() {
            continue;
        }
        output.push_str(&format!("## {}\n\n", heading));
        for e in examples {
            output.push_str(&format!("- **{}**: {}\n", e.title, e.description));
            if let Some(code) = &e.code {
                output.push_str(&format!("\n  ```html\n  {}\n  ```\n", code.replace('\n', "\n  ")));
            }
        }
        output.push('\n');
    }

    if let Some(code) = &c.code_examples {
        let snippets = code.snippets();
        if !snippets.is_empty() {
            output.push_str("## Code examples\n\n");
            for (lang, snippet) in snippets {
                let fence = if lang == "react" { "jsx" } else { lang };
                output.push_str(&format!("### {}\n\n```{}\n{}\n```\n\n", lang, fence, snippet.trim_end()));
            }
        }
    }

    if let Some(testing) = &c.testing {
        output.push_str("## Testing\n\n");
        for step in &testing.manual {
            output.push_str(&format!("- [ ] {}\n", step));
        }
        for tool in &testing.automated {
            output.push_str(&format!("- {} (automated)\n", tool));
        }
        output.push('\n');
    }

    if let Some(myths) = &c.myths {
        output.push_str("## Myths\n\n");
        for m in myths {
            output.push_str(&format!("- *{}*: {}\n", m.myth, m.reality));
        }
        output.push('\n');
    }

    if !related.is_empty() {
        output.push_str("## Related criteria\n\n");
        for r in related {
            output.push_str(&format!("- {} {} (Level {})\n", r.number, r.title, r.level));
        }
        output.push('\n');
    }

    output
}

/// Render the principle metadata table
pub fn render_principles(principles: &[&PrincipleInfo], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(principles),
        OutputFormat::Text => {
            let mut output = String::new();
            for p in principles {
                output.push_str(&format!("{} {} ({})\n", p.icon, p.title, p.key));
                output.push_str(&format!("  {}\n", p.description));
                for g in p.guidelines {
                    output.push_str(&format!("    {} {}\n", g.number, g.title));
                }
                output.push('\n');
            }
            output
        }
        OutputFormat::Markdown => {
            let mut output = String::new();
            for p in principles {
                output.push_str(&format!("## {} {}\n\n{}\n\n", p.icon, p.title, p.detailed_description));
                output.push_str("**Key concepts**\n\n");
                for concept in p.key_concepts {
                    output.push_str(&format!("- {}\n", concept));
                }
                output.push_str("\n**Guidelines**\n\n");
                for g in p.guidelines {
                    output.push_str(&format!("- {} {}\n", g.number, g.title));
                }
                output.push('\n');
            }
            output
        }
    }
}

/// Render search results
pub fn render_search(results: &[SearchResult<'_>], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(results),
        OutputFormat::Text => {
            if results.is_empty() {
                return "No results.\n".to_string();
            }
            let mut output = String::new();
            for r in results {
                let fields: Vec<String> = r.matched_fields.iter().map(|f| f.to_string()).collect();
                output.push_str(&format!(
                    "{:>7.1}  {:<8} {}  [{}]\n",
                    r.score,
                    r.criterion.number,
                    r.criterion.title,
                    fields.join(", ")
                ));
            }
            output
        }
        OutputFormat::Markdown => {
            let mut output = String::from("| Score | Number | Title | Matched |\n|---|---|---|---|\n");
            for r in results {
                let fields: Vec<String> = r.matched_fields.iter().map(|f| f.to_string()).collect();
                output.push_str(&format!(
                    "| {:.1} | {} | {} | {} |\n",
                    r.score,
                    r.criterion.number,
                    md_cell(&r.criterion.title),
                    fields.join(", ")
                ));
            }
            output
        }
    }
}

/// Render integrity audit findings
pub fn render_findings(findings: &FindingSet, format: OutputFormat) -> String {
    if format == OutputFormat::Json {
        return to_json(findings);
    }

    let mut output = String::new();
    let markdown = format == OutputFormat::Markdown;

    output.push_str(if markdown {
        "# WCAG Catalog Audit\n\n"
    } else {
        "=== WCAG Catalog Audit ===\n\n"
    });

    if findings.is_empty() {
        output.push_str("No issues found. All checks passed.\n");
        return output;
    }

    let errors = findings.errors().len();
    let warnings = findings.warnings().len();
    output.push_str(&format!(
        "Found {} issue(s): {} error(s), {} warning(s), {} info\n\n",
        findings.len(),
        errors,
        warnings,
        findings.len() - errors - warnings
    ));

    for severity in [Severity::Error, Severity::Warning, Severity::Info] {
        let sev_findings = findings.by_severity(severity);
        if sev_findings.is_empty() {
            continue;
        }

        if markdown {
            output.push_str(&format!("## {} ({})\n\n", severity, sev_findings.len()));
        } else {
            output.push_str(&format!("--- {} ({}) ---\n", severity, sev_findings.len()));
        }

        for finding in sev_findings {
            let bullet = if markdown { "- " } else { "" };
            output.push_str(&format!("{}[{}] {}\n", bullet, finding.rule_id, finding.message));
            output.push_str(&format!("  Location: {}\n", finding.location_string()));
            if let Some(ref suggestion) = finding.suggestion {
                output.push_str(&format!("  Fix: {}\n", suggestion));
            }
        }
        output.push('\n');
    }

    if findings.has_errors() {
        output.push_str("RESULT: CATALOG INVALID\n");
    } else {
        output.push_str("RESULT: PASS WITH WARNINGS\n");
    }

    output
}

/// Render a checklist
pub fn render_checklist(checklist: &Checklist, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(checklist),
        OutputFormat::Markdown => {
            let mut output = String::from("# WCAG 2.2 Checklist\n\n");
            let headers = checklist.headers();
            output.push_str(&format!("| {} |\n", headers.join(" | ")));
            output.push_str(&format!("|{}\n", "---|".repeat(headers.len())));
            for row in &checklist.rows {
                let cells: Vec<String> = row.iter().map(|c| md_cell(c)).collect();
                output.push_str(&format!("| {} |\n", cells.join(" | ")));
            }
            output.push('\n');
            output.push_str(&checklist_summary_text(checklist));
            output
        }
        OutputFormat::Text => {
            let mut output = String::new();
            let widths: Vec<usize> = checklist.columns.iter().map(|c| c.width()).collect();

            for (header, width) in checklist.headers().iter().zip(&widths) {
                output.push_str(&format!("{:<width$} ", header, width = *width));
            }
            output.push('\n');

            for row in &checklist.rows {
                for (cell, width) in row.iter().zip(&widths) {
                    let flat = cell.replace('\n', " / ");
                    output.push_str(&format!("{:<width$} ", truncate(&flat, *width), width = *width));
                }
                output.push('\n');
            }
            output.push('\n');
            output.push_str(&checklist_summary_text(checklist));
            output
        }
    }
}

fn checklist_summary_text(checklist: &Checklist) -> String {
    let s = &checklist.summary;
    let principles: Vec<&str> = s.principles.iter().map(|p| p.title()).collect();
    format!(
        "Total Criteria: {}\nLevel A: {}\nLevel AA: {}\nLevel AAA: {}\nNew in 2.2: {}\nPrinciples Included: {}\nGenerated: {}\n",
        s.total,
        s.level_a,
        s.level_aa,
        s.level_aaa,
        s.new_in_22,
        principles.join(", "),
        s.generated_at.format("%Y-%m-%d")
    )
}

/// Truncate to `width` characters, marking the cut with an ellipsis
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
