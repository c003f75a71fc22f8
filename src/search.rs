// SPDX-License-Identifier: PMPL-1.0-or-later
//! Ranked free-text search over the registry.
//!
//! | Field            | Match              | Score                          |
//! |------------------|--------------------|--------------------------------|
//! | number           | exact / contains   | 1000 / 500                     |
//! | id               | exact (dots→dash)  | 800                            |
//! | title            | exact / contains   | 400 / 200                      |
//! | title            | partial words      | 100 × matched / query words    |
//! | summary          | contains           | 50                             |
//! | guideline        | contains           | 40                             |
//! | detailedSummary  | contains           | 30                             |
//! | principle        | contains           | 30                             |
//! | whyItMatters     | contains           | 20                             |
//! | level            | exact              | 100                            |
//! | keyTerms         | first term/def hit | 15                             |

use crate::criterion::{id_from_number, SuccessCriterion};
use crate::registry::Registry;
use serde::Serialize;

/// Record field that contributed to a search score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchedField {
    Number,
    Id,
    Title,
    Summary,
    DetailedSummary,
    WhyItMatters,
    Guideline,
    Level,
    Principle,
    KeyTerms,
}

impl std::fmt::Display for MatchedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MatchedField::Number => "number",
            MatchedField::Id => "id",
            MatchedField::Title => "title",
            MatchedField::Summary => "summary",
            MatchedField::DetailedSummary => "detailedSummary",
            MatchedField::WhyItMatters => "whyItMatters",
            MatchedField::Guideline => "guideline",
            MatchedField::Level => "level",
            MatchedField::Principle => "principle",
            MatchedField::KeyTerms => "keyTerms",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    pub criterion: &'a SuccessCriterion,
    pub score: f64,
    pub matched_fields: Vec<MatchedField>,
}

/// Score a single criterion against a trimmed, lowercased query
fn score_criterion(criterion: &SuccessCriterion, term: &str) -> (f64, Vec<MatchedField>) {
    let mut score = 0.0;
    let mut matched = Vec::new();

    let number = criterion.number.to_lowercase();
    if number == term {
        score += 1000.0;
        matched.push(MatchedField::Number);
    } else if number.contains(term) {
        score += 500.0;
        matched.push(MatchedField::Number);
    }

    if criterion.id.to_lowercase() == id_from_number(term) {
        score += 800.0;
        matched.push(MatchedField::Id);
    }

    let title = criterion.title.to_lowercase();
    if title == term {
        score += 400.0;
        matched.push(MatchedField::Title);
    } else if title.contains(term) {
        score += 200.0;
        matched.push(MatchedField::Title);
    } else {
        let title_words: Vec<&str> = title.split_whitespace().collect();
        let query_words: Vec<&str> = term.split_whitespace().collect();
        let hits = query_words
            .iter()
            .filter(|w| title_words.iter().any(|t| t.contains(*w)))
            .count();
        if hits > 0 {
            score += 100.0 * (hits as f64 / query_words.len() as f64);
            matched.push(MatchedField::Title);
        }
    }

    let contains = |text: &str| text.to_lowercase().contains(term);

    if contains(&criterion.summary) {
        score += 50.0;
        matched.push(MatchedField::Summary);
    }
    if criterion.detailed_summary.as_deref().is_some_and(contains) {
        score += 30.0;
        matched.push(MatchedField::DetailedSummary);
    }
    if contains(&criterion.why_it_matters) {
        score += 20.0;
        matched.push(MatchedField::WhyItMatters);
    }
    if contains(&criterion.guideline) {
        score += 40.0;
        matched.push(MatchedField::Guideline);
    }
    if criterion.level.as_str().to_lowercase() == term {
        score += 100.0;
        matched.push(MatchedField::Level);
    }
    if criterion.principle.as_str().contains(term) {
        score += 30.0;
        matched.push(MatchedField::Principle);
    }
    if criterion
        .key_terms
        .iter()
        .flatten()
        .any(|k| contains(&k.term) || contains(&k.definition))
    {
        score += 15.0;
        matched.push(MatchedField::KeyTerms);
    }

    (score, matched)
}

/// Search criteria, best match first. Ties keep registry order.
pub fn search<'a>(registry: &'a Registry, query: &str) -> Vec<SearchResult<'a>> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<SearchResult<'a>> = registry
        .all()
        .iter()
        .filter_map(|criterion| {
            let (score, matched_fields) = score_criterion(criterion, &term);
            (score > 0.0).then_some(SearchResult {
                criterion,
                score,
                matched_fields,
            })
        })
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results
}

/// Top `limit` criteria for a query
pub fn suggestions<'a>(registry: &'a Registry, query: &str, limit: usize) -> Vec<&'a SuccessCriterion> {
    search(registry, query)
        .into_iter()
        .take(limit)
        .map(|r| r.criterion)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::registry;

    #[test]
    fn test_empty_query() {
        assert!(search(registry(), "").is_empty());
        assert!(search(registry(), "   ").is_empty());
        assert!(suggestions(registry(), "", 5).is_empty());
    }

    #[test]
    fn test_exact_number_ranks_first() {
        let results = search(registry(), "2.1.1");
        let top = &results[0];
        assert_eq!(top.criterion.id, "2-1-1");
        assert!(top.matched_fields.contains(&MatchedField::Number));
        assert!(top.matched_fields.contains(&MatchedField::Id));
        assert!(top.score >= 1800.0);
    }

    #[test]
    fn test_title_search() {
        let results = search(registry(), "Keyboard");
        assert_eq!(results[0].criterion.title, "Keyboard");
        assert!(results.iter().any(|r| r.criterion.number == "2.1.2"));
    }

    #[test]
    fn test_sorted_descending() {
        let results = search(registry(), "focus");
        assert!(!results.is_empty());
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_level_match() {
        let results = search(registry(), "aaa");
        assert!(results
            .iter()
            .filter(|r| r.criterion.level.as_str() == "AAA")
            .all(|r| r.matched_fields.contains(&MatchedField::Level)));
    }

    #[test]
    fn test_no_match() {
        assert!(search(registry(), "zzzqqqxxy").is_empty());
    }

    #[test]
    fn test_suggestions_limit() {
        let s = suggestions(registry(), "content", 3);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_matched_field_display() {
        assert_eq!(MatchedField::DetailedSummary.to_string(), "detailedSummary");
        assert_eq!(MatchedField::KeyTerms.to_string(), "keyTerms");
    }
}
