// SPDX-License-Identifier: PMPL-1.0-or-later
//! Global success criteria registry.
//!
//! The registry is the flat concatenation of the four principle aggregates in
//! perceivable, operable, understandable, robust order. It is built once,
//! audited, and never mutated; every query is a pure read over it.
//!
//! | Query                     | Not found / no match          |
//! |---------------------------|-------------------------------|
//! | `criteria_by_principle`   | empty list                    |
//! | `criterion_by_id`         | `None`                        |
//! | `criterion_by_number`     | `None`                        |
//! | `criteria_by_level`       | n/a (typed input)             |
//! | `criteria_by_level_str`   | `CatalogError::InvalidLevel`  |

use crate::audit::{audit, FindingSet};
use crate::criterion::{Principle, SuccessCriterion, WcagLevel};
use crate::error::{CatalogError, Result};
use crate::guidelines;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

/// Criteria of one guideline, borrowed from the registry
#[derive(Debug, Clone)]
pub struct GuidelineGroup<'a> {
    pub number: &'a str,
    pub title: &'a str,
    pub criteria: Vec<&'a SuccessCriterion>,
}

/// Immutable, audited collection of success criteria
#[derive(Debug)]
pub struct Registry {
    criteria: Vec<SuccessCriterion>,
    by_id: HashMap<String, usize>,
    by_number: HashMap<String, usize>,
    findings: FindingSet,
}

impl Registry {
    /// Build a registry from criteria already in registry order.
    ///
    /// Fails with [`CatalogError::Integrity`] if the audit reports any error.
    pub fn from_criteria(criteria: Vec<SuccessCriterion>) -> Result<Self> {
        let findings = audit(&criteria);
        if findings.has_errors() {
            return Err(CatalogError::Integrity {
                count: findings.errors().len(),
                summary: findings.error_summary(),
            });
        }
        for finding in findings.warnings() {
            warn!(rule = %finding.rule_id, location = %finding.location_string(), "{}", finding.message);
        }

        let by_id = criteria
            .iter()
            .enumerate()
            .map(|(idx, c)| (c.id.clone(), idx))
            .collect();
        let by_number = criteria
            .iter()
            .enumerate()
            .map(|(idx, c)| (c.number.clone(), idx))
            .collect();

        debug!(count = criteria.len(), "Built criteria registry");
        Ok(Self {
            criteria,
            by_id,
            by_number,
            findings,
        })
    }

    /// Load the embedded catalog
    pub fn load() -> Result<Self> {
        let per_principle = Principle::ALL
            .iter()
            .map(|p| guidelines::criteria_for(*p))
            .collect::<Result<Vec<_>>>()?;
        let registry = Self::from_criteria(crate::guideline::aggregate(per_principle))?;

        info!(
            criteria = registry.len(),
            new = registry.new_criteria().len(),
            "Loaded WCAG catalog"
        );
        Ok(registry)
    }

    /// All criteria in registry order
    pub fn all(&self) -> &[SuccessCriterion] {
        &self.criteria
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Non-fatal findings from the construction-time audit
    pub fn findings(&self) -> &FindingSet {
        &self.findings
    }

    /// Criteria whose principle key equals `principle`. Unknown keys give an empty list.
    pub fn by_principle(&self, principle: &str) -> Vec<&SuccessCriterion> {
        self.criteria
            .iter()
            .filter(|c| c.principle.as_str() == principle)
            .collect()
    }

    pub fn in_principle(&self, principle: Principle) -> Vec<&SuccessCriterion> {
        self.criteria
            .iter()
            .filter(|c| c.principle == principle)
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&SuccessCriterion> {
        self.by_id.get(id).map(|&idx| &self.criteria[idx])
    }

    pub fn get_by_number(&self, number: &str) -> Option<&SuccessCriterion> {
        self.by_number.get(number).map(|&idx| &self.criteria[idx])
    }

    /// Look up by id ("2-1-1") or dotted number ("2.1.1")
    pub fn resolve(&self, key: &str) -> Option<&SuccessCriterion> {
        let key = key.trim();
        self.get(key).or_else(|| self.get_by_number(key))
    }

    /// Criteria introduced in WCAG 2.2
    pub fn new_criteria(&self) -> Vec<&SuccessCriterion> {
        self.criteria.iter().filter(|c| c.is_new).collect()
    }

    /// Criteria required to conform at `level`.
    ///
    /// Conformance is cumulative: A gives level A criteria only, AA gives A
    /// and AA, AAA gives the whole registry unfiltered.
    pub fn by_level(&self, level: WcagLevel) -> Vec<&SuccessCriterion> {
        match level {
            WcagLevel::AAA => self.criteria.iter().collect(),
            WcagLevel::A | WcagLevel::AA => self
                .criteria
                .iter()
                .filter(|c| level.requires(c.level))
                .collect(),
        }
    }

    /// String form of [`Registry::by_level`]; rejects anything but A, AA, AAA
    pub fn by_level_str(&self, level: &str) -> Result<Vec<&SuccessCriterion>> {
        let level: WcagLevel = level.parse()?;
        Ok(self.by_level(level))
    }

    /// Criteria of a principle grouped by guideline, in registry order
    pub fn guideline_groups(&self, principle: Principle) -> Vec<GuidelineGroup<'_>> {
        let mut groups: Vec<GuidelineGroup<'_>> = Vec::new();
        for c in self.in_principle(principle) {
            if let Some(group) = groups
                .last_mut()
                .filter(|g| g.number == c.guideline_number)
            {
                group.criteria.push(c);
                continue;
            }
            groups.push(GuidelineGroup {
                number: &c.guideline_number,
                title: &c.guideline,
                criteria: vec![c],
            });
        }
        groups
    }

    /// Resolve a criterion's related-criteria links, skipping unknown numbers
    pub fn related(&self, criterion: &SuccessCriterion) -> Vec<&SuccessCriterion> {
        criterion
            .related_criteria
            .iter()
            .flatten()
            .filter_map(|r| self.get_by_number(&r.number))
            .collect()
    }
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| match Registry::load() {
    Ok(registry) => registry,
    Err(e) => panic!("embedded WCAG catalog is invalid: {e}"),
});

/// The process-wide registry, built on first access.
///
/// Panics on first access if the embedded catalog fails its integrity audit.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// The full ordered list of success criteria
pub fn success_criteria() -> &'static [SuccessCriterion] {
    registry().all()
}

pub fn criteria_by_principle(principle: &str) -> Vec<&'static SuccessCriterion> {
    registry().by_principle(principle)
}

pub fn criterion_by_id(id: &str) -> Option<&'static SuccessCriterion> {
    registry().get(id)
}

pub fn criterion_by_number(number: &str) -> Option<&'static SuccessCriterion> {
    registry().get_by_number(number)
}

pub fn new_criteria() -> Vec<&'static SuccessCriterion> {
    registry().new_criteria()
}

pub fn criteria_by_level(level: WcagLevel) -> Vec<&'static SuccessCriterion> {
    registry().by_level(level)
}

pub fn criteria_by_level_str(level: &str) -> Result<Vec<&'static SuccessCriterion>> {
    registry().by_level_str(level)
}

pub fn criteria_in(principle: Principle) -> Vec<&'static SuccessCriterion> {
    registry().in_principle(principle)
}

pub fn guideline_groups(principle: Principle) -> Vec<GuidelineGroup<'static>> {
    registry().guideline_groups(principle)
}

pub fn related_criteria(criterion: &SuccessCriterion) -> Vec<&'static SuccessCriterion> {
    registry().related(criterion)
}
