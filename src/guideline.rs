// SPDX-License-Identifier: PMPL-1.0-or-later
//! Guideline modules and principle aggregation.
//!
//! A [`GuidelineModule`] pairs the metadata of one WCAG guideline with the
//! embedded JSON payload holding its criteria. Principle aggregation is plain
//! order-preserving concatenation of the loaded modules.

use crate::criterion::{Principle, SuccessCriterion};
use crate::error::{CatalogError, Result};
use tracing::debug;

/// Static descriptor for one guideline's criteria payload
#[derive(Debug, Clone, Copy)]
pub struct GuidelineModule {
    /// Dotted guideline number, e.g. "2.1"
    pub number: &'static str,
    /// Guideline title, e.g. "Keyboard Accessible"
    pub title: &'static str,
    /// Owning principle
    pub principle: Principle,
    source: &'static str,
}

impl GuidelineModule {
    pub const fn new(
        number: &'static str,
        title: &'static str,
        principle: Principle,
        source: &'static str,
    ) -> Self {
        Self {
            number,
            title,
            principle,
            source,
        }
    }

    /// Parse the payload and check every record belongs to this guideline
    pub fn load(&self) -> Result<Vec<SuccessCriterion>> {
        let criteria: Vec<SuccessCriterion> = serde_json::from_str(self.source)?;

        for c in &criteria {
            let reason = if c.guideline_number != self.number {
                Some(format!("guidelineNumber is {}", c.guideline_number))
            } else if c.guideline != self.title {
                Some(format!("guideline is {:?}", c.guideline))
            } else if c.principle != self.principle {
                Some(format!("principle is {}", c.principle))
            } else {
                None
            };

            if let Some(reason) = reason {
                return Err(CatalogError::GuidelineMismatch {
                    id: c.id.clone(),
                    expected: format!("{} {}", self.number, self.title),
                    reason,
                });
            }
        }

        debug!(
            guideline = self.number,
            count = criteria.len(),
            "Loaded guideline module"
        );
        Ok(criteria)
    }
}

/// Concatenate guideline lists, keeping module order and each module's own order.
pub fn aggregate<I>(modules: I) -> Vec<SuccessCriterion>
where
    I: IntoIterator<Item = Vec<SuccessCriterion>>,
{
    modules.into_iter().flatten().collect()
}

/// Load every module of a principle and aggregate them in the given order
pub fn load_principle(modules: &[GuidelineModule]) -> Result<Vec<SuccessCriterion>> {
    let loaded = modules
        .iter()
        .map(GuidelineModule::load)
        .collect::<Result<Vec<_>>>()?;
    Ok(aggregate(loaded))
}
