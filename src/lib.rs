// SPDX-License-Identifier: PMPL-1.0-or-later
//! wcag-catalog - typed WCAG 2.2 success criteria catalog
//!
//! Every WCAG 2.2 success criterion is authored as an immutable record in a
//! per-guideline payload, grouped under the four principles (perceivable,
//! operable, understandable, robust) and flattened into one ordered,
//! audited registry. Consumers query the registry by principle, id, number,
//! conformance level, or WCAG 2.2 novelty.
//!
//! ## Queries
//!
//! - [`success_criteria`]: the full ordered list
//! - [`criteria_by_principle`]: exact principle key match
//! - [`criterion_by_id`] / [`criterion_by_number`]: single lookup
//! - [`criteria_by_level`]: cumulative conformance (AA includes A)
//! - [`new_criteria`]: criteria added in WCAG 2.2
//!
//! ## Extras
//!
//! - **Search**: weighted free-text ranking over titles, summaries and terms
//! - **Checklist**: filtered export with selectable columns
//! - **Audit**: integrity rules run when the registry is built

pub mod audit;
pub mod checklist;
pub mod config;
pub mod criterion;
pub mod error;
pub mod guideline;
pub mod guidelines;
pub mod principle;
pub mod registry;
pub mod report;
pub mod search;

pub use criterion::{Principle, SuccessCriterion, WcagLevel};
pub use error::{CatalogError, Result};
pub use registry::{
    criteria_by_level, criteria_by_level_str, criteria_by_principle, criteria_in,
    criterion_by_id, criterion_by_number, guideline_groups, new_criteria, registry,
    related_criteria, success_criteria, Registry,
};
