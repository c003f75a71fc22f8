// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for wcag-catalog

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid conformance level: {0:?} (expected A, AA or AAA)")]
    InvalidLevel(String),

    #[error("Invalid principle: {0:?} (expected perceivable, operable, understandable or robust)")]
    InvalidPrinciple(String),

    #[error("Criterion {id} does not belong to guideline {expected}: {reason}")]
    GuidelineMismatch {
        id: String,
        expected: String,
        reason: String,
    },

    #[error("Catalog integrity check failed with {count} error(s): {summary}")]
    Integrity { count: usize, summary: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),
}
