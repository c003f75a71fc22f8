// SPDX-License-Identifier: PMPL-1.0-or-later
//! Principle 1: Perceivable

use crate::criterion::{Principle, SuccessCriterion};
use crate::error::Result;
use crate::guideline::{load_principle, GuidelineModule};

/// Guideline 1.1
pub const TEXT_ALTERNATIVES: GuidelineModule = GuidelineModule::new(
    "1.1",
    "Text Alternatives",
    Principle::Perceivable,
    include_str!("../../data/perceivable/1.1-text-alternatives.json"),
);

/// Guideline 1.2
pub const TIME_BASED_MEDIA: GuidelineModule = GuidelineModule::new(
    "1.2",
    "Time-based Media",
    Principle::Perceivable,
    include_str!("../../data/perceivable/1.2-time-based-media.json"),
);

/// Guideline 1.3
pub const ADAPTABLE: GuidelineModule = GuidelineModule::new(
    "1.3",
    "Adaptable",
    Principle::Perceivable,
    include_str!("../../data/perceivable/1.3-adaptable.json"),
);

/// Guideline 1.4
pub const DISTINGUISHABLE: GuidelineModule = GuidelineModule::new(
    "1.4",
    "Distinguishable",
    Principle::Perceivable,
    include_str!("../../data/perceivable/1.4-distinguishable.json"),
);

pub const GUIDELINES: &[GuidelineModule] = &[
    TEXT_ALTERNATIVES,
    TIME_BASED_MEDIA,
    ADAPTABLE,
    DISTINGUISHABLE,
];

pub fn criteria() -> Result<Vec<SuccessCriterion>> {
    load_principle(GUIDELINES)
}
