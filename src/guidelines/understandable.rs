// SPDX-License-Identifier: PMPL-1.0-or-later
//! Principle 3: Understandable

use crate::criterion::{Principle, SuccessCriterion};
use crate::error::Result;
use crate::guideline::{load_principle, GuidelineModule};

pub const READABLE: GuidelineModule = GuidelineModule::new(
    "3.1",
    "Readable",
    Principle::Understandable,
    include_str!("../../data/understandable/3.1-readable.json"),
);

pub const PREDICTABLE: GuidelineModule = GuidelineModule::new(
    "3.2",
    "Predictable",
    Principle::Understandable,
    include_str!("../../data/understandable/3.2-predictable.json"),
);

pub const INPUT_ASSISTANCE: GuidelineModule = GuidelineModule::new(
    "3.3",
    "Input Assistance",
    Principle::Understandable,
    include_str!("../../data/understandable/3.3-input-assistance.json"),
);

pub const GUIDELINES: &[GuidelineModule] = &[READABLE, PREDICTABLE, INPUT_ASSISTANCE];

pub fn criteria() -> Result<Vec<SuccessCriterion>> {
    load_principle(GUIDELINES)
}
