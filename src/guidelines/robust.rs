// SPDX-License-Identifier: PMPL-1.0-or-later
//! Principle 4: Robust. A single guideline.

use crate::criterion::{Principle, SuccessCriterion};
use crate::error::Result;
use crate::guideline::{load_principle, GuidelineModule};

pub const COMPATIBLE: GuidelineModule = GuidelineModule::new(
    "4.1",
    "Compatible",
    Principle::Robust,
    include_str!("../../data/robust/4.1-compatible.json"),
);

pub const GUIDELINES: &[GuidelineModule] = &[COMPATIBLE];

pub fn criteria() -> Result<Vec<SuccessCriterion>> {
    load_principle(GUIDELINES)
}
