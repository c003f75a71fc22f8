// SPDX-License-Identifier: PMPL-1.0-or-later
//! Principle 2: Operable

use crate::criterion::{Principle, SuccessCriterion};
use crate::error::Result;
use crate::guideline::{load_principle, GuidelineModule};

pub const KEYBOARD_ACCESSIBLE: GuidelineModule = GuidelineModule::new(
    "2.1",
    "Keyboard Accessible",
    Principle::Operable,
    include_str!("../../data/operable/2.1-keyboard-accessible.json"),
);

pub const ENOUGH_TIME: GuidelineModule = GuidelineModule::new(
    "2.2",
    "Enough Time",
    Principle::Operable,
    include_str!("../../data/operable/2.2-enough-time.json"),
);

pub const SEIZURES: GuidelineModule = GuidelineModule::new(
    "2.3",
    "Seizures and Physical Reactions",
    Principle::Operable,
    include_str!("../../data/operable/2.3-seizures.json"),
);

pub const NAVIGABLE: GuidelineModule = GuidelineModule::new(
    "2.4",
    "Navigable",
    Principle::Operable,
    include_str!("../../data/operable/2.4-navigable.json"),
);

/// Guideline 2.5, holds two of the WCAG 2.2 additions (2.5.7, 2.5.8)
pub const INPUT_MODALITIES: GuidelineModule = GuidelineModule::new(
    "2.5",
    "Input Modalities",
    Principle::Operable,
    include_str!("../../data/operable/2.5-input-modalities.json"),
);

pub const GUIDELINES: &[GuidelineModule] = &[
    KEYBOARD_ACCESSIBLE,
    ENOUGH_TIME,
    SEIZURES,
    NAVIGABLE,
    INPUT_MODALITIES,
];

pub fn criteria() -> Result<Vec<SuccessCriterion>> {
    load_principle(GUIDELINES)
}
