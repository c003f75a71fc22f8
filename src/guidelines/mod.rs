// SPDX-License-Identifier: PMPL-1.0-or-later
//! Embedded guideline modules, grouped by principle.
//!
//! Each principle module lists its guidelines in ascending number order.

pub mod operable;
pub mod perceivable;
pub mod robust;
pub mod understandable;

use crate::criterion::{Principle, SuccessCriterion};
use crate::error::Result;
use crate::guideline::GuidelineModule;

/// Guideline modules of a principle, in ascending guideline order
pub fn modules_for(principle: Principle) -> &'static [GuidelineModule] {
    match principle {
        Principle::Perceivable => perceivable::GUIDELINES,
        Principle::Operable => operable::GUIDELINES,
        Principle::Understandable => understandable::GUIDELINES,
        Principle::Robust => robust::GUIDELINES,
    }
}

/// Aggregated criteria of a principle
pub fn criteria_for(principle: Principle) -> Result<Vec<SuccessCriterion>> {
    match principle {
        Principle::Perceivable => perceivable::criteria(),
        Principle::Operable => operable::criteria(),
        Principle::Understandable => understandable::criteria(),
        Principle::Robust => robust::criteria(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modules_declared_in_ascending_order() {
        for principle in Principle::ALL {
            let numbers: Vec<_> = modules_for(principle).iter().map(|m| m.number).collect();
            let mut sorted = numbers.clone();
            sorted.sort_by_key(|n| n.split('.').map(|p| p.parse::<u32>().unwrap_or(0)).collect::<Vec<_>>());
            assert_eq!(numbers, sorted, "{} guidelines out of order", principle);
            assert!(modules_for(principle).iter().all(|m| m.principle == principle));
        }
    }

    #[test]
    fn test_every_module_loads() {
        for principle in Principle::ALL {
            for module in modules_for(principle) {
                let criteria = module.load().unwrap_or_else(|e| panic!("{}: {}", module.number, e));
                assert!(!criteria.is_empty(), "guideline {} is empty", module.number);
            }
        }
    }

    #[test]
    fn test_principle_criteria_counts() {
        assert_eq!(criteria_for(Principle::Perceivable).unwrap().len(), 29);
        assert_eq!(criteria_for(Principle::Operable).unwrap().len(), 34);
        assert_eq!(criteria_for(Principle::Understandable).unwrap().len(), 21);
        assert_eq!(criteria_for(Principle::Robust).unwrap().len(), 3);
    }
}
