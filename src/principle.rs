// SPDX-License-Identifier: PMPL-1.0-or-later
//! Principle metadata table.
//!
//! Describes the four principles themselves. Linked to criterion records only
//! by the principle key; the integrity audit reports guidelines that appear
//! in the criteria but not here.

use crate::criterion::Principle;
use serde::Serialize;

/// Guideline reference inside a principle entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuidelineRef {
    pub number: &'static str,
    pub title: &'static str,
}

/// Descriptive metadata for one principle
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrincipleInfo {
    pub key: Principle,
    pub title: &'static str,
    pub description: &'static str,
    pub detailed_description: &'static str,
    pub why_it_matters: &'static str,
    pub key_concepts: &'static [&'static str],
    pub examples: &'static [&'static str],
    pub icon: &'static str,
    pub guidelines: &'static [GuidelineRef],
}

impl PrincipleInfo {
    /// Find a guideline of this principle by number
    pub fn guideline(&self, number: &str) -> Option<&'static GuidelineRef> {
        self.guidelines.iter().find(|g| g.number == number)
    }
}

static PRINCIPLES: [PrincipleInfo; 4] = [
    PrincipleInfo {
        key: Principle::Perceivable,
        title: "Perceivable",
        description: "Information and user interface components must be presentable to users in ways they can perceive.",
        detailed_description: "Users must be able to perceive the information being presented; it cannot be invisible to all of their senses. \
            Content that relies on a single sense, such as sight or hearing, needs an alternative that can be rendered through another sense: \
            text alternatives for images, captions and transcripts for media, structure that survives restyling, and enough contrast to be read.",
        why_it_matters: "If a user cannot perceive content, nothing else about the page matters to them. Blind, low-vision, deaf and hard-of-hearing users \
            depend on content being exposed in a form their senses or assistive technologies can pick up.",
        key_concepts: &[
            "Text alternatives for non-text content",
            "Captions, transcripts and audio description",
            "Meaningful structure and reading order",
            "Colour contrast and resizable text",
            "Content that reflows without loss",
        ],
        examples: &[
            "Alt text describing the purpose of an image",
            "Captions on a product video",
            "Headings marked up as headings rather than bold text",
            "Body text with at least 4.5:1 contrast",
        ],
        icon: "👁️",
        guidelines: &[
            GuidelineRef { number: "1.1", title: "Text Alternatives" },
            GuidelineRef { number: "1.2", title: "Time-based Media" },
            GuidelineRef { number: "1.3", title: "Adaptable" },
            GuidelineRef { number: "1.4", title: "Distinguishable" },
        ],
    },
    PrincipleInfo {
        key: Principle::Operable,
        title: "Operable",
        description: "User interface components and navigation must be operable.",
        detailed_description: "Users must be able to operate the interface; it cannot require an interaction that a user cannot perform. \
            Every function has to work from a keyboard, users need enough time to read and act, content must not trigger seizures, \
            and navigation has to help people find content and know where they are.",
        why_it_matters: "People operate computers with keyboards, switches, voice control, eye tracking and touch. An interface that only works \
            with a precise mouse gesture or a tight time limit shuts many of them out.",
        key_concepts: &[
            "Full keyboard operability without traps",
            "Adjustable or removable time limits",
            "No content that flashes more than three times per second",
            "Visible focus and logical focus order",
            "Pointer alternatives to dragging and path-based gestures",
        ],
        examples: &[
            "A custom dropdown that opens with Enter and closes with Escape",
            "A session timeout warning with an option to extend",
            "A skip link to the main content",
            "A slider that can also be set with arrow keys",
        ],
        icon: "⌨️",
        guidelines: &[
            GuidelineRef { number: "2.1", title: "Keyboard Accessible" },
            GuidelineRef { number: "2.2", title: "Enough Time" },
            GuidelineRef { number: "2.3", title: "Seizures and Physical Reactions" },
            GuidelineRef { number: "2.4", title: "Navigable" },
            GuidelineRef { number: "2.5", title: "Input Modalities" },
        ],
    },
    PrincipleInfo {
        key: Principle::Understandable,
        title: "Understandable",
        description: "Information and the operation of user interface must be understandable.",
        detailed_description: "Users must be able to understand both the content and how the interface works. \
            Text should be readable and its language identified, components should behave predictably, \
            and forms should help people avoid and correct mistakes.",
        why_it_matters: "Content that can be perceived and operated is still a barrier if it is confusing. People with cognitive, language and \
            learning disabilities, and anyone under stress, benefit from consistent behaviour and clear guidance.",
        key_concepts: &[
            "Declared page and passage language",
            "Consistent navigation and identification",
            "No unexpected changes of context",
            "Clear labels, instructions and error messages",
            "Accessible authentication without cognitive tests",
        ],
        examples: &[
            "lang=\"en\" on the html element",
            "A form field error that says what went wrong and how to fix it",
            "Navigation that stays in the same place on every page",
            "Not asking users to re-enter information already provided",
        ],
        icon: "💡",
        guidelines: &[
            GuidelineRef { number: "3.1", title: "Readable" },
            GuidelineRef { number: "3.2", title: "Predictable" },
            GuidelineRef { number: "3.3", title: "Input Assistance" },
        ],
    },
    PrincipleInfo {
        key: Principle::Robust,
        title: "Robust",
        description: "Content must be robust enough that it can be interpreted by a wide variety of user agents, including assistive technologies.",
        detailed_description: "Content must remain accessible as technologies and user agents evolve. \
            Markup has to expose name, role and value for every component, and status updates must be announced \
            without moving focus.",
        why_it_matters: "Screen readers, voice control and other assistive technologies can only convey what the markup tells them. \
            Custom widgets without correct semantics are invisible or misleading to these tools.",
        key_concepts: &[
            "Valid, well-formed markup",
            "Name, role and value for custom components",
            "Status messages exposed through live regions",
        ],
        examples: &[
            "A custom toggle exposing role=\"switch\" and aria-checked",
            "A \"3 results found\" message announced via role=\"status\"",
        ],
        icon: "🔧",
        guidelines: &[GuidelineRef { number: "4.1", title: "Compatible" }],
    },
];

/// All principle entries, in registry order
pub fn principles() -> &'static [PrincipleInfo] {
    &PRINCIPLES
}

/// Look up a principle entry by key ("perceivable", "operable", ...)
pub fn principle_info(key: &str) -> Option<&'static PrincipleInfo> {
    PRINCIPLES.iter().find(|p| p.key.as_str() == key)
}

/// Typed lookup; every principle has an entry
pub fn info_for(principle: Principle) -> &'static PrincipleInfo {
    match principle {
        Principle::Perceivable => &PRINCIPLES[0],
        Principle::Operable => &PRINCIPLES[1],
        Principle::Understandable => &PRINCIPLES[2],
        Principle::Robust => &PRINCIPLES[3],
    }
}
