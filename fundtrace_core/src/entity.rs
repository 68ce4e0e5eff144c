//! Entity recognition seam.
//!
//! The recognizer is an expensive, read-only resource built once at startup
//! and handed to the pipeline by reference. Backends live outside this crate.

use serde::{Deserialize, Serialize};

/// Entity labels the pipeline keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityLabel {
    Organization,
    Person,
}

/// Organization and person spans found on one line, in reported order.
///
/// Duplicates are retained and surface forms are not case-folded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityMentions {
    pub organizations: Vec<String>,
    pub persons: Vec<String>,
}

impl EntityMentions {
    /// Add a span under its label.
    pub fn push(&mut self, label: EntityLabel, text: impl Into<String>) {
        match label {
            EntityLabel::Organization => self.organizations.push(text.into()),
            EntityLabel::Person => self.persons.push(text.into()),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.organizations.is_empty() && self.persons.is_empty()
    }

    /// Organizations first, then persons.
    pub fn ordered(&self) -> impl Iterator<Item = &str> {
        self.organizations
            .iter()
            .chain(self.persons.iter())
            .map(String::as_str)
    }
}

/// Named-entity recognizer over a single candidate line.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, line: &str) -> EntityMentions;
}
