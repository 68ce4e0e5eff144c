//! Transaction record assembly.

use std::collections::HashSet;

use crate::TransactionRecord;
use crate::entity::EntityMentions;

/// Maximum number of characters kept in a record's context snippet.
pub const CONTEXT_LIMIT: usize = 200;

/// Separator used when joining entity surface forms.
pub const ENTITY_SEPARATOR: &str = ", ";

/// Builds records from a candidate line and its entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordBuilder {
    dedup_entities: bool,
}

impl RecordBuilder {
    #[must_use]
    pub const fn new(dedup_entities: bool) -> Self {
        Self { dedup_entities }
    }

    /// Assemble a record. Never fails.
    #[must_use]
    pub fn build(
        &self,
        doc_id: u64,
        amount: &str,
        mentions: &EntityMentions,
        line: &str,
    ) -> TransactionRecord {
        TransactionRecord {
            doc_id,
            amount: amount.to_string(),
            entities: self.join_entities(mentions),
            context: snippet(line),
        }
    }

    fn join_entities(&self, mentions: &EntityMentions) -> String {
        if self.dedup_entities {
            let mut seen = HashSet::new();
            mentions
                .ordered()
                .filter(|e| seen.insert(*e))
                .collect::<Vec<_>>()
                .join(ENTITY_SEPARATOR)
        } else {
            mentions.ordered().collect::<Vec<_>>().join(ENTITY_SEPARATOR)
        }
    }
}

/// Trim surrounding whitespace and keep at most [`CONTEXT_LIMIT`] characters.
#[must_use]
pub fn snippet(line: &str) -> String {
    line.trim().chars().take(CONTEXT_LIMIT).collect()
}
