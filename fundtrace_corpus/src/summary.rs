//! Read-side aggregation over an exported table.
//!
//! These are the figures a presentation layer charts: a free-text entity
//! filter, the number of distinct entities, and the most frequent primary
//! entities. A record's primary entity is the first one in its list.

use std::collections::{HashMap, HashSet};

use fundtrace_core::TransactionRecord;
use fundtrace_core::record::ENTITY_SEPARATOR;

/// Label counted for records with no entities.
pub const UNKNOWN_ENTITY: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityCount {
    pub entity: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub transactions: usize,
    pub unique_entities: usize,
    pub top: Vec<EntityCount>,
}

/// Records whose `entities` contain `term`, ignoring case.
///
/// An empty term keeps everything.
#[must_use]
pub fn filter_by_entity<'a>(
    records: &'a [TransactionRecord],
    term: &str,
) -> Vec<&'a TransactionRecord> {
    let needle = term.trim().to_lowercase();
    records
        .iter()
        .filter(|r| needle.is_empty() || r.entities.to_lowercase().contains(&needle))
        .collect()
}

/// Text before the first comma, or [`UNKNOWN_ENTITY`] for a blank list.
#[must_use]
pub fn primary_entity(entities: &str) -> &str {
    if entities.trim().is_empty() {
        return UNKNOWN_ENTITY;
    }
    entities.split(',').next().unwrap_or(UNKNOWN_ENTITY)
}

/// Number of distinct entity strings across all records.
#[must_use]
pub fn unique_entities<'a>(records: impl IntoIterator<Item = &'a TransactionRecord>) -> usize {
    records
        .into_iter()
        .filter(|r| !r.entities.trim().is_empty())
        .flat_map(|r| r.entities.split(ENTITY_SEPARATOR))
        .collect::<HashSet<_>>()
        .len()
}

/// The `n` most frequent primary entities, most frequent first.
///
/// Ties keep the order in which entities first appear.
#[must_use]
pub fn top_entities<'a>(
    records: impl IntoIterator<Item = &'a TransactionRecord>,
    n: usize,
) -> Vec<EntityCount> {
    let mut counts: Vec<EntityCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let entity = primary_entity(&record.entities);
        match index.get(entity) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(entity, counts.len());
                counts.push(EntityCount {
                    entity: entity.to_string(),
                    count: 1,
                });
            }
        }
    }

    // stable sort keeps first-appearance order among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}

/// Filter, then compute the headline figures.
#[must_use]
pub fn summarize(records: &[TransactionRecord], search: Option<&str>, top_n: usize) -> Summary {
    let filtered = filter_by_entity(records, search.unwrap_or_default());
    Summary {
        transactions: filtered.len(),
        unique_entities: unique_entities(filtered.iter().copied()),
        top: top_entities(filtered.iter().copied(), top_n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(entities: &str) -> TransactionRecord {
        TransactionRecord {
            doc_id: 0,
            amount: "$1".to_string(),
            entities: entities.to_string(),
            context: String::new(),
        }
    }

    fn table() -> Vec<TransactionRecord> {
        vec![
            record("Harvard University, J. Epstein"),
            record(""),
            record("MIT"),
            record("Harvard University"),
            record("  "),
            record("MIT, Harvard University"),
            record("Bank of America"),
        ]
    }

    #[test]
    fn test_primary_entity() {
        assert_eq!(primary_entity("Harvard University, J. Epstein"), "Harvard University");
        assert_eq!(primary_entity("MIT"), "MIT");
        assert_eq!(primary_entity(""), UNKNOWN_ENTITY);
        assert_eq!(primary_entity("   "), UNKNOWN_ENTITY);
    }

    #[test]
    fn test_top_entities_counts_and_ties() {
        let top = top_entities(&table(), 10);
        let pairs: Vec<(&str, usize)> = top.iter().map(|c| (c.entity.as_str(), c.count)).collect();
        assert_eq!(
            pairs,
            vec![
                ("Harvard University", 2),
                ("Unknown", 2),
                ("MIT", 2),
                ("Bank of America", 1),
            ]
        );
    }

    #[test]
    fn test_top_entities_truncates() {
        assert_eq!(top_entities(&table(), 1).len(), 1);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let records = table();
        let hits = filter_by_entity(&records, "harvard");
        assert_eq!(hits.len(), 3);
        assert_eq!(filter_by_entity(&records, "").len(), records.len());
    }

    #[test]
    fn test_unique_entities() {
        assert_eq!(unique_entities(&table()), 4);
    }

    #[test]
    fn test_summarize_with_search() {
        let summary = summarize(&table(), Some("MIT"), 5);
        assert_eq!(summary.transactions, 2);
        assert_eq!(summary.unique_entities, 2);
        assert_eq!(
            summary.top,
            vec![EntityCount {
                entity: "MIT".to_string(),
                count: 2
            }]
        );
    }
}
