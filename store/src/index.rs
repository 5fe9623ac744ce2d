//! Foreign-key index for association lookups.

use haul_core::{row_id, RecordId, RecordKind, Row};
use std::collections::{HashMap, HashSet};

/// Key of the index: (kind, column, referenced id)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ForeignKey {
    kind: RecordKind,
    column: String,
    value: RecordId,
}

/// Reverse index: (kind, `*_id` column, value) -> Set<row id>
#[derive(Debug, Clone, Default)]
pub struct ForeignKeyIndex {
    index: HashMap<ForeignKey, HashSet<RecordId>>,
}

impl ForeignKeyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every id-valued `*_id` column of a row.
    pub fn insert_row(&mut self, kind: RecordKind, id: RecordId, row: &Row) {
        for (column, value) in Self::references(row) {
            self.index
                .entry(ForeignKey {
                    kind,
                    column: column.to_string(),
                    value,
                })
                .or_default()
                .insert(id);
        }
    }

    pub fn remove_row(&mut self, kind: RecordKind, id: RecordId, row: &Row) {
        for (column, value) in Self::references(row) {
            let key = ForeignKey {
                kind,
                column: column.to_string(),
                value,
            };
            if let Some(set) = self.index.get_mut(&key) {
                set.remove(&id);
                if set.is_empty() {
                    self.index.remove(&key);
                }
            }
        }
    }

    /// Ids of `kind` rows whose `column` references `value`.
    pub fn get(&self, kind: RecordKind, column: &str, value: RecordId) -> Option<&HashSet<RecordId>> {
        self.index.get(&ForeignKey {
            kind,
            column: column.to_string(),
            value,
        })
    }

    pub fn contains(&self, kind: RecordKind, column: &str, value: RecordId, id: RecordId) -> bool {
        self.get(kind, column, value)
            .is_some_and(|set| set.contains(&id))
    }

    fn references(row: &Row) -> impl Iterator<Item = (&str, RecordId)> + '_ {
        row.keys()
            .filter(|column| column.ends_with("_id"))
            .filter_map(|column| row_id(row, column).map(|value| (column.as_str(), value)))
    }
}
