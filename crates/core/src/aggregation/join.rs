//! Left joins of cases against the hierarchy and user tables.

use std::collections::HashMap;
use std::hash::Hash;

use crate::aging::EnrichedTransaction;
use crate::dataset::{HierarchyRecord, UserRecord};

/// A case with the display name of its group.
#[derive(Debug, Clone, Copy)]
pub struct JoinedCase<'a> {
    /// The enriched case.
    pub case: &'a EnrichedTransaction,
    /// Department title or user name; `None` if the key did not resolve.
    pub group_key: Option<&'a str>,
}

/// Result of joining every case against one lookup table.
#[derive(Debug, Clone)]
pub struct JoinedCases<'a> {
    /// One row per input case, in input order.
    pub rows: Vec<JoinedCase<'a>>,
    /// Number of rows whose key did not resolve.
    pub unmatched: usize,
}

impl<'a> JoinedCases<'a> {
    /// Joins cases to department titles on the hierarchy ID.
    #[must_use]
    pub fn departments(cases: &'a [EnrichedTransaction], hierarchy: &'a [HierarchyRecord]) -> Self {
        let index = first_wins(hierarchy.iter().map(|h| (h.id, h.title.as_str())));
        Self::join(cases, |case| index.get(&case.record.hierarchy_id).copied())
    }

    /// Joins cases to user names on the creator ID.
    #[must_use]
    pub fn users(cases: &'a [EnrichedTransaction], users: &'a [UserRecord]) -> Self {
        let index = first_wins(users.iter().map(|u| (u.id, u.name.as_str())));
        Self::join(cases, |case| index.get(&case.record.created_by).copied())
    }

    fn join(
        cases: &'a [EnrichedTransaction],
        lookup: impl Fn(&EnrichedTransaction) -> Option<&'a str>,
    ) -> Self {
        let rows: Vec<JoinedCase<'a>> = cases
            .iter()
            .map(|case| JoinedCase {
                case,
                group_key: lookup(case),
            })
            .collect();
        let unmatched = rows.iter().filter(|row| row.group_key.is_none()).count();
        Self { rows, unmatched }
    }

    /// Rows whose case is flagged in progress.
    pub fn in_progress(&self) -> impl Iterator<Item = &JoinedCase<'a>> {
        self.rows.iter().filter(|row| row.case.record.in_progress)
    }
}

/// Builds a lookup where the first row for a duplicated key wins.
fn first_wins<K: Eq + Hash, V>(pairs: impl Iterator<Item = (K, V)>) -> HashMap<K, V> {
    let mut index = HashMap::new();
    for (key, value) in pairs {
        index.entry(key).or_insert(value);
    }
    index
}
