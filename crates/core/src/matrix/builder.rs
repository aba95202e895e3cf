//! Pivot of pending cases into an aging matrix.

use std::collections::BTreeMap;

use crate::aggregation::{Dimension, JoinedCases};
use crate::aging::AgingBucket;

use super::types::{AgingMatrix, AgingMatrixRow};

const BUCKETS: usize = AgingBucket::PENDING.len();

/// Builds aging matrices.
pub struct MatrixBuilder;

impl MatrixBuilder {
    /// Pivots the in-progress cases of a join into an aging matrix.
    ///
    /// Columns appear only when some group has a case in that bucket. Rows
    /// are ordered by group key with the unresolved group last.
    #[must_use]
    pub fn build(joined: &JoinedCases<'_>, dimension: Dimension) -> AgingMatrix {
        // (is unresolved, key) puts `None` after every title.
        let mut cells: BTreeMap<(bool, Option<&str>), [u64; BUCKETS]> = BTreeMap::new();

        for row in joined.in_progress() {
            let Some(column) = row.case.pending_aging_bucket.column_index() else {
                continue;
            };
            let counts = cells
                .entry((row.group_key.is_none(), row.group_key))
                .or_insert([0; BUCKETS]);
            counts[column] += 1;
        }

        let populated: Vec<usize> = (0..BUCKETS)
            .filter(|&column| cells.values().any(|counts| counts[column] > 0))
            .collect();

        let rows: Vec<AgingMatrixRow> = cells
            .iter()
            .map(|((_, key), counts)| {
                let counts: Vec<u64> = populated.iter().map(|&column| counts[column]).collect();
                AgingMatrixRow {
                    group_key: key.map(str::to_string),
                    total: counts.iter().sum(),
                    counts,
                }
            })
            .collect();

        let column_totals: Vec<u64> = (0..populated.len())
            .map(|i| rows.iter().map(|row| row.counts[i]).sum())
            .collect();

        AgingMatrix {
            dimension,
            columns: populated.iter().map(|&column| AgingBucket::PENDING[column]).collect(),
            grand_total: column_totals.iter().sum(),
            rows,
            column_totals,
        }
    }
}
