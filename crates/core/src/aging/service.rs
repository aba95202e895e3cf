//! Enrichment of cases with their aging bucket.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::bucket::AgingBucket;
use crate::dataset::TransactionRecord;

/// A case paired with its derived aging bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedTransaction {
    /// The source case.
    #[serde(flatten)]
    pub record: TransactionRecord,
    /// Derived aging bucket.
    pub pending_aging_bucket: AgingBucket,
}

/// Service for computing aging buckets.
pub struct AgingService;

impl AgingService {
    /// Whole days elapsed between `created_on` and `now`, partial days truncated.
    ///
    /// Negative when the case is dated after `now`.
    #[must_use]
    pub fn elapsed_days(created_on: NaiveDateTime, now: NaiveDateTime) -> i64 {
        (now - created_on).num_days()
    }

    /// Classifies one case.
    #[must_use]
    pub fn classify(record: &TransactionRecord, now: NaiveDateTime) -> AgingBucket {
        if !record.in_progress {
            return AgingBucket::NotApplicable;
        }
        AgingBucket::for_elapsed_days(Self::elapsed_days(record.created_on, now))
    }

    /// Attaches an aging bucket to every case, preserving input order.
    #[must_use]
    pub fn enrich(transactions: &[TransactionRecord], now: NaiveDateTime) -> Vec<EnrichedTransaction> {
        transactions
            .iter()
            .map(|record| EnrichedTransaction {
                pending_aging_bucket: Self::classify(record, now),
                record: record.clone(),
            })
            .collect()
    }
}
