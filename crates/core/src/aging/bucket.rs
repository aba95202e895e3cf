//! Aging bucket labels.

use serde::{Deserialize, Serialize};

/// How long an unresolved case has been open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgingBucket {
    /// Open at most 60 days. There is no lower bound: a case opened today lands here.
    #[serde(rename = "30 - 60 Days")]
    Days30To60,
    /// Open 61 to 90 days.
    #[serde(rename = "60 - 90 Days")]
    Days60To90,
    /// Open 91 to 120 days.
    #[serde(rename = "90 - 120 Days")]
    Days90To120,
    /// Open 121 to 150 days.
    #[serde(rename = "120 - 150 Days")]
    Days120To150,
    /// Open more than 150 days.
    #[serde(rename = "Over 150 Days")]
    Over150Days,
    /// The case is not in progress.
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl AgingBucket {
    /// Pending buckets in matrix column order.
    pub const PENDING: [Self; 5] = [
        Self::Days30To60,
        Self::Days60To90,
        Self::Days90To120,
        Self::Days120To150,
        Self::Over150Days,
    ];

    /// Buckets a pending case by whole days elapsed since creation.
    #[must_use]
    pub const fn for_elapsed_days(days: i64) -> Self {
        if days <= 60 {
            Self::Days30To60
        } else if days <= 90 {
            Self::Days60To90
        } else if days <= 120 {
            Self::Days90To120
        } else if days <= 150 {
            Self::Days120To150
        } else {
            Self::Over150Days
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Days30To60 => "30 - 60 Days",
            Self::Days60To90 => "60 - 90 Days",
            Self::Days90To120 => "90 - 120 Days",
            Self::Days120To150 => "120 - 150 Days",
            Self::Over150Days => "Over 150 Days",
            Self::NotApplicable => "N/A",
        }
    }

    /// Column position in the aging matrix, if pending.
    #[must_use]
    pub const fn column_index(self) -> Option<usize> {
        match self {
            Self::Days30To60 => Some(0),
            Self::Days60To90 => Some(1),
            Self::Days90To120 => Some(2),
            Self::Days120To150 => Some(3),
            Self::Over150Days => Some(4),
            Self::NotApplicable => None,
        }
    }
}

impl std::fmt::Display for AgingBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
