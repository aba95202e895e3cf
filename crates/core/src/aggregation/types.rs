//! Aggregation output types.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use los_shared::types::SortOrder;

use crate::dashboard::DashboardError;
use crate::status::CaseStatus;

/// Department title or user name. `None` when the foreign key did not resolve.
pub type GroupKey = Option<String>;

/// Dimension a breakdown is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Business hierarchy title.
    Department,
    /// Creating user's name.
    User,
}

/// Calendar years included in the time-series view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "years", rename_all = "lowercase")]
pub enum YearSelection {
    /// Every year present in the data.
    #[default]
    All,
    /// Only the listed years. An empty set selects nothing.
    Only(BTreeSet<i32>),
}

impl YearSelection {
    /// Selects exactly the given years.
    #[must_use]
    pub fn only(years: impl IntoIterator<Item = i32>) -> Self {
        Self::Only(years.into_iter().collect())
    }

    /// Returns true if `year` is selected.
    #[must_use]
    pub fn contains(&self, year: i32) -> bool {
        match self {
            Self::All => true,
            Self::Only(years) => years.contains(&year),
        }
    }

    /// Returns true if no year can match.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Only(years) if years.is_empty())
    }

    /// Parses a comma-separated year list. An empty string selects no years.
    pub fn parse_list(raw: &str) -> Result<Self, DashboardError> {
        raw.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<i32>()
                    .map_err(|_| DashboardError::InvalidYear(part.to_string()))
            })
            .collect::<Result<BTreeSet<_>, _>>()
            .map(Self::Only)
    }
}

/// Case count for one (group, status) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    /// Group key.
    pub group_key: GroupKey,
    /// Breakdown status.
    pub status: CaseStatus,
    /// Number of cases.
    pub count: u64,
}

/// Total case count for one group across all statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTotal {
    /// Group key.
    pub group_key: GroupKey,
    /// Number of cases.
    pub total: u64,
}

/// One stacked series of a status chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Status this series stacks.
    pub status: CaseStatus,
    /// Colour hint.
    pub color: String,
    /// Counts aligned with the chart categories.
    pub values: Vec<u64>,
}

/// Stacked horizontal bar chart data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChart {
    /// Chart title.
    pub title: String,
    /// Category axis, in display order.
    pub categories: Vec<GroupKey>,
    /// One series per status.
    pub series: Vec<ChartSeries>,
}

/// Status breakdown for one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    /// Grouping dimension.
    pub dimension: Dimension,
    /// Applied ordering.
    pub order: SortOrder,
    /// Group totals in display order.
    pub groups: Vec<GroupTotal>,
    /// Non-zero (group, status) counts, groups in display order.
    pub counts: Vec<StatusCount>,
    /// Chart-ready form of `counts`.
    pub chart: StatusChart,
}

impl StatusBreakdown {
    /// Total number of cases across all groups.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.groups.iter().map(|g| g.total).sum()
    }
}

/// Case count for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyVolume {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Label in `YYYY-MM` form.
    pub label: String,
    /// Last day of the month, used as the time axis value.
    pub period_end: NaiveDate,
    /// Number of cases created in the month.
    pub count: u64,
}

/// Share of cases for one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentVolume {
    /// Department title.
    pub department: GroupKey,
    /// Number of cases.
    pub count: u64,
    /// Share of all counted cases, in percent with two decimals.
    pub percent: Decimal,
}

/// KPI tiles of the main view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainKpis {
    /// All cases.
    pub total_cases: u64,
    /// Cases flagged in progress.
    pub in_progress_cases: u64,
    /// Cases with workflow code 2.
    pub approved_cases: u64,
    /// Cases with workflow code 3.
    pub rejected_cases: u64,
}

/// KPI tiles of the extras view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraKpis {
    /// Cases with workflow code 4.
    pub revert_cases: u64,
    /// Cases with workflow code 5.
    pub forward_cases: u64,
    /// Cases with no workflow code or code 0.
    pub null_cases: u64,
}

/// Foreign keys that did not resolve during the joins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinDiagnostics {
    /// Cases whose department was not found.
    pub unmatched_departments: usize,
    /// Cases whose creator was not found.
    pub unmatched_users: usize,
}

impl JoinDiagnostics {
    /// Returns true if every foreign key resolved.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.unmatched_departments == 0 && self.unmatched_users == 0
    }
}
