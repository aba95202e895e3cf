//! Grouped counts over joined cases.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::join::JoinedCases;
use super::types::{
    ChartSeries, DepartmentVolume, Dimension, ExtraKpis, GroupTotal, MainKpis, MonthlyVolume,
    SortOrder, StatusBreakdown, StatusChart, StatusCount, YearSelection,
};
use crate::dataset::TransactionRecord;
use crate::status::{CaseStatus, WorkflowStep};

/// Service for computing dashboard aggregates.
pub struct AggregationService;

impl AggregationService {
    /// Computes the main-view KPI tiles.
    #[must_use]
    pub fn main_kpis(transactions: &[TransactionRecord]) -> MainKpis {
        transactions.iter().fold(MainKpis::default(), |mut kpis, t| {
            kpis.total_cases += 1;
            if t.in_progress {
                kpis.in_progress_cases += 1;
            }
            match WorkflowStep::from_code(t.workflow_step_type_id) {
                WorkflowStep::Approved => kpis.approved_cases += 1,
                WorkflowStep::Rejected => kpis.rejected_cases += 1,
                _ => {}
            }
            kpis
        })
    }

    /// Computes the extras-view KPI tiles.
    ///
    /// Reverted and forwarded cases are counted here by their own code even
    /// though the status breakdowns fold them into "In Progress".
    #[must_use]
    pub fn extra_kpis(transactions: &[TransactionRecord]) -> ExtraKpis {
        transactions.iter().fold(ExtraKpis::default(), |mut kpis, t| {
            match WorkflowStep::from_code(t.workflow_step_type_id) {
                WorkflowStep::Revert => kpis.revert_cases += 1,
                WorkflowStep::Forward => kpis.forward_cases += 1,
                WorkflowStep::Unclassified => kpis.null_cases += 1,
                _ => {}
            }
            kpis
        })
    }

    /// Counts cases per (group, status) and orders groups by their totals.
    #[must_use]
    pub fn status_breakdown(
        joined: &JoinedCases<'_>,
        dimension: Dimension,
        order: SortOrder,
    ) -> StatusBreakdown {
        let mut positions: HashMap<Option<&str>, usize> = HashMap::new();
        let mut tallies: Vec<(Option<&str>, [u64; 3])> = Vec::new();

        for row in &joined.rows {
            let slot = *positions.entry(row.group_key).or_insert_with(|| {
                tallies.push((row.group_key, [0; 3]));
                tallies.len() - 1
            });
            let status = CaseStatus::from_code(row.case.record.workflow_step_type_id);
            tallies[slot].1[status_slot(status)] += 1;
        }

        tallies.sort_by(|a, b| order.compare(a.1.iter().sum(), b.1.iter().sum()));

        let groups = tallies
            .iter()
            .map(|(key, counts)| GroupTotal {
                group_key: key.map(str::to_string),
                total: counts.iter().sum(),
            })
            .collect();

        let counts = tallies
            .iter()
            .flat_map(|(key, counts)| {
                CaseStatus::ALL
                    .iter()
                    .filter(move |status| counts[status_slot(**status)] > 0)
                    .map(move |status| StatusCount {
                        group_key: key.map(str::to_string),
                        status: *status,
                        count: counts[status_slot(*status)],
                    })
            })
            .collect();

        let chart = StatusChart {
            title: match dimension {
                Dimension::Department => "Case Status by Department".to_string(),
                Dimension::User => "Case Status by User".to_string(),
            },
            categories: tallies.iter().map(|(key, _)| key.map(str::to_string)).collect(),
            series: CaseStatus::ALL
                .iter()
                .map(|status| ChartSeries {
                    status: *status,
                    color: status.color().to_string(),
                    values: tallies
                        .iter()
                        .map(|(_, counts)| counts[status_slot(*status)])
                        .collect(),
                })
                .collect(),
        };

        StatusBreakdown {
            dimension,
            order,
            groups,
            counts,
            chart,
        }
    }

    /// Counts cases per calendar month over the selected years.
    ///
    /// Only months with at least one case are emitted, oldest first.
    #[must_use]
    pub fn monthly_volume<'a>(
        transactions: impl IntoIterator<Item = &'a TransactionRecord>,
        years: &YearSelection,
    ) -> Vec<MonthlyVolume> {
        let mut months: BTreeMap<(i32, u32), u64> = BTreeMap::new();
        for t in transactions {
            let year = t.created_on.year();
            if years.contains(year) {
                *months.entry((year, t.created_on.month())).or_insert(0) += 1;
            }
        }

        months
            .into_iter()
            .filter_map(|((year, month), count)| {
                Some(MonthlyVolume {
                    year,
                    month,
                    label: format!("{year:04}-{month:02}"),
                    period_end: month_end(year, month)?,
                    count,
                })
            })
            .collect()
    }

    /// Counts all cases per department over the selected years, largest first.
    #[must_use]
    pub fn department_volume(
        departments: &JoinedCases<'_>,
        years: &YearSelection,
    ) -> Vec<DepartmentVolume> {
        let mut positions: HashMap<Option<&str>, usize> = HashMap::new();
        let mut tallies: Vec<(Option<&str>, u64)> = Vec::new();

        for row in &departments.rows {
            if !years.contains(row.case.record.created_on.year()) {
                continue;
            }
            let slot = *positions.entry(row.group_key).or_insert_with(|| {
                tallies.push((row.group_key, 0));
                tallies.len() - 1
            });
            tallies[slot].1 += 1;
        }

        tallies.sort_by(|a, b| SortOrder::Descending.compare(a.1, b.1));

        let total: u64 = tallies.iter().map(|(_, count)| count).sum();
        tallies
            .into_iter()
            .map(|(key, count)| DepartmentVolume {
                department: key.map(str::to_string),
                count,
                percent: percent_of(count, total),
            })
            .collect()
    }
}

const fn status_slot(status: CaseStatus) -> usize {
    match status {
        CaseStatus::Approved => 0,
        CaseStatus::InProgress => 1,
        CaseStatus::Rejected => 2,
    }
}

fn percent_of(part: u64, total: u64) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(total)).round_dp(2)
}

fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next?.pred_opt()
}
