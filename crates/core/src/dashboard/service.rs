//! Dashboard pipeline.

use chrono::NaiveDateTime;

use super::types::{DashboardOptions, DashboardReport, ExtrasView, MainView};
use crate::aggregation::{
    AggregationService, Dimension, JoinDiagnostics, JoinedCases, YearSelection,
};
use crate::aging::AgingService;
use crate::dataset::Dataset;
use crate::matrix::MatrixBuilder;

/// Service that runs the full pipeline over a dataset.
pub struct DashboardService;

impl DashboardService {
    /// Computes every dashboard table for one run.
    ///
    /// `now` is the instant aging is measured against; production callers pass
    /// the current local time.
    #[must_use]
    pub fn build(dataset: &Dataset, now: NaiveDateTime, options: &DashboardOptions) -> DashboardReport {
        let enriched = AgingService::enrich(&dataset.transactions, now);
        let departments = JoinedCases::departments(&enriched, &dataset.hierarchy);
        let users = JoinedCases::users(&enriched, &dataset.users);

        let main = MainView {
            kpis: AggregationService::main_kpis(&dataset.transactions),
            departments: AggregationService::status_breakdown(
                &departments,
                Dimension::Department,
                options.department_sort,
            ),
            users: AggregationService::status_breakdown(&users, Dimension::User, options.user_sort),
            department_aging: MatrixBuilder::build(&departments, Dimension::Department),
            user_aging: MatrixBuilder::build(&users, Dimension::User),
        };

        let available_years = dataset.years();
        let selected_years = match &options.years {
            YearSelection::All => available_years.clone(),
            YearSelection::Only(years) => years.iter().copied().collect(),
        };

        let extras = ExtrasView {
            kpis: AggregationService::extra_kpis(&dataset.transactions),
            available_years,
            selected_years,
            volume_over_time: AggregationService::monthly_volume(
                &dataset.transactions,
                &options.years,
            ),
            department_volume: AggregationService::department_volume(&departments, &options.years),
        };

        DashboardReport {
            generated_at: now,
            main,
            extras,
            diagnostics: JoinDiagnostics {
                unmatched_departments: departments.unmatched,
                unmatched_users: users.unmatched,
            },
        }
    }
}
