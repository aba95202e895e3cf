//! Dashboard data types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::aggregation::{
    DepartmentVolume, ExtraKpis, JoinDiagnostics, MainKpis, MonthlyVolume, SortOrder,
    StatusBreakdown, YearSelection,
};
use crate::matrix::AgingMatrix;

/// Runtime toggles for one dashboard run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardOptions {
    /// Ordering of the department chart.
    pub department_sort: SortOrder,
    /// Ordering of the user chart.
    pub user_sort: SortOrder,
    /// Years included in the extras view.
    pub years: YearSelection,
}

impl DashboardOptions {
    /// Creates options with every toggle at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the department chart ordering.
    #[must_use]
    pub const fn with_department_sort(mut self, order: SortOrder) -> Self {
        self.department_sort = order;
        self
    }

    /// Sets the user chart ordering.
    #[must_use]
    pub const fn with_user_sort(mut self, order: SortOrder) -> Self {
        self.user_sort = order;
        self
    }

    /// Sets the year selection.
    #[must_use]
    pub fn with_years(mut self, years: YearSelection) -> Self {
        self.years = years;
        self
    }
}

/// Main view: KPI tiles, status charts and aging matrices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainView {
    /// KPI tiles.
    pub kpis: MainKpis,
    /// Case status by department.
    pub departments: StatusBreakdown,
    /// Case status by user.
    pub users: StatusBreakdown,
    /// Aging matrix by department.
    pub department_aging: AgingMatrix,
    /// Aging matrix by user.
    pub user_aging: AgingMatrix,
}

/// Extras view: secondary KPI tiles and year-filtered volumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtrasView {
    /// KPI tiles.
    pub kpis: ExtraKpis,
    /// Years present in the data.
    pub available_years: Vec<i32>,
    /// Years actually applied.
    pub selected_years: Vec<i32>,
    /// Cases per month over the selected years.
    pub volume_over_time: Vec<MonthlyVolume>,
    /// Cases per department over the selected years.
    pub department_volume: Vec<DepartmentVolume>,
}

/// Everything computed in one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Instant the aging buckets were computed against.
    pub generated_at: NaiveDateTime,
    /// Main view.
    pub main: MainView,
    /// Extras view.
    pub extras: ExtrasView,
    /// Unresolved foreign keys.
    pub diagnostics: JoinDiagnostics,
}
