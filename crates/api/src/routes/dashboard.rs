//! Dashboard routes.
//!
//! Every request runs the pipeline against the ingested dataset with the
//! current local time, so aging buckets are always fresh.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use chrono::Local;
use los_core::aggregation::{SortOrder, YearSelection};
use los_core::dashboard::{
    DashboardError, DashboardOptions, DashboardReport, DashboardService, ExtrasView, MainView,
};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{AppState, error::ApiError};

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/main", get(get_main_view))
        .route("/dashboard/extras", get(get_extras_view))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters shared by the dashboard endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Department chart ordering (`asc`/`ascending`/`desc`/`descending`).
    pub dept_sort: Option<String>,
    /// User chart ordering.
    pub user_sort: Option<String>,
    /// Comma-separated years. Absent selects every year, empty selects none.
    pub years: Option<String>,
}

impl DashboardQuery {
    /// Resolves the query into pipeline options.
    pub fn options(&self, default_sort: SortOrder) -> Result<DashboardOptions, DashboardError> {
        let sort = |raw: Option<&str>| raw.map_or(Ok(default_sort), str::parse);

        let years = match &self.years {
            Some(raw) => YearSelection::parse_list(raw)?,
            None => YearSelection::All,
        };

        Ok(DashboardOptions::new()
            .with_department_sort(sort(self.dept_sort.as_deref())?)
            .with_user_sort(sort(self.user_sort.as_deref())?)
            .with_years(years))
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

fn run(state: &AppState, query: &DashboardQuery) -> Result<DashboardReport, ApiError> {
    let options = query.options(state.default_sort)?;
    debug!(?options, "Building dashboard");

    let report = DashboardService::build(&state.dataset, Local::now().naive_local(), &options);

    if !report.diagnostics.is_clean() {
        warn!(
            unmatched_departments = report.diagnostics.unmatched_departments,
            unmatched_users = report.diagnostics.unmatched_users,
            "Cases with unresolved department or creator grouped under null"
        );
    }

    Ok(report)
}

/// GET /dashboard
async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardReport>, ApiError> {
    run(&state, &query).map(Json)
}

/// GET /dashboard/main
async fn get_main_view(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<MainView>, ApiError> {
    run(&state, &query).map(|report| Json(report.main))
}

/// GET /dashboard/extras
async fn get_extras_view(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<ExtrasView>, ApiError> {
    run(&state, &query).map(|report| Json(report.extras))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::{create_router, test_support::sample_state};

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = create_router(sample_state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn group_keys(breakdown: &Value) -> Vec<Value> {
        breakdown["groups"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["group_key"].clone())
            .collect()
    }

    #[test]
    fn test_query_defaults() {
        let options = DashboardQuery::default()
            .options(SortOrder::Ascending)
            .unwrap();
        assert_eq!(options.department_sort, SortOrder::Ascending);
        assert_eq!(options.user_sort, SortOrder::Ascending);
        assert_eq!(options.years, YearSelection::All);
    }

    #[test]
    fn test_query_empty_years_selects_nothing() {
        let query = DashboardQuery {
            years: Some(String::new()),
            ..DashboardQuery::default()
        };
        let options = query.options(SortOrder::Descending).unwrap();
        assert!(options.years.is_empty());
    }

    #[tokio::test]
    async fn test_full_report() {
        let (status, json) = get_json("/api/v1/dashboard").await;
        assert_eq!(status, StatusCode::OK);

        let kpis = &json["main"]["kpis"];
        assert_eq!(kpis["total_cases"], 5);
        assert_eq!(kpis["in_progress_cases"], 2);
        assert_eq!(kpis["approved_cases"], 2);
        assert_eq!(kpis["rejected_cases"], 1);

        assert_eq!(json["extras"]["kpis"]["forward_cases"], 1);
        assert_eq!(json["extras"]["kpis"]["null_cases"], 1);
        assert_eq!(json["extras"]["available_years"], serde_json::json!([2023, 2024]));
        assert_eq!(json["extras"]["volume_over_time"].as_array().unwrap().len(), 4);

        assert_eq!(json["diagnostics"]["unmatched_departments"], 1);
        assert_eq!(json["diagnostics"]["unmatched_users"], 0);
    }

    #[rstest]
    #[case("desc", vec!["Retail".into(), "Corporate".into(), Value::Null])]
    #[case("asc", vec!["Corporate".into(), Value::Null, "Retail".into()])]
    #[tokio::test]
    async fn test_department_sort_toggle(#[case] order: &str, #[case] expected: Vec<Value>) {
        let (status, json) = get_json(&format!("/api/v1/dashboard/main?dept_sort={order}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(group_keys(&json["departments"]), expected);
        // The user chart keeps its own default.
        assert_eq!(
            group_keys(&json["users"]),
            vec![Value::from("Ana"), Value::from("Ben")]
        );
    }

    #[tokio::test]
    async fn test_main_view_aging_matrix() {
        let (_, json) = get_json("/api/v1/dashboard/main").await;
        let matrix = &json["department_aging"];
        assert_eq!(matrix["columns"], serde_json::json!(["Over 150 Days"]));
        assert_eq!(matrix["rows"].as_array().unwrap().len(), 1);
        assert_eq!(matrix["rows"][0]["group_key"], "Retail");
        assert_eq!(matrix["rows"][0]["total"], 2);
        assert_eq!(matrix["grand_total"], 2);
    }

    #[tokio::test]
    async fn test_extras_year_filter() {
        let (status, json) = get_json("/api/v1/dashboard/extras?years=2024").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["selected_years"], serde_json::json!([2024]));

        let labels: Vec<&str> = json["volume_over_time"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["label"].as_str().unwrap())
            .collect();
        assert_eq!(labels, vec!["2024-01", "2024-02", "2024-07"]);

        let volume = json["department_volume"].as_array().unwrap();
        assert_eq!(volume[0]["department"], "Retail");
        assert_eq!(volume[0]["count"], 2);
        assert_eq!(volume.len(), 3);
    }

    #[tokio::test]
    async fn test_extras_empty_year_selection() {
        let (status, json) = get_json("/api/v1/dashboard/extras?years=").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["volume_over_time"].as_array().unwrap().is_empty());
        assert!(json["department_volume"].as_array().unwrap().is_empty());
        // KPI tiles ignore the year filter.
        assert_eq!(json["kpis"]["forward_cases"], 1);
    }

    #[rstest]
    #[case("/api/v1/dashboard?dept_sort=sideways", "sideways")]
    #[case("/api/v1/dashboard/main?user_sort=up", "up")]
    #[case("/api/v1/dashboard/extras?years=2024,twenty", "twenty")]
    #[tokio::test]
    async fn test_bad_parameters_are_rejected(#[case] uri: &str, #[case] culprit: &str) {
        let (status, json) = get_json(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "VALIDATION_ERROR");
        assert!(json["message"].as_str().unwrap().contains(culprit));
    }
}
