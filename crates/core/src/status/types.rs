//! Status enumerations derived from the workflow step code.

use serde::{Deserialize, Serialize};

/// Status used by the department and user breakdowns.
///
/// Only approvals and rejections are final; every other code, including
/// revert, forward, zero and missing, counts as in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CaseStatus {
    /// Workflow code 2.
    Approved,
    /// Any code other than 2 or 3.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Workflow code 3.
    Rejected,
}

impl CaseStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 3] = [Self::Approved, Self::InProgress, Self::Rejected];

    /// Maps a raw workflow step code to a status.
    #[must_use]
    pub const fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(2) => Self::Approved,
            Some(3) => Self::Rejected,
            _ => Self::InProgress,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::InProgress => "In Progress",
            Self::Rejected => "Rejected",
        }
    }

    /// Chart colour hint.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Approved => "#1f77b4",
            Self::InProgress => "#ff7f0e",
            Self::Rejected => "#d62728",
        }
    }
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Workflow step as counted by the KPI tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStep {
    /// Code 2.
    Approved,
    /// Code 3.
    Rejected,
    /// Code 4.
    Revert,
    /// Code 5.
    Forward,
    /// Missing or 0.
    Unclassified,
    /// Any other code.
    Other(i32),
}

impl WorkflowStep {
    /// Maps a raw workflow step code to a step.
    #[must_use]
    pub const fn from_code(code: Option<i32>) -> Self {
        match code {
            None | Some(0) => Self::Unclassified,
            Some(2) => Self::Approved,
            Some(3) => Self::Rejected,
            Some(4) => Self::Revert,
            Some(5) => Self::Forward,
            Some(other) => Self::Other(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(2), CaseStatus::Approved)]
    #[case(Some(3), CaseStatus::Rejected)]
    #[case(Some(4), CaseStatus::InProgress)]
    #[case(Some(5), CaseStatus::InProgress)]
    #[case(Some(0), CaseStatus::InProgress)]
    #[case(Some(1), CaseStatus::InProgress)]
    #[case(Some(99), CaseStatus::InProgress)]
    #[case(None, CaseStatus::InProgress)]
    fn test_case_status_from_code(#[case] code: Option<i32>, #[case] expected: CaseStatus) {
        assert_eq!(CaseStatus::from_code(code), expected);
    }

    #[rstest]
    #[case(Some(2), WorkflowStep::Approved)]
    #[case(Some(3), WorkflowStep::Rejected)]
    #[case(Some(4), WorkflowStep::Revert)]
    #[case(Some(5), WorkflowStep::Forward)]
    #[case(Some(0), WorkflowStep::Unclassified)]
    #[case(None, WorkflowStep::Unclassified)]
    #[case(Some(7), WorkflowStep::Other(7))]
    fn test_workflow_step_from_code(#[case] code: Option<i32>, #[case] expected: WorkflowStep) {
        assert_eq!(WorkflowStep::from_code(code), expected);
    }

    #[test]
    fn test_revert_is_in_progress_for_breakdowns() {
        assert_eq!(WorkflowStep::from_code(Some(4)), WorkflowStep::Revert);
        assert_eq!(CaseStatus::from_code(Some(4)), CaseStatus::InProgress);
    }

    #[test]
    fn test_case_status_serializes_as_label() {
        let json = serde_json::to_string(&CaseStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        assert_eq!(CaseStatus::Rejected.to_string(), "Rejected");
    }
}
