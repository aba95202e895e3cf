//! Builders shared by the pipeline tests.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use los_shared::types::{HierarchyId, TransactionId, UserId};

use crate::dataset::{HierarchyRecord, TransactionRecord, UserRecord};

/// Fixed evaluation instant used across tests.
pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 30)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// A case created `days_ago` days before [`now`].
pub fn case(
    id: i64,
    hierarchy_id: i64,
    created_by: i64,
    days_ago: i64,
    in_progress: bool,
    code: Option<i32>,
) -> TransactionRecord {
    TransactionRecord {
        id: TransactionId::new(id),
        hierarchy_id: HierarchyId::new(hierarchy_id),
        created_by: UserId::new(created_by),
        created_on: now() - Duration::days(days_ago),
        in_progress,
        workflow_step_type_id: code,
    }
}

/// A case created at a given calendar date.
pub fn case_on(id: i64, hierarchy_id: i64, year: i32, month: u32, day: u32) -> TransactionRecord {
    TransactionRecord {
        id: TransactionId::new(id),
        hierarchy_id: HierarchyId::new(hierarchy_id),
        created_by: UserId::new(1),
        created_on: NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap(),
        in_progress: false,
        workflow_step_type_id: Some(2),
    }
}

pub fn dept(id: i64, title: &str) -> HierarchyRecord {
    HierarchyRecord {
        id: HierarchyId::new(id),
        title: title.to_string(),
    }
}

pub fn user(id: i64, name: &str) -> UserRecord {
    UserRecord {
        id: UserId::new(id),
        name: name.to_string(),
    }
}
