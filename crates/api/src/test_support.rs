//! Sample dataset shared by the route tests.

use chrono::{NaiveDate, NaiveDateTime};
use los_core::aggregation::SortOrder;
use los_core::dataset::{Dataset, HierarchyRecord, TransactionRecord, UserRecord};
use los_shared::types::{HierarchyId, TransactionId, UserId};

use crate::AppState;

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(11, 0, 0)
        .unwrap()
}

fn case(
    id: i64,
    hierarchy_id: i64,
    created_by: i64,
    created_on: NaiveDateTime,
    in_progress: bool,
    code: Option<i32>,
) -> TransactionRecord {
    TransactionRecord {
        id: TransactionId::new(id),
        hierarchy_id: HierarchyId::new(hierarchy_id),
        created_by: UserId::new(created_by),
        created_on,
        in_progress,
        workflow_step_type_id: code,
    }
}

/// Two departments, two users, five cases. Case 5 points at an unknown department.
pub fn sample_dataset() -> Dataset {
    Dataset::new(
        vec![
            HierarchyRecord {
                id: HierarchyId::new(10),
                title: "Retail".to_string(),
            },
            HierarchyRecord {
                id: HierarchyId::new(20),
                title: "Corporate".to_string(),
            },
        ],
        vec![
            case(1, 10, 100, at(2023, 3, 10), false, Some(2)),
            case(2, 10, 100, at(2024, 1, 5), true, None),
            case(3, 20, 101, at(2024, 2, 9), false, Some(3)),
            case(4, 10, 101, at(2024, 2, 20), true, Some(5)),
            case(5, 99, 100, at(2024, 7, 1), false, Some(2)),
        ],
        vec![
            UserRecord {
                id: UserId::new(100),
                name: "Ana".to_string(),
            },
            UserRecord {
                id: UserId::new(101),
                name: "Ben".to_string(),
            },
        ],
    )
}

pub fn sample_state() -> AppState {
    AppState::new(sample_dataset(), 3, SortOrder::Descending)
}
