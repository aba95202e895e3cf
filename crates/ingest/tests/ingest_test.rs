//! Integration tests for workbook ingest.

use chrono::NaiveDate;
use los_ingest::{Cell, IngestError, Ingestor, MemorySource, Sheet, TableRole, Workbook};
use los_shared::types::{HierarchyId, TransactionId, UserId};

const TRANSACTION_HEADERS: [&str; 6] = [
    "TRANSACTION_ID",
    "BUSINESSHIERARCHY_ID",
    "CREATEDBY",
    "CREATEDON",
    "IN_PROGRESS",
    "WORKFLOWSTEPTYPE_ID",
];

fn created(y: i32, m: u32, d: u32) -> Cell {
    Cell::DateTime(
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap(),
    )
}

fn hierarchy_sheet() -> Sheet {
    Sheet::new("BusinessHierarchy", ["BUSINESSHIERARCHY_ID", "TITLE"])
        .with_row(vec![Cell::Int(10), "Retail".into()])
        .with_row(vec![Cell::Int(20), "Corporate".into()])
}

fn transactions_sheet() -> Sheet {
    Sheet::new("Transactions", TRANSACTION_HEADERS)
        .with_row(vec![
            Cell::Int(1),
            Cell::Int(10),
            Cell::Int(100),
            created(2024, 1, 5),
            Cell::Bool(false),
            Cell::Int(2),
        ])
        .with_row(vec![
            Cell::Int(2),
            Cell::Int(20),
            Cell::Int(101),
            created(2024, 2, 9),
            Cell::Int(1),
            Cell::Int(5),
        ])
}

fn users_sheet() -> Sheet {
    Sheet::new("Users", ["USER_ID", "NAME"])
        .with_row(vec![Cell::Int(100), "Ana".into()])
        .with_row(vec![Cell::Int(101), "Ben".into()])
}

fn workbook(transactions: Sheet) -> MemorySource {
    MemorySource::new(Workbook::new(vec![
        hierarchy_sheet(),
        transactions,
        users_sheet(),
    ]))
}

#[test]
fn test_ingest_happy_path() {
    let dataset = Ingestor::load(&workbook(transactions_sheet())).unwrap();

    assert_eq!(dataset.hierarchy.len(), 2);
    assert_eq!(dataset.hierarchy[1].id, HierarchyId::new(20));
    assert_eq!(dataset.hierarchy[1].title, "Corporate");

    assert_eq!(dataset.transactions.len(), 2);
    let second = &dataset.transactions[1];
    assert_eq!(second.id, TransactionId::new(2));
    assert_eq!(second.created_by, UserId::new(101));
    assert!(second.in_progress);
    assert_eq!(second.workflow_step_type_id, Some(5));

    assert_eq!(dataset.users[0].name, "Ana");
    assert_eq!(dataset.years(), vec![2024]);
}

#[test]
fn test_missing_sheet_is_reported_with_its_role() {
    let source = MemorySource::new(Workbook::new(vec![hierarchy_sheet(), transactions_sheet()]));

    let err = Ingestor::load(&source).unwrap_err();
    match err {
        IngestError::SheetMissing { role, index, found } => {
            assert_eq!(role, TableRole::Users);
            assert_eq!(index, 2);
            assert_eq!(found, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_column_names_table_and_header() {
    let sheet = Sheet::new("Transactions", TRANSACTION_HEADERS[..5].iter().copied()).with_row(vec![
        Cell::Int(1),
        Cell::Int(10),
        Cell::Int(100),
        created(2024, 1, 5),
        Cell::Bool(false),
    ]);

    let err = Ingestor::load(&workbook(sheet)).unwrap_err();
    assert!(matches!(
        err,
        IngestError::ColumnMissing {
            role: TableRole::Transactions,
            column: "WORKFLOWSTEPTYPE_ID",
        }
    ));
    assert!(err.to_string().contains("transactions"));
    assert!(err.to_string().contains("WORKFLOWSTEPTYPE_ID"));
}

#[test]
fn test_type_mismatch_carries_row_and_found_value() {
    let sheet = transactions_sheet().with_row(vec![
        Cell::Int(3),
        Cell::Int(10),
        Cell::Int(100),
        "not a date".into(),
        Cell::Bool(true),
        Cell::Empty,
    ]);

    let err = Ingestor::load(&workbook(sheet)).unwrap_err();
    match err {
        IngestError::TypeMismatch {
            role,
            row,
            column,
            found,
            ..
        } => {
            assert_eq!(role, TableRole::Transactions);
            assert_eq!(row, 4);
            assert_eq!(column, "CREATEDON");
            assert!(found.contains("not a date"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_workflow_code_is_none() {
    let sheet = transactions_sheet().with_row(vec![
        Cell::Int(3),
        Cell::Int(10),
        Cell::Int(100),
        created(2023, 12, 1),
        Cell::Bool(true),
        Cell::Empty,
    ]);

    let dataset = Ingestor::load(&workbook(sheet)).unwrap();
    assert_eq!(dataset.transactions[2].workflow_step_type_id, None);
    assert_eq!(dataset.years(), vec![2023, 2024]);
}

#[test]
fn test_whole_float_ids_and_text_dates_are_accepted() {
    let sheet = Sheet::new("Transactions", TRANSACTION_HEADERS).with_row(vec![
        Cell::Float(7.0),
        Cell::Float(10.0),
        Cell::Text("100".into()),
        "2024-05-31 17:45:00".into(),
        Cell::Float(0.0),
        Cell::Float(3.0),
    ]);

    let dataset = Ingestor::load(&workbook(sheet)).unwrap();
    let case = &dataset.transactions[0];
    assert_eq!(case.id, TransactionId::new(7));
    assert_eq!(case.hierarchy_id, HierarchyId::new(10));
    assert_eq!(case.created_by, UserId::new(100));
    assert_eq!(
        case.created_on,
        NaiveDate::from_ymd_opt(2024, 5, 31)
            .unwrap()
            .and_hms_opt(17, 45, 0)
            .unwrap()
    );
    assert!(!case.in_progress);
    assert_eq!(case.workflow_step_type_id, Some(3));
}

#[test]
fn test_fractional_workflow_code_is_rejected() {
    let sheet = Sheet::new("Transactions", TRANSACTION_HEADERS).with_row(vec![
        Cell::Int(1),
        Cell::Int(10),
        Cell::Int(100),
        created(2024, 1, 5),
        Cell::Bool(false),
        Cell::Float(2.5),
    ]);

    let err = Ingestor::load(&workbook(sheet)).unwrap_err();
    assert!(matches!(
        err,
        IngestError::TypeMismatch {
            column: "WORKFLOWSTEPTYPE_ID",
            row: 2,
            ..
        }
    ));
}
