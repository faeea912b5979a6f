use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx, open_workbook_from_rs};
use yf_income_export::export::{SHEET_NAME, build_workbook, build_workbook_on};
use yf_income_export::{FinancialTable, Frequency};

use crate::common::{date, sample_table};

fn read_sheet(bytes: Vec<u8>) -> Range<Data> {
    let mut wb: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
    assert_eq!(wb.sheet_names(), vec![SHEET_NAME.to_string()]);
    wb.worksheet_range(SHEET_NAME).unwrap()
}

fn string_at(range: &Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => s.clone(),
        other => panic!("expected string at ({row}, {col}), got {other:?}"),
    }
}

#[test]
fn title_header_and_labels_land_in_place() {
    let bytes = build_workbook_on(
        &sample_table(),
        "aapl",
        Frequency::Quarterly.label(),
        date(2026, 10, 19),
    )
    .unwrap();
    let sheet = read_sheet(bytes);

    assert_eq!(
        string_at(&sheet, 0, 0),
        "AAPL Quarterly Income Statement – exported 2026-10-19"
    );
    assert_eq!(string_at(&sheet, 0, 1), "2025-06-28");
    assert_eq!(string_at(&sheet, 0, 2), "2025-03-29");

    assert_eq!(string_at(&sheet, 1, 0), "Total Revenue");
    assert_eq!(string_at(&sheet, 6, 0), "Diluted EPS");
}

#[test]
fn values_are_stored_unscaled() {
    let bytes = build_workbook_on(&sample_table(), "AAPL", "Annual", date(2026, 1, 2)).unwrap();
    let sheet = read_sheet(bytes);

    assert_eq!(
        sheet.get_value((1, 1)),
        Some(&Data::Float(94_036_000_000.0))
    );
    assert_eq!(sheet.get_value((6, 1)), Some(&Data::Float(1.57)));
    // Missing values become blank cells.
    assert!(matches!(sheet.get_value((6, 2)), None | Some(Data::Empty)));
}

#[test]
fn zero_period_table_still_exports() {
    let mut table = FinancialTable::new(Vec::new());
    table.push_row("Total Revenue", Vec::new()).unwrap();
    table.push_row("Net Income", Vec::new()).unwrap();

    let bytes = build_workbook(&table, "x", "Annual").unwrap();
    let sheet = read_sheet(bytes);

    assert_eq!(string_at(&sheet, 2, 0), "Net Income");
    assert_eq!(sheet.width(), 1);
}

#[test]
fn title_date_is_today() {
    let bytes = build_workbook(&sample_table(), "Msft", "Annual").unwrap();
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let sheet = read_sheet(bytes);

    let title = string_at(&sheet, 0, 0);
    assert!(title.starts_with("MSFT Annual Income Statement – exported "));
    // Built before `today` was read, so a run straddling midnight sees yesterday.
    let yesterday = (chrono::Local::now().date_naive() - chrono::Duration::days(1))
        .format("%Y-%m-%d")
        .to_string();
    assert!(title.ends_with(&today) || title.ends_with(&yesterday), "{title}");
}
