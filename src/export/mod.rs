//! Income statement → formatted `.xlsx` workbook.
//!
//! The sheet carries a title in the top-left cell, one bold wrapped header per reporting
//! period, the line items in an accent-colored first column (bold for the key items in
//! [`HIGHLIGHT_ITEMS`]) and the values under a millions display mask. The first row and
//! column are frozen and the header row carries an autofilter.

mod layout;
mod styles;
mod writer;

use chrono::{Local, NaiveDate};

pub use layout::{
    HIGHLIGHT_ITEMS, LABEL_WIDTH_MAX, LABEL_WIDTH_MIN, LABEL_WIDTH_SCALE, LabelStyle, LayoutRow,
    SheetLayout, is_highlighted, label_column_width, title,
};
pub use styles::{ACCENT, MILLIONS_FORMAT};
pub use writer::{HEADER_ROW_HEIGHT, SHEET_NAME, VALUE_COLUMN_WIDTH};

use crate::core::YfError;
use crate::fundamentals::FinancialTable;

/// MIME type of the produced workbook.
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Builds the workbook, stamping today's local date into the title.
///
/// # Errors
///
/// Returns [`YfError::Workbook`] if the spreadsheet writer fails.
pub fn build_workbook(
    table: &FinancialTable,
    ticker: &str,
    period_label: &str,
) -> Result<Vec<u8>, YfError> {
    build_workbook_on(table, ticker, period_label, Local::now().date_naive())
}

/// Builds the workbook with an explicit export date.
///
/// # Errors
///
/// Returns [`YfError::Workbook`] if the spreadsheet writer fails.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(table), err, fields(rows = table.line_item_count(), periods = table.period_count()))
)]
pub fn build_workbook_on(
    table: &FinancialTable,
    ticker: &str,
    period_label: &str,
    exported_on: NaiveDate,
) -> Result<Vec<u8>, YfError> {
    let layout = SheetLayout::plan(table, ticker, period_label, exported_on);
    writer::render(&layout)
}

/// `"<TICKER>_<period>_Income_Statement.xlsx"`, period lower-cased.
#[must_use]
pub fn file_name(ticker: &str, period_label: &str) -> String {
    format!(
        "{}_{}_Income_Statement.xlsx",
        ticker.to_uppercase(),
        period_label.to_lowercase()
    )
}
