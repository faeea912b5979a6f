//! Pure layout of the exported sheet: what goes in which cell and with which role.
//!
//! Nothing here touches the spreadsheet writer, so the layout rules can be checked
//! without decoding a workbook.

use chrono::NaiveDate;

use crate::fundamentals::FinancialTable;

/// Line items rendered in bold in the label column.
pub const HIGHLIGHT_ITEMS: [&str; 4] = [
    "Total Revenue",
    "Operating Income",
    "Net Income",
    "Gross Profit",
];

/// Bounds and scale for the label column width heuristic.
pub const LABEL_WIDTH_MIN: f64 = 14.0;
pub const LABEL_WIDTH_MAX: f64 = 60.0;
pub const LABEL_WIDTH_SCALE: f64 = 0.95;

/// Styling role of a label cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelStyle {
    /// Accent color, vertically centered.
    Plain,
    /// Accent color, bold.
    Highlight,
}

/// One data row of the sheet (sheet row `index + 1`).
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutRow {
    pub label: String,
    pub style: LabelStyle,
    pub values: Vec<Option<f64>>,
}

/// Cell-level plan for the income statement sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetLayout {
    /// Text of cell (0, 0).
    pub title: String,
    /// Text of cells (0, 1..=N), one per period.
    pub period_headers: Vec<String>,
    /// Width of column 0, in character units.
    pub label_width: f64,
    pub rows: Vec<LayoutRow>,
}

impl SheetLayout {
    /// Plans the sheet for `table` as exported on `exported_on`.
    #[must_use]
    pub fn plan(
        table: &FinancialTable,
        ticker: &str,
        period_label: &str,
        exported_on: NaiveDate,
    ) -> Self {
        let max_label_len = table
            .rows()
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0);

        let rows = table
            .rows()
            .iter()
            .map(|r| LayoutRow {
                label: r.label.clone(),
                style: if is_highlighted(&r.label) {
                    LabelStyle::Highlight
                } else {
                    LabelStyle::Plain
                },
                values: r.values.clone(),
            })
            .collect();

        Self {
            title: title(ticker, period_label, exported_on),
            period_headers: table
                .periods()
                .iter()
                .map(|p| p.format("%Y-%m-%d").to_string())
                .collect(),
            label_width: label_column_width(max_label_len),
            rows,
        }
    }

    /// Index of the rightmost used column.
    #[must_use]
    pub fn last_col(&self) -> u16 {
        u16::try_from(self.period_headers.len()).unwrap_or(u16::MAX)
    }

    /// Rows whose label cell is rendered bold.
    pub fn highlighted(&self) -> impl Iterator<Item = &LayoutRow> {
        self.rows
            .iter()
            .filter(|r| r.style == LabelStyle::Highlight)
    }
}

#[must_use]
pub fn is_highlighted(label: &str) -> bool {
    HIGHLIGHT_ITEMS.contains(&label)
}

/// `"<TICKER> <PeriodLabel> Income Statement – exported <YYYY-MM-DD>"`.
#[must_use]
pub fn title(ticker: &str, period_label: &str, exported_on: NaiveDate) -> String {
    format!(
        "{} {period_label} Income Statement – exported {}",
        ticker.to_uppercase(),
        exported_on.format("%Y-%m-%d")
    )
}

/// Width heuristic for the label column: `clamp(14, 60, round(0.95 × max_len))`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn label_column_width(max_label_len: usize) -> f64 {
    (max_label_len as f64 * LABEL_WIDTH_SCALE)
        .round()
        .clamp(LABEL_WIDTH_MIN, LABEL_WIDTH_MAX)
}
