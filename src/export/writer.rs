use rust_xlsxwriter::{Workbook, Worksheet};

use super::layout::{LabelStyle, SheetLayout};
use super::styles::Styles;
use crate::core::YfError;

pub const SHEET_NAME: &str = "Income Statement";
pub const HEADER_ROW_HEIGHT: f64 = 24.0;
pub const VALUE_COLUMN_WIDTH: f64 = 14.0;

/// Renders `layout` into an in-memory `.xlsx` file.
pub(super) fn render(layout: &SheetLayout) -> Result<Vec<u8>, YfError> {
    let styles = Styles::new();
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    write_header(sheet, layout, &styles)?;
    write_body(sheet, layout, &styles)?;

    sheet.set_freeze_panes(1, 1)?;
    // A1 holds the title and doubles as the label column's header, so the column A
    // filter sits under the title text.
    sheet.autofilter(0, 0, 0, layout.last_col())?;

    Ok(workbook.save_to_buffer()?)
}

fn write_header(sheet: &mut Worksheet, layout: &SheetLayout, styles: &Styles) -> Result<(), YfError> {
    sheet.write_string_with_format(0, 0, &layout.title, &styles.title)?;
    for (col, header) in (1u16..).zip(&layout.period_headers) {
        sheet.write_string_with_format(0, col, header, &styles.header)?;
    }
    sheet.set_row_height(0, HEADER_ROW_HEIGHT)?;
    Ok(())
}

fn write_body(sheet: &mut Worksheet, layout: &SheetLayout, styles: &Styles) -> Result<(), YfError> {
    sheet.set_column_width(0, layout.label_width)?;
    sheet.set_column_format(0, &styles.name)?;
    for col in 1..=layout.last_col() {
        sheet.set_column_width(col, VALUE_COLUMN_WIDTH)?;
        sheet.set_column_format(col, &styles.millions)?;
    }

    for (row, item) in (1u32..).zip(&layout.rows) {
        let label_format = match item.style {
            LabelStyle::Plain => &styles.name,
            LabelStyle::Highlight => &styles.highlight,
        };
        sheet.write_string_with_format(row, 0, &item.label, label_format)?;

        for (col, value) in (1u16..).zip(&item.values) {
            match value.filter(|v| v.is_finite()) {
                Some(v) => sheet.write_number_with_format(row, col, v, &styles.millions)?,
                None => sheet.write_blank(row, col, &styles.millions)?,
            };
        }
    }
    Ok(())
}
