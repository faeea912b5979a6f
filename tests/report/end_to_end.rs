use std::io::Cursor;

use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};
use httpmock::Method::GET;
use httpmock::MockServer;
use yf_income_export::export::{LabelStyle, SHEET_NAME, SheetLayout};
use yf_income_export::{
    FinancialTable, Frequency, RenderResult, StatementSource, YfError, render_report,
};

use crate::common::{TIMESERIES_PATH, date, preauth_client, quarterly_payload};

struct FixedSource(FinancialTable);

impl StatementSource for FixedSource {
    async fn income_statement(
        &self,
        _symbol: &str,
        _frequency: Frequency,
    ) -> Result<FinancialTable, YfError> {
        Ok(self.0.clone())
    }
}

#[tokio::test]
async fn aapl_quarterly_two_rows() {
    let table = FinancialTable::from_rows(
        vec![date(2025, 6, 28), date(2025, 3, 29)],
        [
            ("Total Revenue", vec![Some(1_000_000.0), Some(2_000_000.0)]),
            ("Net Income", vec![Some(100_000.0), Some(200_000.0)]),
        ],
    )
    .unwrap();
    let source = FixedSource(table);

    let RenderResult::Ready(report) = render_report(&source, "AAPL", Frequency::Quarterly).await
    else {
        panic!("expected Ready");
    };
    assert_eq!(report.file.file_name, "AAPL_quarterly_Income_Statement.xlsx");

    let layout = SheetLayout::plan(&report.table, "AAPL", "Quarterly", date(2026, 10, 19));
    assert!(layout.rows.iter().all(|r| r.style == LabelStyle::Highlight));
    assert_eq!(layout.highlighted().count(), 2);

    let mut wb: Xlsx<_> = open_workbook_from_rs(Cursor::new(report.file.bytes)).unwrap();
    let sheet = wb.worksheet_range(SHEET_NAME).unwrap();
    let Some(Data::String(title)) = sheet.get_value((0, 0)) else {
        panic!("missing title");
    };
    assert!(title.contains("AAPL Quarterly Income Statement"), "{title}");
    assert_eq!(sheet.get_value((2, 2)), Some(&Data::Float(200_000.0)));
}

#[tokio::test]
async fn yahoo_to_workbook() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("{TIMESERIES_PATH}AAPL"))
            .query_param("crumb", "crumb");
        then.status(200)
            .header("content-type", "application/json")
            .body(quarterly_payload());
    });

    let client = preauth_client(&server);
    let RenderResult::Ready(report) = render_report(&client, "aapl", Frequency::Quarterly).await
    else {
        panic!("expected Ready");
    };
    mock.assert();

    assert_eq!(report.file.file_name, "AAPL_quarterly_Income_Statement.xlsx");

    let mut wb: Xlsx<_> = open_workbook_from_rs(Cursor::new(report.file.bytes)).unwrap();
    let sheet = wb.worksheet_range(SHEET_NAME).unwrap();

    let Some(Data::String(title)) = sheet.get_value((0, 0)) else {
        panic!("missing title");
    };
    assert!(title.starts_with("AAPL Quarterly Income Statement – exported "));
    assert_eq!(
        sheet.get_value((1, 0)),
        Some(&Data::String("Total Revenue".into()))
    );
    assert_eq!(
        sheet.get_value((2, 2)),
        Some(&Data::Float(24_780_000_000.0))
    );
}
