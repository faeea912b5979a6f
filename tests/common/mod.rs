#![allow(dead_code)]

use chrono::NaiveDate;
use httpmock::MockServer;
use url::Url;
use yf_income_export::{FinancialTable, YfClient};

pub const TIMESERIES_PATH: &str = "/ws/fundamentals-timeseries/v1/finance/timeseries/";

/// A client pointed at `server`, already holding a cookie and the crumb `"crumb"`.
pub fn preauth_client(server: &MockServer) -> YfClient {
    YfClient::builder()
        .base_timeseries(Url::parse(&format!("{}{TIMESERIES_PATH}", server.base_url())).unwrap())
        ._preauth("cookie", "crumb")
        .build()
        .unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Two quarters of a small statement.
pub fn sample_table() -> FinancialTable {
    FinancialTable::from_rows(
        vec![date(2025, 6, 28), date(2025, 3, 29)],
        [
            ("Total Revenue", vec![Some(94_036_000_000.0), Some(95_359_000_000.0)]),
            ("Cost Of Revenue", vec![Some(50_318_000_000.0), Some(50_492_000_000.0)]),
            ("Gross Profit", vec![Some(43_718_000_000.0), Some(44_867_000_000.0)]),
            ("Operating Income", vec![Some(28_202_000_000.0), Some(29_589_000_000.0)]),
            ("Net Income", vec![Some(23_434_000_000.0), Some(24_780_000_000.0)]),
            ("Diluted EPS", vec![Some(1.57), None]),
        ],
    )
    .unwrap()
}

/// A timeseries payload with quarterly revenue and net income for two quarters.
pub fn quarterly_payload() -> &'static str {
    r#"{
      "timeseries": {
        "result": [
          {
            "meta": {"symbol": ["AAPL"], "type": ["quarterlyNetIncome"]},
            "timestamp": [1743206400, 1751068800],
            "quarterlyNetIncome": [
              {"dataId": 20100, "asOfDate": "2025-03-29", "periodType": "3M", "currencyCode": "USD",
               "reportedValue": {"raw": 24780000000, "fmt": "24.78B"}},
              {"dataId": 20100, "asOfDate": "2025-06-28", "periodType": "3M", "currencyCode": "USD",
               "reportedValue": {"raw": 23434000000, "fmt": "23.43B"}}
            ]
          },
          {
            "meta": {"symbol": ["AAPL"], "type": ["quarterlyTotalRevenue"]},
            "timestamp": [1743206400, 1751068800],
            "quarterlyTotalRevenue": [
              {"dataId": 20100, "asOfDate": "2025-03-29", "periodType": "3M", "currencyCode": "USD",
               "reportedValue": {"raw": 95359000000, "fmt": "95.36B"}},
              {"dataId": 20100, "asOfDate": "2025-06-28", "periodType": "3M", "currencyCode": "USD",
               "reportedValue": {"raw": 94036000000, "fmt": "94.04B"}}
            ]
          },
          {
            "meta": {"symbol": ["AAPL"], "type": ["quarterlyEBITDA"]},
            "timestamp": [1751068800],
            "quarterlyEBITDA": [
              {"dataId": 20100, "asOfDate": "2025-06-28", "periodType": "3M", "currencyCode": "USD",
               "reportedValue": {"raw": 31032000000, "fmt": "31.03B"}}
            ]
          }
        ],
        "error": null
      }
    }"#
}
