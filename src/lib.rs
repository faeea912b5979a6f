//! yf-income-export: fetch an income statement from Yahoo Finance and export it as a
//! formatted Excel workbook.
//!
//! The crate has three layers:
//!
//! - [`fundamentals`] / [`Ticker`]: the Yahoo adapter, returning a [`FinancialTable`].
//! - [`export`]: the workbook formatter, turning a table into `.xlsx` bytes.
//! - [`report`]: the request/response pipeline tying the two together with every
//!   user-visible outcome as a [`RenderResult`] variant.
//!
//! ```no_run
//! # use yf_income_export::{Frequency, RenderResult, YfClient, render_report};
//! # #[tokio::main]
//! # async fn main() {
//! let client = YfClient::default();
//! match render_report(&client, "AAPL", Frequency::Quarterly).await {
//!     RenderResult::Ready(report) => {
//!         std::fs::write(&report.file.file_name, &report.file.bytes).unwrap();
//!     }
//!     other => eprintln!("{other:?}"),
//! }
//! # }
//! ```

pub mod core;
pub mod export;
pub mod fundamentals;
pub mod report;
pub mod ticker;

pub use crate::core::{YfClient, YfClientBuilder, YfError};
pub use export::{build_workbook, build_workbook_on};
pub use fundamentals::{FinancialTable, Frequency, LineItem};
pub use report::{
    ExportFile, RenderResult, Report, ReportRequest, Retrieval, StatementSource, render_report,
};
pub use ticker::Ticker;
