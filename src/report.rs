//! One request, one response: ticker input in, a user-facing outcome out.
//!
//! [`render_report`] is the whole pipeline. It validates the ticker, asks a
//! [`StatementSource`] for the income statement and, when there is data, formats the
//! workbook. Every branch the user can see is a variant of [`RenderResult`]; nothing is
//! signalled by panicking or by an error escaping the function.

use crate::core::{YfClient, YfError};
use crate::export::{self, XLSX_MIME};
use crate::fundamentals::{self, FinancialTable, Frequency};

/// Warning shown when the ticker input is blank.
pub const BLANK_TICKER_WARNING: &str = "Please enter a valid ticker symbol.";

/// Anything that can produce an income statement for a symbol.
///
/// [`YfClient`] is the production implementation; tests substitute their own.
pub trait StatementSource {
    /// Fetches the statement. An empty table means "no data", not failure.
    fn income_statement(
        &self,
        symbol: &str,
        frequency: Frequency,
    ) -> impl Future<Output = Result<FinancialTable, YfError>> + Send;
}

impl StatementSource for YfClient {
    async fn income_statement(
        &self,
        symbol: &str,
        frequency: Frequency,
    ) -> Result<FinancialTable, YfError> {
        fundamentals::income_statement(self, symbol, frequency).await
    }
}

/// A validated request for one income statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRequest {
    ticker: String,
    frequency: Frequency,
}

impl ReportRequest {
    /// Builds a request from raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`YfError::InvalidParams`] if the ticker is empty or whitespace.
    pub fn new(ticker_input: &str, frequency: Frequency) -> Result<Self, YfError> {
        let ticker = ticker_input.trim();
        if ticker.is_empty() {
            return Err(YfError::InvalidParams("ticker symbol is blank".into()));
        }
        Ok(Self {
            ticker: ticker.to_string(),
            frequency,
        })
    }

    /// The ticker as entered, trimmed.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Name of the exported file, e.g. `AAPL_quarterly_Income_Statement.xlsx`.
    #[must_use]
    pub fn file_name(&self) -> String {
        export::file_name(&self.ticker, self.frequency.label())
    }
}

/// Outcome of asking a source for a statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Retrieval {
    Success(FinancialTable),
    Empty,
    Failure(String),
}

/// Asks `source` for the statement described by `request`.
pub async fn retrieve<S: StatementSource>(source: &S, request: &ReportRequest) -> Retrieval {
    match source
        .income_statement(&request.ticker.to_uppercase(), request.frequency)
        .await
    {
        Ok(table) if table.is_empty() => Retrieval::Empty,
        Ok(table) => Retrieval::Success(table),
        Err(e) => Retrieval::Failure(e.to_string()),
    }
}

/// The workbook ready to hand to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// A successfully retrieved and formatted statement.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub message: String,
    pub table: FinancialTable,
    pub file: ExportFile,
}

impl Report {
    #[must_use]
    pub fn line_item_count(&self) -> usize {
        self.table.line_item_count()
    }

    #[must_use]
    pub fn period_count(&self) -> usize {
        self.table.period_count()
    }
}

/// Every outcome a user can see.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderResult {
    /// The input was rejected before anything was fetched.
    InvalidInput(String),
    /// The provider had no statement for the ticker.
    NoData(String),
    /// Fetching or formatting failed; the message includes the cause.
    Failed(String),
    Ready(Report),
}

/// Runs the whole pipeline for one user action.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(source)))]
pub async fn render_report<S: StatementSource>(
    source: &S,
    ticker_input: &str,
    frequency: Frequency,
) -> RenderResult {
    let Ok(request) = ReportRequest::new(ticker_input, frequency) else {
        return RenderResult::InvalidInput(BLANK_TICKER_WARNING.to_string());
    };

    match retrieve(source, &request).await {
        Retrieval::Empty => RenderResult::NoData(format!(
            "No income statement data found for {}.",
            request.ticker()
        )),
        Retrieval::Failure(cause) => failed(&cause),
        Retrieval::Success(table) => {
            match export::build_workbook(&table, request.ticker(), frequency.label()) {
                Ok(bytes) => RenderResult::Ready(Report {
                    message: format!("Successfully retrieved data for {}.", request.ticker()),
                    file: ExportFile {
                        file_name: request.file_name(),
                        mime: XLSX_MIME,
                        bytes,
                    },
                    table,
                }),
                Err(e) => failed(&e.to_string()),
            }
        }
    }
}

fn failed(cause: &str) -> RenderResult {
    #[cfg(feature = "tracing")]
    tracing::warn!(cause, "report failed");
    RenderResult::Failed(format!("Error fetching data: {cause}"))
}
