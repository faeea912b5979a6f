use crate::core::{YfClient, YfError};
use crate::fundamentals::{self, FinancialTable, Frequency};

/// A handle on a single ticker symbol.
///
/// Mirrors the `Ticker` object of the Python `yfinance` library for the one dataset this
/// crate cares about: the income statement.
///
/// # Example
///
/// ```no_run
/// # use yf_income_export::{Ticker, YfClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = YfClient::default();
/// let ticker = Ticker::new(&client, "MSFT");
///
/// let stmt = ticker.quarterly_income_stmt().await?;
/// println!("{} line items over {} quarters", stmt.line_item_count(), stmt.period_count());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Ticker {
    client: YfClient,
    symbol: String,
}

impl Ticker {
    /// Creates a new `Ticker` for a given symbol.
    pub fn new(client: &YfClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
        }
    }

    /// The symbol this ticker was created for.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Fetches the income statement at the given granularity.
    ///
    /// # Errors
    ///
    /// This method will return an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn income_statement(&self, frequency: Frequency) -> Result<FinancialTable, YfError> {
        fundamentals::income_statement(&self.client, &self.symbol, frequency).await
    }

    /// Fetches the annual income statement.
    ///
    /// # Errors
    ///
    /// This method will return an error if the request fails or the response cannot be parsed.
    pub async fn income_stmt(&self) -> Result<FinancialTable, YfError> {
        self.income_statement(Frequency::Annual).await
    }

    /// Fetches the quarterly income statement.
    ///
    /// # Errors
    ///
    /// This method will return an error if the request fails or the response cannot be parsed.
    pub async fn quarterly_income_stmt(&self) -> Result<FinancialTable, YfError> {
        self.income_statement(Frequency::Quarterly).await
    }
}
