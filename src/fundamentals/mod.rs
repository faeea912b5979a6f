//! Income statements from Yahoo's fundamentals timeseries endpoint.

mod api;
mod keys;
mod model;
mod wire;

pub use model::{FinancialTable, Frequency, LABEL_FIELD, LineItem};

use crate::{YfClient, YfError};

/// Fetches the income statement for `symbol` at the given granularity.
///
/// Rows are ordered top line first; periods are ordered most recent first. A symbol the
/// provider has no statement for yields an empty table rather than an error.
///
/// # Errors
///
/// Returns an error if the request fails, the provider answers with a non-success status,
/// or the response cannot be parsed.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn income_statement(
    client: &YfClient,
    symbol: &str,
    frequency: Frequency,
) -> Result<FinancialTable, YfError> {
    api::income_statement(client, symbol, frequency).await
}
