use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::{BTreeMap, BTreeSet};
use url::Url;

use crate::core::{YfClient, YfError, net, wire::from_raw};

use super::keys::{INCOME_KEYS, humanize_key};
use super::wire::{TimeseriesEnvelope, TimeseriesValue};
use super::{FinancialTable, Frequency};

/// Per-key values, keyed by period end.
type KeyedValues = BTreeMap<&'static str, BTreeMap<NaiveDate, f64>>;

pub(super) async fn income_statement(
    client: &YfClient,
    symbol: &str,
    frequency: Frequency,
) -> Result<FinancialTable, YfError> {
    let prefix = frequency.prefix();
    let type_str = INCOME_KEYS
        .iter()
        .map(|k| format!("{prefix}{k}"))
        .collect::<Vec<_>>()
        .join(",");

    let now = Utc::now();
    let end_ts = now.timestamp();
    let start_ts = now
        .checked_sub_signed(Duration::days(365 * 5))
        .map_or(0, |dt| dt.timestamp());

    let mut url = timeseries_url(client.base_timeseries(), symbol)?;
    url.query_pairs_mut()
        .append_pair("symbol", symbol)
        .append_pair("type", &type_str)
        .append_pair("period1", &start_ts.to_string())
        .append_pair("period2", &end_ts.to_string());

    client.ensure_credentials().await?;
    if let Some(crumb) = client.crumb().await {
        url.query_pairs_mut().append_pair("crumb", &crumb);
    }

    let resp = client.http().get(url).send().await?;
    let body = net::get_text(resp, &format!("timeseries_income_{prefix}")).await?;

    parse_income_statement(&body, frequency)
}

/// Appends `symbol` to `base` as a single, percent-encoded path segment.
fn timeseries_url(base: &Url, symbol: &str) -> Result<Url, YfError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| YfError::InvalidParams(format!("cannot append a symbol to {base}")))?
        .pop_if_empty()
        .push(symbol);
    Ok(url)
}

/// Turns a timeseries envelope into a table: rows follow [`INCOME_KEYS`], periods run
/// most recent first.
pub(super) fn parse_income_statement(
    body: &str,
    frequency: Frequency,
) -> Result<FinancialTable, YfError> {
    let envelope: TimeseriesEnvelope = serde_json::from_str(body)?;
    let Some(timeseries) = envelope.timeseries else {
        return Ok(FinancialTable::new(Vec::new()));
    };

    if let Some(err) = timeseries.error.filter(|e| !e.is_null()) {
        return Err(YfError::Data(format!("timeseries error: {err}")));
    }

    let prefix = frequency.prefix();
    let mut by_key: KeyedValues = BTreeMap::new();

    for item in timeseries.result.unwrap_or_default() {
        let timestamps = item.timestamp.unwrap_or_default();
        for (field, values_json) in item.values {
            let Some(key) = field
                .strip_prefix(prefix)
                .and_then(|k| INCOME_KEYS.iter().copied().find(|known| *known == k))
            else {
                continue;
            };

            let values: Vec<Option<TimeseriesValue>> = serde_json::from_value(values_json)?;
            for (i, value) in values.into_iter().enumerate() {
                let Some(value) = value else { continue };
                let Some(raw) = from_raw(value.reported_value) else {
                    continue;
                };
                let Some(period) = period_end(value.as_of_date.as_deref(), timestamps.get(i))
                else {
                    continue;
                };
                by_key.entry(key).or_default().insert(period, raw);
            }
        }
    }

    let periods: Vec<NaiveDate> = by_key
        .values()
        .flat_map(BTreeMap::keys)
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .collect();

    let mut table = FinancialTable::new(periods.clone());
    for key in INCOME_KEYS {
        let Some(series) = by_key.get(key) else {
            continue;
        };
        let values = periods.iter().map(|p| series.get(p).copied()).collect();
        table.push_row(humanize_key(key), values)?;
    }

    Ok(table)
}

fn period_end(as_of_date: Option<&str>, timestamp: Option<&i64>) -> Option<NaiveDate> {
    as_of_date
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .or_else(|| {
            timestamp
                .and_then(|ts| DateTime::from_timestamp(*ts, 0))
                .map(|dt| dt.date_naive())
        })
}
