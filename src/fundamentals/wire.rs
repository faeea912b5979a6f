use std::collections::BTreeMap;

use serde::Deserialize;

use crate::core::wire::RawNum;

/* ---------------- Serde mapping (only what we need) ---------------- */

#[derive(Deserialize)]
pub(crate) struct TimeseriesEnvelope {
    pub(crate) timeseries: Option<TimeseriesResult>,
}

#[derive(Deserialize)]
pub(crate) struct TimeseriesResult {
    pub(crate) result: Option<Vec<TimeseriesData>>,
    pub(crate) error: Option<serde_json::Value>,
}

/// One requested key. Yahoo puts the values under a field named after the key itself
/// (`"annualTotalRevenue": [...]`), so everything but `meta`/`timestamp` is collected here.
#[derive(Deserialize)]
pub(crate) struct TimeseriesData {
    #[allow(dead_code)]
    pub(crate) meta: Option<serde_json::Value>,
    pub(crate) timestamp: Option<Vec<i64>>,
    #[serde(flatten)]
    pub(crate) values: BTreeMap<String, serde_json::Value>,
}

#[derive(Deserialize)]
pub(crate) struct TimeseriesValue {
    #[serde(rename = "asOfDate")]
    pub(crate) as_of_date: Option<String>,
    #[serde(rename = "reportedValue")]
    pub(crate) reported_value: Option<RawNum<f64>>,
}
