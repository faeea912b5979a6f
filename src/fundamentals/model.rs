use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::YfError;

/// Name of the label field of a [`FinancialTable`].
pub const LABEL_FIELD: &str = "Line Item";

/// Reporting granularity of a financial statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// Fiscal-year periods.
    #[default]
    Annual,
    /// Fiscal-quarter periods.
    Quarterly,
}

impl Frequency {
    /// Prefix Yahoo puts in front of timeseries keys (`annualTotalRevenue`).
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarterly => "quarterly",
        }
    }

    /// Human-facing label, as used in titles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Annual => "Annual",
            Self::Quarterly => "Quarterly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One labelled row of a statement with a value per reporting period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Display name, e.g. `Total Revenue`.
    pub label: String,
    /// One value per period of the owning table, in the same order.
    pub values: Vec<Option<f64>>,
}

/// A financial statement laid out as line items by reporting period.
///
/// The schema is explicit: a label field plus an ordered list of periods. Every row
/// carries exactly one value slot per period, which [`FinancialTable::push_row`] enforces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinancialTable {
    label_field: String,
    periods: Vec<NaiveDate>,
    rows: Vec<LineItem>,
}

impl FinancialTable {
    /// Creates a table with the given periods and no rows.
    #[must_use]
    pub fn new(periods: Vec<NaiveDate>) -> Self {
        Self {
            label_field: LABEL_FIELD.to_string(),
            periods,
            rows: Vec::new(),
        }
    }

    /// Builds a table in one go from `(label, values)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`YfError::InvalidParams`] if a row's value count differs from the period count.
    pub fn from_rows<L, I>(periods: Vec<NaiveDate>, rows: I) -> Result<Self, YfError>
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, Vec<Option<f64>>)>,
    {
        let mut table = Self::new(periods);
        for (label, values) in rows {
            table.push_row(label, values)?;
        }
        Ok(table)
    }

    /// Appends a row.
    ///
    /// # Errors
    ///
    /// Returns [`YfError::InvalidParams`] if `values.len()` differs from the period count.
    pub fn push_row(
        &mut self,
        label: impl Into<String>,
        values: Vec<Option<f64>>,
    ) -> Result<(), YfError> {
        let label = label.into();
        if values.len() != self.periods.len() {
            return Err(YfError::InvalidParams(format!(
                "row '{label}' has {} values for {} periods",
                values.len(),
                self.periods.len()
            )));
        }
        self.rows.push(LineItem { label, values });
        Ok(())
    }

    #[must_use]
    pub fn label_field(&self) -> &str {
        &self.label_field
    }

    /// Reporting periods, most recent first.
    #[must_use]
    pub fn periods(&self) -> &[NaiveDate] {
        &self.periods
    }

    #[must_use]
    pub fn rows(&self) -> &[LineItem] {
        &self.rows
    }

    /// Looks up a row by its label.
    #[must_use]
    pub fn row(&self, label: &str) -> Option<&LineItem> {
        self.rows.iter().find(|r| r.label == label)
    }

    #[must_use]
    pub fn line_item_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn period_count(&self) -> usize {
        self.periods.len()
    }

    /// A table with no line items carries no data, whatever its periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
