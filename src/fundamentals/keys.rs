/// Income-statement timeseries keys, in statement order (top line first).
pub(crate) const INCOME_KEYS: &[&str] = &[
    "TotalRevenue",
    "OperatingRevenue",
    "CostOfRevenue",
    "GrossProfit",
    "OperatingExpense",
    "SellingGeneralAndAdministration",
    "ResearchAndDevelopment",
    "OperatingIncome",
    "NetNonOperatingInterestIncomeExpense",
    "InterestIncomeNonOperating",
    "InterestExpenseNonOperating",
    "OtherIncomeExpense",
    "OtherNonOperatingIncomeExpenses",
    "PretaxIncome",
    "TaxProvision",
    "NetIncomeCommonStockholders",
    "NetIncome",
    "NetIncomeIncludingNoncontrollingInterests",
    "NetIncomeContinuousOperations",
    "DilutedNIAvailtoComStockholders",
    "BasicEPS",
    "DilutedEPS",
    "BasicAverageShares",
    "DilutedAverageShares",
    "TotalOperatingIncomeAsReported",
    "TotalExpenses",
    "NetIncomeFromContinuingAndDiscontinuedOperation",
    "NormalizedIncome",
    "InterestIncome",
    "InterestExpense",
    "NetInterestIncome",
    "EBIT",
    "EBITDA",
    "ReconciledCostOfRevenue",
    "ReconciledDepreciation",
    "NetIncomeFromContinuingOperationNetMinorityInterest",
    "TotalUnusualItemsExcludingGoodwill",
    "TotalUnusualItems",
    "NormalizedEBITDA",
    "TaxRateForCalcs",
    "TaxEffectOfUnusualItems",
];

/// Splits a camel-case key into words, keeping runs of capitals together.
///
/// `TotalRevenue` → `Total Revenue`, `BasicEPS` → `Basic EPS`,
/// `DilutedNIAvailtoComStockholders` → `Diluted NI Availto Com Stockholders`.
pub(crate) fn humanize_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 8);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                out.push(' ');
            }
        }
        out.push(c);
    }

    out
}
