use crate::core::IressError;
use crate::core::soap::{SoapRow, SoapTable};

use super::model::MarketCapRow;

fn map_row(row: &SoapRow) -> Result<MarketCapRow, IressError> {
    Ok(MarketCapRow {
        date: row.date("MarketCapitalizationDate")?,
        security_code: row.require("SecurityCode")?.to_string(),
        exchange: row.require("Exchange")?.to_string(),
        gics_code: row.i32_opt("GICSCode")?,
        index_code: row.string("IndexCode"),
        index_factor: row.f64_opt("IndexFactor")?,
        index_points: row.f64_opt("IndexPoints")?,
        shares_on_issue: row.f64_opt("SharesOnIssue")?,
        market_capitalization_start_of_day: row.f64_opt("MarketCapitalizationStartOfDay")?,
        market_capitalization_end_of_day: row.f64_opt("MarketCapitalizationEndOfDay")?,
        market_weight_start_of_day: row.f64_opt("MarketWeightStartOfDay")?,
        market_weight_end_of_day: row.f64_opt("MarketWeightEndOfDay")?,
        index_price_start_of_day: row.f64_opt("IndexPriceStartOfDay")?,
        index_price_end_of_day: row.f64_opt("IndexPriceEndOfDay")?,
    })
}

pub(super) fn map_response(table: SoapTable) -> Result<Vec<MarketCapRow>, IressError> {
    let mut rows = table
        .rows
        .iter()
        .map(map_row)
        .collect::<Result<Vec<_>, _>>()?;
    rows.sort_by_key(|r| r.date);
    Ok(rows)
}
