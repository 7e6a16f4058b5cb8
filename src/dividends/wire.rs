use crate::core::IressError;
use crate::core::soap::{SoapRow, SoapTable};

use super::model::DividendRow;

fn map_row(row: &SoapRow) -> Result<DividendRow, IressError> {
    Ok(DividendRow {
        ex_dividend_date: row.date("ExDividendDate")?,
        dividend_amount: row.f64_opt("DividendAmount")?,
        adjusted_dividend_amount: row.f64_opt("AdjustedDividendAmount")?,
        franked_percent: row.f64_opt("FrankedPercent")?,
        payable_date: row.date_opt("PayableDate")?,
        books_closing_date: row.date_opt("BooksClosingDate")?,
        dividend_type: row.string("DividendType"),
        share_rate: row.f64_opt("ShareRate")?,
        dividend_yield: row.f64_opt("DividendYield")?,
        drp_price: row.f64_opt("DRPPrice")?,
        dividend_description: row.string("DividendDescription"),
        declaration_date: row.date_opt("DeclarationDate")?,
        stc_credits_per_share: row.f64_opt("STCCreditsPerShare")?,
    })
}

pub(super) fn map_response(table: SoapTable) -> Result<Vec<DividendRow>, IressError> {
    let mut rows = table
        .rows
        .iter()
        .map(map_row)
        .collect::<Result<Vec<_>, _>>()?;
    rows.sort_by_key(|r| r.ex_dividend_date);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_is_an_empty_vec() {
        let rows = map_response(SoapTable::default()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn maps_typed_columns() {
        let mut table = SoapTable::default();
        table.rows.push(SoapRow::from_cells([
            ("ExDividendDate", "2021-02-25"),
            ("DividendAmount", "0.47"),
            ("FrankedPercent", "100"),
            ("DividendType", "Interim"),
        ]));
        let rows = map_response(table).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].dividend_amount, Some(0.47));
        assert_eq!(rows[0].franked_percent, Some(100.0));
        assert_eq!(rows[0].dividend_type.as_deref(), Some("Interim"));
        assert_eq!(rows[0].payable_date, None);
    }
}
