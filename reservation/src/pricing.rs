use abi::{max_amount, Error};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Whole nights in `[start, end)`. Must be at least one.
pub fn nights(start: NaiveDate, end: NaiveDate) -> Result<i64, Error> {
    let n = (end - start).num_days();
    if n < 1 {
        return Err(Error::InvalidDateRange { start, end });
    }
    Ok(n)
}

/// Flat nightly rate times the number of nights. Totals that would not fit
/// the stored `NUMERIC(12, 2)` are rejected.
pub fn total_price(
    nightly_price: Decimal,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Decimal, Error> {
    let nights = nights(start, end)?;
    nightly_price
        .checked_mul(Decimal::from(nights))
        .filter(|total| *total <= max_amount())
        .ok_or_else(|| {
            Error::InvalidArgument(format!(
                "total for {} nights at {} exceeds {}",
                nights,
                nightly_price,
                max_amount()
            ))
        })
}
