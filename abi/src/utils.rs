use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` calendar date coming off the wire.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| {
            Error::InvalidArgument(format!("{} must be a YYYY-MM-DD date, got {:?}", field, value))
        })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a decimal amount such as `"100.00"`.
pub fn parse_decimal(field: &str, value: &str) -> Result<Decimal, Error> {
    value
        .trim()
        .parse::<Decimal>()
        .map_err(|_| {
            Error::InvalidArgument(format!("{} must be a decimal number, got {:?}", field, value))
        })
}

/// Largest amount a `NUMERIC(12, 2)` column holds.
pub fn max_amount() -> Decimal {
    Decimal::new(999_999_999_999, 2)
}

/// Empty wire strings stand for "not set".
pub fn non_empty(value: String) -> Option<String> {
    let value = value.trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_should_parse_and_format() {
        let date = parse_date("start", "2024-06-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(format_date(date), "2024-06-01");
    }

    #[test]
    fn malformed_date_should_be_rejected() {
        let err = parse_date("start", "06/01/2024").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn decimal_should_parse() {
        assert_eq!(
            parse_decimal("price", "100.50").unwrap(),
            Decimal::new(10050, 2)
        );
        assert!(parse_decimal("price", "a lot").is_err());
    }
}
