//! Calendar date handling
//!
//! Claim and exam dates are calendar dates with no time component. They are
//! exchanged in ISO form (`YYYY-MM-DD`) both in the record files and at the
//! dispatcher prompts.

use chrono::NaiveDate;
use thiserror::Error;

/// The single accepted date layout
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Temporal errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Parses an ISO `YYYY-MM-DD` date
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, TemporalError> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT)
        .map_err(|_| TemporalError::InvalidDate(value.to_string()))
}

/// Formats a date as `YYYY-MM-DD`
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Formats an optional date, writing an absent date as an empty string
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_iso_date).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        let date = parse_iso_date("2024-02-29").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_rejects_other_layouts() {
        assert!(parse_iso_date("29/02/2024").is_err());
        assert!(parse_iso_date("2023-02-29").is_err());
        assert!(parse_iso_date("").is_err());
    }

    #[test]
    fn test_format_pads_components() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_iso_date(date), "2024-03-05");
        assert_eq!(format_optional_date(None), "");
    }
}
