use chrono::{DateTime, Datelike, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

use crate::shared::constants::MIN_START_WORK_YEAR;

lazy_static! {
    /// Regex for validating username fields
    /// Must start with letter or underscore and contain only alphanumeric characters and underscores
    /// - Valid: "john_doe", "user123", "_admin", "JohnDoe"
    /// - Invalid: "123user", "-user", "user-name", "user name"
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();

    /// International dialling prefix, e.g. "+94", "86", "+1-268"
    pub static ref AREA_CODE_REGEX: Regex = Regex::new(r"^\+?[0-9]{1,4}(-[0-9]{1,4})?$").unwrap();

    /// City abbreviation: one to three letters
    pub static ref ABBREVIATION_REGEX: Regex = Regex::new(r"^[A-Za-z]{1,3}$").unwrap();

    /// Four digit year, used for a vehicle's first year of service
    pub static ref YEAR_REGEX: Regex = Regex::new(r"^[0-9]{4}$").unwrap();

    /// Vehicle license plate: uppercase letters, digits, spaces and hyphens
    /// - Valid: "WP-KA 1234", "CAB1234"
    /// - Invalid: "wp-ka", "AB_12"
    pub static ref LICENSE_REGEX: Regex = Regex::new(r"^[A-Z0-9][A-Z0-9 \-]*$").unwrap();

    /// SWIFT/BIC: 6 letters, 2 alphanumerics, optional 3 alphanumeric branch code
    pub static ref SWIFT_CODE_REGEX: Regex =
        Regex::new(r"^[A-Z]{6}[A-Z0-9]{2}([A-Z0-9]{3})?$").unwrap();
}

/// Ratios (commission, discounts) must lie within [0, 1]
pub fn validate_ratio(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO || *value > Decimal::ONE {
        let mut err = ValidationError::new("ratio");
        err.message = Some("must be between 0 and 1".into());
        return Err(err);
    }
    Ok(())
}

/// Prices and fees cannot be negative
pub fn validate_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut err = ValidationError::new("amount");
        err.message = Some("must not be negative".into());
        return Err(err);
    }
    Ok(())
}

/// Working start year between 1900 and the current year
pub fn validate_start_work(year: impl std::borrow::Borrow<i16>) -> Result<(), ValidationError> {
    let current = Utc::now().year();
    let year = i32::from(*year.borrow());
    if year < MIN_START_WORK_YEAR || year > current {
        let mut err = ValidationError::new("start_work");
        err.message = Some(format!("must be between {} and {}", MIN_START_WORK_YEAR, current).into());
        return Err(err);
    }
    Ok(())
}

/// Validity periods must not end before they start
pub fn validate_period(
    start_time: &DateTime<Utc>,
    end_time: &DateTime<Utc>,
) -> Result<(), ValidationError> {
    if end_time < start_time {
        let mut err = ValidationError::new("period");
        err.message = Some(format!("end_time {} is before start_time {}", end_time, start_time).into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::str::FromStr;

    #[test]
    fn test_username_regex() {
        assert!(USERNAME_REGEX.is_match("john_doe"));
        assert!(USERNAME_REGEX.is_match("_admin"));
        assert!(!USERNAME_REGEX.is_match("123user"));
        assert!(!USERNAME_REGEX.is_match("user name"));
    }

    #[test]
    fn test_area_code_regex() {
        assert!(AREA_CODE_REGEX.is_match("+94"));
        assert!(AREA_CODE_REGEX.is_match("86"));
        assert!(AREA_CODE_REGEX.is_match("+1-268"));
        assert!(!AREA_CODE_REGEX.is_match("+"));
        assert!(!AREA_CODE_REGEX.is_match("12345"));
        assert!(!AREA_CODE_REGEX.is_match("abc"));
    }

    #[test]
    fn test_abbreviation_and_year_regex() {
        assert!(ABBREVIATION_REGEX.is_match("CMB"));
        assert!(ABBREVIATION_REGEX.is_match("bj"));
        assert!(!ABBREVIATION_REGEX.is_match("ABCD"));
        assert!(!ABBREVIATION_REGEX.is_match("A1"));

        assert!(YEAR_REGEX.is_match("2015"));
        assert!(!YEAR_REGEX.is_match("15"));
        assert!(!YEAR_REGEX.is_match("20a5"));
    }

    #[test]
    fn test_license_regex() {
        assert!(LICENSE_REGEX.is_match("WP-KA 1234"));
        assert!(LICENSE_REGEX.is_match("CAB1234"));
        assert!(!LICENSE_REGEX.is_match("wp-ka"));
        assert!(!LICENSE_REGEX.is_match("AB_12"));
        assert!(!LICENSE_REGEX.is_match("-AB"));
    }

    #[test]
    fn test_swift_code_regex() {
        assert!(SWIFT_CODE_REGEX.is_match("BOCELKLX"));
        assert!(SWIFT_CODE_REGEX.is_match("BKCHCNBJ110"));
        assert!(!SWIFT_CODE_REGEX.is_match("BOCELK"));
        assert!(!SWIFT_CODE_REGEX.is_match("bocelklx"));
    }

    #[test]
    fn test_validate_ratio() {
        assert!(validate_ratio(&Decimal::ZERO).is_ok());
        assert!(validate_ratio(&Decimal::ONE).is_ok());
        assert!(validate_ratio(&Decimal::from_str("0.35").unwrap()).is_ok());
        assert!(validate_ratio(&Decimal::from_str("1.01").unwrap()).is_err());
        assert!(validate_ratio(&Decimal::from_str("-0.1").unwrap()).is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(&Decimal::ZERO).is_ok());
        assert!(validate_amount(&Decimal::from_str("12.500").unwrap()).is_ok());
        assert!(validate_amount(&Decimal::from_str("-3").unwrap()).is_err());
    }

    #[test]
    fn test_validate_start_work() {
        assert!(validate_start_work(&1900).is_ok());
        assert!(validate_start_work(&2010).is_ok());
        assert!(validate_start_work(&1899).is_err());
        let next_year = (Utc::now().year() + 1) as i16;
        assert!(validate_start_work(&next_year).is_err());
    }

    #[test]
    fn test_validate_period() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = start + Duration::days(30);
        assert!(validate_period(&start, &end).is_ok());
        assert!(validate_period(&start, &start).is_ok());
        let err = validate_period(&end, &start).unwrap_err();
        assert_eq!(err.code, "period");
    }
}
