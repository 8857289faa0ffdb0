use crate::utils::error::{RealtyError, Result};
use chrono::NaiveDate;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(RealtyError::validation(field_name, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(RealtyError::validation(field_name, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RealtyError::validation(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Returns the trimmed value, rejecting blank input.
pub fn require_text<'a>(field_name: &str, value: &'a str) -> Result<&'a str> {
    validate_non_empty_string(field_name, value)?;
    Ok(value.trim())
}

/// Names of the fields whose values are blank, in the order given.
pub fn blank_fields<'a>(fields: &[(&'a str, &str)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

fn parse_number(field_name: &str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RealtyError::validation(field_name, "A number is required"));
    }

    let value: f64 = trimmed.parse().map_err(|_| {
        RealtyError::validation(field_name, format!("'{}' is not a valid number", trimmed))
    })?;

    // `f64::from_str` accepts "inf" and "NaN".
    if !value.is_finite() {
        return Err(RealtyError::validation(
            field_name,
            format!("'{}' is not a finite number", trimmed),
        ));
    }

    Ok(value)
}

pub fn parse_non_negative(field_name: &str, raw: &str) -> Result<f64> {
    let value = parse_number(field_name, raw)?;
    if value < 0.0 {
        return Err(RealtyError::validation(field_name, "Value cannot be negative"));
    }
    Ok(value)
}

pub fn parse_positive(field_name: &str, raw: &str) -> Result<f64> {
    let value = parse_number(field_name, raw)?;
    if value <= 0.0 {
        return Err(RealtyError::validation(field_name, "Value must be greater than zero"));
    }
    Ok(value)
}

pub fn parse_positive_int(field_name: &str, raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    let value: u32 = trimmed.parse().map_err(|_| {
        RealtyError::validation(
            field_name,
            format!("'{}' is not a whole number of months", trimmed),
        )
    })?;
    if value == 0 {
        return Err(RealtyError::validation(field_name, "Value must be at least 1"));
    }
    Ok(value)
}

pub fn parse_iso_date(field_name: &str, raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        RealtyError::validation(
            field_name,
            format!("'{}' is not a date in YYYY-MM-DD format", trimmed),
        )
    })
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RealtyError::validation(
            field_name,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data_dir", "./data").is_ok());
        assert!(validate_path("data_dir", "").is_err());
        assert!(validate_path("data_dir", "   ").is_err());
        assert!(validate_path("data_dir", "bad\0path").is_err());
    }

    #[test]
    fn test_parse_non_negative() {
        assert_eq!(parse_non_negative("area", " 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_non_negative("area", "0").unwrap(), 0.0);
        assert!(parse_non_negative("area", "").is_err());
        assert!(parse_non_negative("area", "abc").is_err());
        assert!(parse_non_negative("area", "-1").is_err());
        assert!(parse_non_negative("area", "inf").is_err());
        assert!(parse_non_negative("area", "NaN").is_err());
        assert!(parse_non_negative("area", "1,000").is_err());
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("rent", "15000").unwrap(), 15000.0);
        assert!(parse_positive("rent", "0").is_err());
    }

    #[test]
    fn test_parse_positive_int() {
        assert_eq!(parse_positive_int("term", " 11 ").unwrap(), 11);
        assert!(parse_positive_int("term", "0").is_err());
        assert!(parse_positive_int("term", "1.5").is_err());
        assert!(parse_positive_int("term", "-3").is_err());
    }

    #[test]
    fn test_parse_iso_date() {
        let date = parse_iso_date("start_date", "2025-03-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert!(parse_iso_date("start_date", "01/03/2025").is_err());
        assert!(parse_iso_date("start_date", "2025-02-30").is_err());
    }

    #[test]
    fn test_blank_fields() {
        let fields = [("name", "Asha"), ("phone", "  "), ("locality", "")];
        assert_eq!(blank_fields(&fields), vec!["phone", "locality"]);
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("rebate", 50.0, 0.0, 100.0).is_ok());
        assert!(validate_range("rebate", 100.5, 0.0, 100.0).is_err());
    }
}
