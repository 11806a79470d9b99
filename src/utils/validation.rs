use crate::utils::error::{PayoutError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_percentage(field_name: &str, value: f64) -> Result<()> {
    validate_range(field_name, value, 0.0, 100.0)
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PayoutError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite, non-negative number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PayoutError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be greater than zero".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PayoutError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Names must be non-blank and unique ignoring ASCII case.
pub fn validate_name_list(field_name: &str, names: &[String], allow_empty: bool) -> Result<()> {
    if names.is_empty() && !allow_empty {
        return Err(PayoutError::ConfigValidationError {
            field: field_name.to_string(),
            message: "At least one name is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for name in names {
        validate_non_empty_string(field_name, name)?;
        if !seen.insert(name.to_ascii_lowercase()) {
            return Err(PayoutError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.clone(),
                reason: "Duplicate name".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN fails both comparisons, so test for containment rather than exclusion
    if !(value >= min && value <= max) {
        return Err(PayoutError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_percentage() {
        assert!(validate_percentage("fees.transaction_percent", 2.9).is_ok());
        assert!(validate_percentage("fees.transaction_percent", 0.0).is_ok());
        assert!(validate_percentage("fees.transaction_percent", 100.0).is_ok());
        assert!(validate_percentage("fees.transaction_percent", -0.1).is_err());
        assert!(validate_percentage("fees.transaction_percent", 100.5).is_err());
        assert!(validate_percentage("fees.transaction_percent", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("tolerance", 0.05).is_ok());
        assert!(validate_positive("tolerance", 0.0).is_err());
        assert!(validate_non_negative("card_fee", 0.0).is_ok());
        assert!(validate_non_negative("card_fee", -0.3).is_err());
    }

    #[test]
    fn test_validate_name_list() {
        let names = vec!["Jarett".to_string()];
        assert!(validate_name_list("management.team", &names, false).is_ok());
        assert!(validate_name_list("management.team", &[], false).is_err());
        assert!(validate_name_list("donations.organizations", &[], true).is_ok());

        let dupes = vec!["Jarett".to_string(), "jarett".to_string()];
        assert!(validate_name_list("management.team", &dupes, false).is_err());

        let blank = vec!["  ".to_string()];
        assert!(validate_name_list("management.team", &blank, false).is_err());
    }
}
