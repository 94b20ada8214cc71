//! Validation utilities for the Mineral LCA Platform
//!
//! The scoring engine assumes pre-validated input. These checks run on the
//! write path so out-of-range values never reach storage.

use crate::scoring::ScoringError;

// ============================================================================
// Range Checks
// ============================================================================

fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<(), ScoringError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ScoringError::InvalidRange {
            field: field.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Validate a percentage in [0, 100]
pub fn validate_percentage(field: &str, value: f64) -> Result<(), ScoringError> {
    check_range(field, value, 0.0, 100.0)
}

/// Validate a quantity that must not be negative
pub fn validate_non_negative(field: &str, value: f64) -> Result<(), ScoringError> {
    check_range(field, value, 0.0, f64::MAX)
}

/// Validate a quantity that must be strictly positive
pub fn validate_positive(field: &str, value: f64) -> Result<(), ScoringError> {
    check_range(field, value, f64::MIN_POSITIVE, f64::MAX)
}

// ============================================================================
// Circularity Validations
// ============================================================================

/// Validate MCI score in [0, 1]
pub fn validate_mci_score(value: f64) -> Result<(), ScoringError> {
    check_range("mci_score", value, 0.0, 1.0)
}

/// Validate resource efficiency score in [0, 10]
pub fn validate_resource_efficiency(value: f64) -> Result<(), ScoringError> {
    check_range("resource_efficiency_score", value, 0.0, 10.0)
}

// ============================================================================
// Scenario Validations
// ============================================================================

/// Validate CO2 reduction in [0, 100]
pub fn validate_co2_reduction(value: f64) -> Result<(), ScoringError> {
    check_range("co2_reduction_pct", value, 0.0, 100.0)
}

/// Validate cost difference in [-100, 1000]
pub fn validate_cost_difference(value: f64) -> Result<(), ScoringError> {
    check_range("cost_difference_pct", value, -100.0, 1000.0)
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate a required display name
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name is required");
    }
    if trimmed.chars().count() > 200 {
        return Err("Name must be at most 200 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_percentage() {
        assert!(validate_percentage("recycled_content_pct", 0.0).is_ok());
        assert!(validate_percentage("recycled_content_pct", 100.0).is_ok());
        assert!(validate_percentage("recycled_content_pct", -0.1).is_err());
        assert!(validate_percentage("recycled_content_pct", 100.1).is_err());
        assert!(validate_percentage("recycled_content_pct", f64::NAN).is_err());
    }

    #[test]
    fn test_invalid_range_reports_field() {
        let err = validate_mci_score(1.5).unwrap_err();
        assert_eq!(
            err,
            ScoringError::InvalidRange {
                field: "mci_score".to_string(),
                value: 1.5,
                min: 0.0,
                max: 1.0,
            }
        );
        assert!(!err.is_neutral());
    }

    #[test]
    fn test_validate_resource_efficiency() {
        assert!(validate_resource_efficiency(10.0).is_ok());
        assert!(validate_resource_efficiency(10.5).is_err());
    }

    #[test]
    fn test_validate_cost_difference() {
        assert!(validate_cost_difference(-100.0).is_ok());
        assert!(validate_cost_difference(1000.0).is_ok());
        assert!(validate_cost_difference(-101.0).is_err());
        assert!(validate_cost_difference(1000.5).is_err());
    }

    #[test]
    fn test_validate_co2_reduction() {
        assert!(validate_co2_reduction(25.0).is_ok());
        assert!(validate_co2_reduction(-5.0).is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("quantity_tons", 0.5).is_ok());
        assert!(validate_positive("quantity_tons", 0.0).is_err());
        assert!(validate_non_negative("total_energy_kwh", 0.0).is_ok());
        assert!(validate_non_negative("total_energy_kwh", -1.0).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Smelter line 2").is_ok());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(201)).is_err());
    }
}
