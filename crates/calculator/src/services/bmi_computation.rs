use crate::error::{Result, ensure_finite_output, ensure_positive};
use crate::models::BmiClassification;

/// BMI bounds of the healthy weight range
pub const HEALTHY_BMI_MIN: f64 = 18.5;
pub const HEALTHY_BMI_MAX: f64 = 24.9;

/// BMI Prime divides by the upper limit of the normal band
const BMI_PRIME_DIVISOR: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthyWeightRange {
    pub min_kg: f64,
    pub max_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    pub bmi: f64,
    pub classification: BmiClassification,
    pub bmi_prime: f64,
    pub ponderal_index: f64,
    pub healthy_weight_range: HealthyWeightRange,
}

fn height_m(height_cm: f64) -> Result<f64> {
    Ok(ensure_positive(height_cm, "Height")? / 100.0)
}

/// BMI = weight (kg) / height (m)²
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Result<f64> {
    let weight_kg = ensure_positive(weight_kg, "Weight")?;
    let height_m = height_m(height_cm)?;
    ensure_finite_output(weight_kg / height_m.powi(2), "BMI")
}

pub fn classify_bmi(bmi: f64) -> BmiClassification {
    BmiClassification::from_bmi(bmi)
}

pub fn compute_bmi_prime(bmi: f64) -> f64 {
    bmi / BMI_PRIME_DIVISOR
}

/// Ponderal index = weight (kg) / height (m)³
pub fn compute_ponderal_index(weight_kg: f64, height_cm: f64) -> Result<f64> {
    let weight_kg = ensure_positive(weight_kg, "Weight")?;
    let height_m = height_m(height_cm)?;
    ensure_finite_output(weight_kg / height_m.powi(3), "Ponderal index")
}

/// Weights that put someone of this height inside the healthy BMI band
pub fn compute_healthy_weight_range(height_cm: f64) -> Result<HealthyWeightRange> {
    let height_sq = height_m(height_cm)?.powi(2);
    Ok(HealthyWeightRange {
        min_kg: ensure_finite_output(HEALTHY_BMI_MIN * height_sq, "Healthy weight")?,
        max_kg: ensure_finite_output(HEALTHY_BMI_MAX * height_sq, "Healthy weight")?,
    })
}

pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<BmiResult> {
    let bmi = compute_bmi(weight_kg, height_cm)?;

    Ok(BmiResult {
        bmi,
        classification: classify_bmi(bmi),
        bmi_prime: compute_bmi_prime(bmi),
        ponderal_index: compute_ponderal_index(weight_kg, height_cm)?,
        healthy_weight_range: compute_healthy_weight_range(height_cm)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalculatorError;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_reference_bmi() {
        let result = calculate_bmi(70.0, 175.0).unwrap();
        assert_close(result.bmi, 22.857, 0.001);
        assert_eq!(result.classification, BmiClassification::Normal);
        assert_close(result.bmi_prime, 0.914, 0.001);
        assert_close(result.ponderal_index, 13.06, 0.01);
        assert_close(result.healthy_weight_range.min_kg, 56.656, 0.001);
        assert_close(result.healthy_weight_range.max_kg, 76.256, 0.001);
    }

    #[test]
    fn test_bmi_monotonic_in_weight() {
        for height in [150.0, 165.0, 180.0, 200.0] {
            let mut previous = 0.0;
            for weight in (30..=200).step_by(5) {
                let bmi = compute_bmi(f64::from(weight), height).unwrap();
                assert!(bmi > previous);
                previous = bmi;
            }
        }
    }

    #[test]
    fn test_bmi_decreasing_in_height() {
        for weight in [45.0, 70.0, 110.0] {
            let mut previous = f64::INFINITY;
            for height in (120..=220).step_by(5) {
                let bmi = compute_bmi(weight, f64::from(height)).unwrap();
                assert!(bmi < previous);
                previous = bmi;
            }
        }
    }

    #[test]
    fn test_bmi_prime_is_one_at_upper_normal_limit() {
        assert_close(compute_bmi_prime(25.0), 1.0, 1e-12);
        assert_close(compute_bmi_prime(18.5), 0.74, 1e-12);
    }

    #[test]
    fn test_healthy_range_brackets_normal_bmi() {
        let range = compute_healthy_weight_range(180.0).unwrap();
        let low = compute_bmi(range.min_kg, 180.0).unwrap();
        let high = compute_bmi(range.max_kg, 180.0).unwrap();
        assert_close(low, HEALTHY_BMI_MIN, 1e-9);
        assert_close(high, HEALTHY_BMI_MAX, 1e-9);
        assert_eq!(classify_bmi(low), BmiClassification::Normal);
        assert_eq!(classify_bmi(high), BmiClassification::Normal);
    }

    #[test]
    fn test_invalid_measurements() {
        assert!(matches!(
            compute_bmi(70.0, 0.0),
            Err(CalculatorError::Validation(_))
        ));
        assert!(compute_bmi(-70.0, 175.0).is_err());
        assert!(compute_ponderal_index(70.0, f64::NAN).is_err());
        assert!(compute_healthy_weight_range(-1.0).is_err());
    }

    #[test]
    fn test_extreme_inputs_are_errors_not_infinities() {
        // Height squared underflows to zero
        assert!(matches!(
            calculate_bmi(70.0, 1e-160),
            Err(CalculatorError::Validation(_))
        ));
        assert!(compute_ponderal_index(70.0, 1e-110).is_err());
        assert!(compute_bmi(1e308, 1.0).is_err());
        assert!(compute_healthy_weight_range(1e160).is_err());
    }
}
