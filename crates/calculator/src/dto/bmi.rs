use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::common::{Measurements, MetricMeasurements, round_dp};
use crate::error::Result;
use crate::models::{BmiCategory, BmiClassification, Sex, UnitSystem};
use crate::services::BmiResult;
use crate::services::unit_conversion::kg_to_lbs;

/// Age and sex are accepted for form parity but do not affect adult BMI
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct BmiRequest {
    #[validate(range(min = 2, max = 120, message = "Age must be between 2 and 120 years."))]
    pub age: Option<u32>,

    #[serde(alias = "gender")]
    pub sex: Option<Sex>,

    #[serde(flatten)]
    #[validate(nested)]
    pub measurements: Measurements,
}

impl BmiRequest {
    pub fn to_metric(&self) -> Result<MetricMeasurements> {
        self.measurements.to_metric()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BmiResponse {
    pub bmi: f64,
    pub classification: BmiClassification,
    pub classification_label: String,
    pub category: BmiCategory,
    pub bmi_prime: f64,
    pub ponderal_index: f64,
    pub min_healthy_weight_kg: f64,
    pub max_healthy_weight_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_healthy_weight_lbs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_healthy_weight_lbs: Option<f64>,
    pub unit_system: UnitSystem,
}

impl BmiResponse {
    /// Rounded response; pound bounds are only reported for US input
    pub fn new(result: BmiResult, unit_system: UnitSystem) -> Self {
        let range = result.healthy_weight_range;
        let (min_lbs, max_lbs) = match unit_system {
            UnitSystem::Us => (
                Some(round_dp(kg_to_lbs(range.min_kg), 1)),
                Some(round_dp(kg_to_lbs(range.max_kg), 1)),
            ),
            UnitSystem::Metric => (None, None),
        };

        Self {
            bmi: round_dp(result.bmi, 1),
            classification: result.classification,
            classification_label: result.classification.label().to_string(),
            category: result.classification.category(),
            bmi_prime: round_dp(result.bmi_prime, 2),
            ponderal_index: round_dp(result.ponderal_index, 1),
            min_healthy_weight_kg: round_dp(range.min_kg, 1),
            max_healthy_weight_kg: round_dp(range.max_kg, 1),
            min_healthy_weight_lbs: min_lbs,
            max_healthy_weight_lbs: max_lbs,
            unit_system,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::calculate_bmi;

    #[test]
    fn test_metric_response() {
        let result = calculate_bmi(70.0, 175.0).unwrap();
        let response = BmiResponse::new(result, UnitSystem::Metric);

        assert_eq!(response.bmi, 22.9);
        assert_eq!(response.classification, BmiClassification::Normal);
        assert_eq!(response.classification_label, "Normal");
        assert_eq!(response.bmi_prime, 0.91);
        assert_eq!(response.ponderal_index, 13.1);
        assert_eq!(response.min_healthy_weight_kg, 56.7);
        assert_eq!(response.max_healthy_weight_kg, 76.3);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("min_healthy_weight_lbs").is_none());
        assert_eq!(json["category"], "normal");
    }

    #[test]
    fn test_us_response_includes_pounds() {
        let request: BmiRequest = serde_json::from_str(
            r#"{"unit_system": "us", "feet": 5, "inches": 9, "weight_lbs": 154}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());

        let metric = request.to_metric().unwrap();
        let result = calculate_bmi(metric.weight_kg, metric.height_cm).unwrap();
        let response = BmiResponse::new(result, request.measurements.unit_system);

        assert_eq!(response.bmi, 22.7);
        let min_lbs = response.min_healthy_weight_lbs.unwrap();
        let max_lbs = response.max_healthy_weight_lbs.unwrap();
        assert!(min_lbs < 154.0 && 154.0 < max_lbs);
    }

    #[test]
    fn test_age_is_optional_but_bounded() {
        let request: BmiRequest = serde_json::from_str(
            r#"{"age": 150, "unit_system": "metric", "height_cm": 175, "weight_kg": 70}"#,
        )
        .unwrap();
        assert!(request.validate().is_err());
    }
}
