use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::common::round_dp;
use crate::error::Result;
use crate::models::EnergyUnit;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct EnergyConversionRequest {
    pub value: f64,

    #[validate(length(min = 1, message = "from_unit is required"))]
    pub from_unit: String,

    #[validate(length(min = 1, message = "to_unit is required"))]
    pub to_unit: String,
}

impl EnergyConversionRequest {
    pub fn units(&self) -> Result<(EnergyUnit, EnergyUnit)> {
        Ok((
            EnergyUnit::try_from(self.from_unit.as_str())?,
            EnergyUnit::try_from(self.to_unit.as_str())?,
        ))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EnergyConversionResponse {
    pub original_value: f64,
    pub converted_value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

impl EnergyConversionResponse {
    /// Echoes the units as the caller spelled them
    pub fn new(request: &EnergyConversionRequest, converted_value: f64) -> Self {
        Self {
            original_value: request.value,
            converted_value: round_dp(converted_value, 4),
            from_unit: request.from_unit.clone(),
            to_unit: request.to_unit.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalculatorError;

    fn request(from_unit: &str, to_unit: &str) -> EnergyConversionRequest {
        EnergyConversionRequest {
            value: 100.0,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
        }
    }

    #[test]
    fn test_units_parse_form_names() {
        let (from, to) = request("cal_nutritional", "kilojoules").units().unwrap();
        assert_eq!(from, EnergyUnit::Kilocalorie);
        assert_eq!(to, EnergyUnit::Kilojoule);
    }

    #[test]
    fn test_unknown_unit() {
        assert!(matches!(
            request("kcal", "erg").units(),
            Err(CalculatorError::UnsupportedUnit(_))
        ));
    }

    #[test]
    fn test_empty_unit_fails_validation() {
        assert!(request("", "kj").validate().is_err());
        assert!(request("kcal", "kj").validate().is_ok());
    }

    #[test]
    fn test_response_rounds_to_four_places() {
        let response = EnergyConversionResponse::new(&request("kj", "kcal"), 23.900573613766);
        assert_eq!(response.converted_value, 23.9006);
        assert_eq!(response.original_value, 100.0);
        assert_eq!(response.from_unit, "kj");
    }
}
