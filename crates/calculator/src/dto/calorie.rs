use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::common::Measurements;
use crate::error::Result;
use crate::models::{ActivityLevel, BmrFormula, PersonProfile, ResultsUnit, Sex};
use crate::services::{CalorieResult, WeightManagement};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CalorieRequest {
    #[validate(range(min = 15, max = 80, message = "Age must be between 15 and 80 years."))]
    pub age: u32,

    #[serde(alias = "gender")]
    pub sex: Sex,

    #[serde(flatten)]
    #[validate(nested)]
    pub measurements: Measurements,

    #[serde(default)]
    pub activity_level: ActivityLevel,

    #[serde(default)]
    pub bmr_formula: BmrFormula,

    #[serde(alias = "body_fat")]
    #[validate(range(min = 0.0, exclusive_max = 100.0))]
    pub body_fat_percent: Option<f64>,

    #[serde(default)]
    pub results_unit: ResultsUnit,
}

impl CalorieRequest {
    pub fn to_profile(&self) -> Result<PersonProfile> {
        let metric = self.measurements.to_metric()?;
        let profile = PersonProfile::new(self.age, self.sex, metric.height_cm, metric.weight_kg)?;

        match self.body_fat_percent {
            Some(body_fat) => profile.with_body_fat(body_fat),
            None => Ok(profile),
        }
    }
}

/// Weight goals rounded to whole calories (or kilojoules)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeightManagementResponse {
    pub extreme_loss: i64,
    pub moderate_loss: i64,
    pub mild_loss: i64,
    pub maintain: i64,
    pub mild_gain: i64,
    pub moderate_gain: i64,
}

impl From<WeightManagement> for WeightManagementResponse {
    fn from(goals: WeightManagement) -> Self {
        Self {
            extreme_loss: round_whole(goals.extreme_loss),
            moderate_loss: round_whole(goals.moderate_loss),
            mild_loss: round_whole(goals.mild_loss),
            maintain: round_whole(goals.maintain),
            mild_gain: round_whole(goals.mild_gain),
            moderate_gain: round_whole(goals.moderate_gain),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalorieResponse {
    pub bmr: i64,
    pub daily_calories: i64,
    pub activity_level: ActivityLevel,
    pub activity_description: String,
    pub weight_management: WeightManagementResponse,
    pub formula: BmrFormula,
    pub formula_used: String,
    pub results_unit: ResultsUnit,
}

impl From<CalorieResult> for CalorieResponse {
    fn from(result: CalorieResult) -> Self {
        Self {
            bmr: round_whole(result.bmr),
            daily_calories: round_whole(result.daily_calories),
            activity_level: result.activity_level,
            activity_description: result.activity_level.description().to_string(),
            weight_management: result.weight_management.into(),
            formula: result.formula,
            formula_used: result.formula.display_name().to_string(),
            results_unit: result.unit,
        }
    }
}

fn round_whole(value: f64) -> i64 {
    value.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::calculate_calories;

    #[test]
    fn test_request_defaults() {
        let request: CalorieRequest = serde_json::from_str(
            r#"{"age": 25, "gender": "male", "unit_system": "metric", "height_cm": 175, "weight_kg": 70}"#,
        )
        .unwrap();

        assert_eq!(request.sex, Sex::Male);
        assert_eq!(request.activity_level, ActivityLevel::Sedentary);
        assert_eq!(request.bmr_formula, BmrFormula::MifflinStJeor);
        assert_eq!(request.results_unit, ResultsUnit::Calories);
        assert!(request.validate().is_ok());

        let profile = request.to_profile().unwrap();
        assert_eq!(profile.height_cm(), 175.0);
        assert_eq!(profile.weight_kg(), 70.0);
    }

    #[test]
    fn test_age_out_of_range_fails_validation() {
        let request: CalorieRequest = serde_json::from_str(
            r#"{"age": 12, "sex": "female", "unit_system": "metric", "height_cm": 150, "weight_kg": 45}"#,
        )
        .unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("age"));
    }

    #[test]
    fn test_body_fat_carried_into_profile() {
        let request: CalorieRequest = serde_json::from_str(
            r#"{"age": 30, "sex": "m", "unit_system": "metric", "height_cm": 180, "weight_kg": 80,
                "bmr_formula": "katch_mcardle", "body_fat": 20}"#,
        )
        .unwrap();

        let profile = request.to_profile().unwrap();
        assert_eq!(profile.body_fat_percent(), Some(20.0));
    }

    #[test]
    fn test_response_rounding() {
        let profile = PersonProfile::new(25, Sex::Male, 175.0, 70.0).unwrap();
        let result = calculate_calories(
            &profile,
            BmrFormula::MifflinStJeor,
            ActivityLevel::Bmr,
            ResultsUnit::Calories,
        )
        .unwrap();

        let response = CalorieResponse::from(result);
        assert_eq!(response.bmr, 1674);
        assert_eq!(response.daily_calories, 1674);
        assert_eq!(response.weight_management.maintain, 1674);
        assert_eq!(response.weight_management.extreme_loss, 674);
        assert_eq!(response.formula_used, "Mifflin St Jeor");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["weight_management"]["moderate_gain"], 2174);
        assert_eq!(json["results_unit"], "calories");
    }
}
