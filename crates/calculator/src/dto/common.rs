use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{CalculatorError, Result};
use crate::models::UnitSystem;
use crate::services::unit_conversion::{feet_inches_to_cm, lbs_to_kg};

/// Height and weight as entered, in either unit system
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct Measurements {
    #[serde(default)]
    pub unit_system: UnitSystem,

    #[validate(range(exclusive_min = 0.0, max = 300.0))]
    pub height_cm: Option<f64>,

    #[validate(range(exclusive_min = 0.0, max = 700.0))]
    pub weight_kg: Option<f64>,

    #[validate(range(max = 9))]
    pub feet: Option<u32>,

    #[validate(range(min = 0.0, exclusive_max = 12.0))]
    pub inches: Option<f64>,

    #[validate(range(exclusive_min = 0.0, max = 1500.0))]
    pub weight_lbs: Option<f64>,
}

/// Height and weight normalised to centimetres and kilograms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricMeasurements {
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl Measurements {
    pub fn metric(height_cm: f64, weight_kg: f64) -> Self {
        Self {
            unit_system: UnitSystem::Metric,
            height_cm: Some(height_cm),
            weight_kg: Some(weight_kg),
            ..Self::default()
        }
    }

    pub fn us(feet: u32, inches: f64, weight_lbs: f64) -> Self {
        Self {
            unit_system: UnitSystem::Us,
            feet: Some(feet),
            inches: Some(inches),
            weight_lbs: Some(weight_lbs),
            ..Self::default()
        }
    }

    pub fn to_metric(&self) -> Result<MetricMeasurements> {
        match self.unit_system {
            UnitSystem::Us => {
                let weight_lbs = self
                    .weight_lbs
                    .ok_or_else(|| CalculatorError::validation("Weight is required."))?;
                let height_cm = feet_inches_to_cm(
                    f64::from(self.feet.unwrap_or(0)),
                    self.inches.unwrap_or(0.0),
                );
                if height_cm <= 0.0 {
                    return Err(CalculatorError::validation("Height is required."));
                }

                Ok(MetricMeasurements {
                    height_cm,
                    weight_kg: lbs_to_kg(weight_lbs),
                })
            }
            UnitSystem::Metric => match (self.height_cm, self.weight_kg) {
                (Some(height_cm), Some(weight_kg)) => Ok(MetricMeasurements {
                    height_cm,
                    weight_kg,
                }),
                _ => Err(CalculatorError::validation(
                    "Height and weight are required.",
                )),
            },
        }
    }
}

/// Magnitude beyond which an `f64` has no fractional digits left to round
const ROUNDING_LIMIT: f64 = 1e15;

/// Round half away from zero to `dp` decimal places
pub fn round_dp(value: f64, dp: i32) -> f64 {
    let factor = 10f64.powi(dp);
    let scaled = value * factor;
    if value.abs() >= ROUNDING_LIMIT || !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
