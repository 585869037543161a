use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{CalculatorError, Result, ensure_finite, ensure_positive};

pub const MIN_AGE: u32 = 15;
pub const MAX_AGE: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    fn parse_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "men" => Ok(Self::Male),
            "female" | "f" | "women" => Ok(Self::Female),
            _ => Err(CalculatorError::validation(format!(
                "Unknown sex: '{}'. Available: male, female",
                s
            ))),
        }
    }
}

impl TryFrom<&str> for Sex {
    type Error = CalculatorError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse_str(value)
    }
}

impl TryFrom<String> for Sex {
    type Error = CalculatorError;

    fn try_from(value: String) -> Result<Self> {
        Self::try_from(value.as_str())
    }
}

impl std::str::FromStr for Sex {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Biometric inputs for one calculation, always in metric units.
///
/// Construction validates every field, so formulas can assume a sane domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonProfile {
    age: u32,
    sex: Sex,
    height_cm: f64,
    weight_kg: f64,
    body_fat_percent: Option<f64>,
}

impl PersonProfile {
    pub fn new(age: u32, sex: Sex, height_cm: f64, weight_kg: f64) -> Result<Self> {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(CalculatorError::validation(format!(
                "Age must be between {MIN_AGE} and {MAX_AGE} years."
            )));
        }

        Ok(Self {
            age,
            sex,
            height_cm: ensure_positive(height_cm, "Height")?,
            weight_kg: ensure_positive(weight_kg, "Weight")?,
            body_fat_percent: None,
        })
    }

    pub fn with_body_fat(mut self, body_fat_percent: f64) -> Result<Self> {
        let body_fat_percent = ensure_finite(body_fat_percent, "Body fat percentage")?;
        if !(0.0..100.0).contains(&body_fat_percent) {
            return Err(CalculatorError::validation(
                "Body fat percentage must be between 0 and 100.",
            ));
        }
        self.body_fat_percent = Some(body_fat_percent);
        Ok(self)
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn body_fat_percent(&self) -> Option<f64> {
        self.body_fat_percent
    }

    /// Lean body mass in kg, only known when body fat was supplied
    pub fn lean_body_mass_kg(&self) -> Option<f64> {
        self.body_fat_percent
            .map(|fat| self.weight_kg * (1.0 - fat / 100.0))
    }
}
