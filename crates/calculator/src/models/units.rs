use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{CalculatorError, Result};

pub const KJ_PER_KCAL: f64 = 4.184;
pub const KG_PER_LB: f64 = 0.453592;
pub const CM_PER_INCH: f64 = 2.54;
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Measurement system the caller entered height and weight in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Feet + inches and pounds
    #[default]
    Us,
    /// Centimetres and kilograms
    Metric,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Metric => "metric",
        }
    }

    fn parse_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "us" | "imperial" => Ok(Self::Us),
            "metric" | "si" => Ok(Self::Metric),
            _ => Err(CalculatorError::UnsupportedUnit(format!(
                "Unknown unit system: '{}'. Available: us, metric",
                s
            ))),
        }
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Energy unit for conversions. Kilocalories ("food calories") are the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUnit {
    Kilocalorie,
    Calorie,
    Kilojoule,
    Joule,
}

impl EnergyUnit {
    /// How many kilocalories one of this unit is worth
    pub fn kcal_per_unit(&self) -> f64 {
        match self {
            Self::Kilocalorie => 1.0,
            Self::Calorie => 0.001,
            Self::Kilojoule => 1.0 / KJ_PER_KCAL,
            Self::Joule => 1.0 / (KJ_PER_KCAL * 1000.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kilocalorie => "kcal",
            Self::Calorie => "cal",
            Self::Kilojoule => "kj",
            Self::Joule => "j",
        }
    }

    pub fn all() -> &'static [EnergyUnit] {
        &[Self::Kilocalorie, Self::Calorie, Self::Kilojoule, Self::Joule]
    }

    fn parse_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "kcal" | "kilocalorie" | "kilocalories" | "cal_nutritional" | "calories" => {
                Ok(Self::Kilocalorie)
            }
            "cal" | "calorie" | "cal_small" => Ok(Self::Calorie),
            "kj" | "kilojoule" | "kilojoules" => Ok(Self::Kilojoule),
            "j" | "joule" | "joules" => Ok(Self::Joule),
            _ => Err(CalculatorError::UnsupportedUnit(format!(
                "Unknown energy unit: '{}'. Available: {}",
                s,
                Self::all()
                    .iter()
                    .map(|u| u.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

impl TryFrom<&str> for EnergyUnit {
    type Error = CalculatorError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse_str(value)
    }
}

impl std::str::FromStr for EnergyUnit {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unit the calorie calculator reports its results in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResultsUnit {
    #[default]
    Calories,
    Kilojoules,
}

impl ResultsUnit {
    pub fn energy_unit(&self) -> EnergyUnit {
        match self {
            Self::Calories => EnergyUnit::Kilocalorie,
            Self::Kilojoules => EnergyUnit::Kilojoule,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Kilojoules => "kilojoules",
        }
    }

    fn parse_str(s: &str) -> Result<Self> {
        match EnergyUnit::parse_str(s)? {
            EnergyUnit::Kilocalorie => Ok(Self::Calories),
            EnergyUnit::Kilojoule => Ok(Self::Kilojoules),
            other => Err(CalculatorError::UnsupportedUnit(format!(
                "Results cannot be reported in '{}'. Available: calories, kilojoules",
                other
            ))),
        }
    }
}

impl std::str::FromStr for ResultsUnit {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}
