use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{CalculatorError, Result};
use crate::models::Sex;

/// BMR estimation equation
///
/// - Mifflin-St Jeor: BMR = 10W + 6.25H - 5A + s (s = +5 men, -161 women)
/// - Harris-Benedict (revised): sex-specific linear formula in W, H and A
/// - Katch-McArdle: BMR = 370 + 21.6 × LBM, requires body fat percentage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BmrFormula {
    #[default]
    MifflinStJeor,
    HarrisBenedict,
    KatchMcardle,
}

/// Coefficients of a linear BMR equation: a·W + b·H + c·A + constant
#[derive(Debug, Clone, Copy)]
pub struct LinearCoefficients {
    pub weight: f64,
    pub height: f64,
    pub age: f64,
    pub constant: f64,
}

impl BmrFormula {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MifflinStJeor => "mifflin_st_jeor",
            Self::HarrisBenedict => "harris_benedict",
            Self::KatchMcardle => "katch_mcardle",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MifflinStJeor => "Mifflin St Jeor",
            Self::HarrisBenedict => "Harris Benedict",
            Self::KatchMcardle => "Katch Mcardle",
        }
    }

    pub fn requires_body_fat(&self) -> bool {
        matches!(self, Self::KatchMcardle)
    }

    /// Coefficients for the weight/height/age equations, `None` for Katch-McArdle
    pub fn coefficients_for_sex(&self, sex: Sex) -> Option<LinearCoefficients> {
        match (self, sex) {
            (Self::MifflinStJeor, Sex::Male) => Some(LinearCoefficients {
                weight: 10.0,
                height: 6.25,
                age: -5.0,
                constant: 5.0,
            }),
            (Self::MifflinStJeor, Sex::Female) => Some(LinearCoefficients {
                weight: 10.0,
                height: 6.25,
                age: -5.0,
                constant: -161.0,
            }),
            (Self::HarrisBenedict, Sex::Male) => Some(LinearCoefficients {
                weight: 13.397,
                height: 4.799,
                age: -5.677,
                constant: 88.362,
            }),
            (Self::HarrisBenedict, Sex::Female) => Some(LinearCoefficients {
                weight: 9.247,
                height: 3.098,
                age: -4.330,
                constant: 447.593,
            }),
            (Self::KatchMcardle, _) => None,
        }
    }

    pub fn all() -> &'static [BmrFormula] {
        &[Self::MifflinStJeor, Self::HarrisBenedict, Self::KatchMcardle]
    }

    fn parse_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "mifflin_st_jeor" | "mifflin" => Ok(Self::MifflinStJeor),
            "harris_benedict" | "harris" => Ok(Self::HarrisBenedict),
            "katch_mcardle" | "katch" => Ok(Self::KatchMcardle),
            _ => Err(CalculatorError::validation(format!(
                "Unknown BMR formula: '{}'. Available: {}",
                s,
                Self::all()
                    .iter()
                    .map(|f| f.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

impl TryFrom<&str> for BmrFormula {
    type Error = CalculatorError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse_str(value)
    }
}

impl std::str::FromStr for BmrFormula {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for BmrFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
