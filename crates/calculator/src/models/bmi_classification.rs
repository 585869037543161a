use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// WHO BMI classes. Each band includes its lower bound and excludes its upper one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BmiClassification {
    SevereThinness,
    ModerateThinness,
    MildThinness,
    Normal,
    Overweight,
    ObeseClassI,
    ObeseClassIi,
    ObeseClassIii,
}

/// Broad WHO category a classification belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiClassification {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 16.0 {
            Self::SevereThinness
        } else if bmi < 17.0 {
            Self::ModerateThinness
        } else if bmi < 18.5 {
            Self::MildThinness
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else if bmi < 35.0 {
            Self::ObeseClassI
        } else if bmi < 40.0 {
            Self::ObeseClassIi
        } else {
            Self::ObeseClassIii
        }
    }

    pub fn category(&self) -> BmiCategory {
        match self {
            Self::SevereThinness | Self::ModerateThinness | Self::MildThinness => {
                BmiCategory::Underweight
            }
            Self::Normal => BmiCategory::Normal,
            Self::Overweight => BmiCategory::Overweight,
            Self::ObeseClassI | Self::ObeseClassIi | Self::ObeseClassIii => BmiCategory::Obese,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SevereThinness => "Severe Thinness",
            Self::ModerateThinness => "Moderate Thinness",
            Self::MildThinness => "Mild Thinness",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::ObeseClassI => "Obese Class I",
            Self::ObeseClassIi => "Obese Class II",
            Self::ObeseClassIii => "Obese Class III",
        }
    }
}

impl std::fmt::Display for BmiClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
