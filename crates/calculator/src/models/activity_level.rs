use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{CalculatorError, Result};

/// Activity level used to scale BMR into total daily energy expenditure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ActivityLevel {
    /// No activity on top of resting metabolism
    Bmr,
    #[default]
    Sedentary,
    Light,
    Moderate,
    Active,
    ExtraActive,
}

impl ActivityLevel {
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Bmr => 1.0,
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::ExtraActive => 1.9,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Bmr => "Basal Metabolic Rate (BMR)",
            Self::Sedentary => "Sedentary: little or no exercise",
            Self::Light => "Light: exercise 1-3 times/week",
            Self::Moderate => "Moderate: exercise 4-5 times/week",
            Self::Active => "Active: daily exercise or intense exercise 3-4 times/week",
            Self::ExtraActive => "Extra Active: very intense exercise daily, or physical job",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bmr => "bmr",
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::ExtraActive => "extra_active",
        }
    }

    pub fn all() -> &'static [ActivityLevel] {
        &[
            Self::Bmr,
            Self::Sedentary,
            Self::Light,
            Self::Moderate,
            Self::Active,
            Self::ExtraActive,
        ]
    }

    fn parse_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "bmr" => Ok(Self::Bmr),
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "extra_active" | "very_active" => Ok(Self::ExtraActive),
            _ => Err(CalculatorError::validation(format!(
                "Unknown activity level: '{}'. Available: {}",
                s,
                Self::all()
                    .iter()
                    .map(|a| a.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

impl TryFrom<&str> for ActivityLevel {
    type Error = CalculatorError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse_str(value)
    }
}

impl TryFrom<String> for ActivityLevel {
    type Error = CalculatorError;

    fn try_from(value: String) -> Result<Self> {
        Self::try_from(value.as_str())
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers_increase_with_activity() {
        let multipliers: Vec<f64> = ActivityLevel::all().iter().map(|a| a.multiplier()).collect();
        assert!(multipliers.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ActivityLevel::Sedentary.multiplier(), 1.2);
        assert_eq!(ActivityLevel::ExtraActive.multiplier(), 1.9);
    }

    #[test]
    fn test_activity_level_parsing() {
        assert_eq!(
            "very_active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::ExtraActive
        );
        assert_eq!(
            ActivityLevel::try_from("Extra-Active").unwrap(),
            ActivityLevel::ExtraActive
        );
        assert!("couch".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_serde_alias() {
        let level: ActivityLevel = serde_json::from_str("\"very_active\"").unwrap();
        assert_eq!(level, ActivityLevel::ExtraActive);
        let level: ActivityLevel = serde_json::from_str("\"Moderate\"").unwrap();
        assert_eq!(level, ActivityLevel::Moderate);
        assert!(serde_json::from_str::<ActivityLevel>("\"couch\"").is_err());
        assert_eq!(
            serde_json::to_string(&ActivityLevel::ExtraActive).unwrap(),
            "\"extra_active\""
        );
    }
}
