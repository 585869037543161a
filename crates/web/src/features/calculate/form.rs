//! Parsing of the calculator page's url-encoded form posts.
//!
//! The page posts every field as a string, with BMI fields prefixed `bmi_` and
//! energy fields prefixed `energy_`. Blank fields count as missing.

use std::collections::HashMap;

use calculator::{
    dto::{
        bmi::BmiRequest, calorie::CalorieRequest, common::Measurements,
        energy::EnergyConversionRequest,
    },
    models::{ActivityLevel, BmrFormula, ResultsUnit, Sex, UnitSystem},
};

use crate::error::{WebError, WebResult};

const INVALID_MEASUREMENTS: &str = "Please enter valid numbers for height and weight.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcType {
    Calorie,
    Bmi,
    Energy,
}

impl CalcType {
    fn parse_str(s: &str) -> WebResult<Self> {
        match s {
            "calorie" => Ok(Self::Calorie),
            "bmi" => Ok(Self::Bmi),
            "energy" => Ok(Self::Energy),
            _ => Err(bad_request("Invalid calculation type.")),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormFields {
    fields: HashMap<String, String>,
}

impl From<HashMap<String, String>> for FormFields {
    fn from(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}

impl FormFields {
    fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    fn prefixed(&self, prefix: &str, name: &str) -> Option<&str> {
        self.get(&format!("{prefix}{name}"))
    }

    pub fn calc_type(&self) -> WebResult<CalcType> {
        self.get("calc_type")
            .map_or(Ok(CalcType::Calorie), CalcType::parse_str)
    }

    pub fn calorie_request(&self) -> WebResult<CalorieRequest> {
        let age = self.age("age", 15, 80)?;
        let sex = self.sex("gender")?;
        let measurements = self.measurements("")?;

        let activity_level = match self.get("activity_level") {
            Some(value) => value.parse::<ActivityLevel>()?,
            None => ActivityLevel::default(),
        };
        let bmr_formula = match self.get("bmr_formula") {
            Some(value) => value.parse::<BmrFormula>()?,
            None => BmrFormula::default(),
        };
        let results_unit = match self.get("results_unit") {
            Some(value) => value.parse::<ResultsUnit>()?,
            None => ResultsUnit::default(),
        };
        let body_fat_percent = self
            .get("body_fat")
            .map(|value| {
                value
                    .parse::<f64>()
                    .map_err(|_| bad_request("Body fat percentage must be a valid number."))
            })
            .transpose()?;

        Ok(CalorieRequest {
            age,
            sex,
            measurements,
            activity_level,
            bmr_formula,
            body_fat_percent,
            results_unit,
        })
    }

    pub fn bmi_request(&self) -> WebResult<BmiRequest> {
        let age = self.age("bmi_age", 2, 120)?;
        let sex = match self.get("bmi_gender") {
            Some(value) => Some(value.parse::<Sex>()?),
            None => None,
        };

        Ok(BmiRequest {
            age: Some(age),
            sex,
            measurements: self.measurements("bmi_")?,
        })
    }

    pub fn energy_request(&self) -> WebResult<EnergyConversionRequest> {
        let (Some(from_unit), Some(to_unit)) =
            (self.get("energy_from_unit"), self.get("energy_to_unit"))
        else {
            return Err(bad_request("Both from and to units are required."));
        };

        let value = self
            .get("energy_value")
            .unwrap_or("0")
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| bad_request("Energy value must be a valid number."))?;

        Ok(EnergyConversionRequest {
            value,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
        })
    }

    fn age(&self, key: &str, min: u32, max: u32) -> WebResult<u32> {
        let raw = self
            .get(key)
            .ok_or_else(|| bad_request("Age is required."))?;
        let age: i64 = raw
            .parse()
            .map_err(|_| bad_request("Age must be a valid number."))?;

        if age < i64::from(min) || age > i64::from(max) {
            return Err(bad_request(format!(
                "Age must be between {min} and {max} years."
            )));
        }

        Ok(age as u32)
    }

    fn sex(&self, key: &str) -> WebResult<Sex> {
        let raw = self
            .get(key)
            .ok_or_else(|| bad_request("Gender is required."))?;
        Ok(raw.parse::<Sex>()?)
    }

    fn measurements(&self, prefix: &str) -> WebResult<Measurements> {
        let unit_system = match self.prefixed(prefix, "unit_system") {
            Some(value) => value.parse::<UnitSystem>()?,
            None => UnitSystem::default(),
        };

        match unit_system {
            UnitSystem::Us => {
                let weight_lbs = self
                    .prefixed(prefix, "weight_lbs")
                    .ok_or_else(|| bad_request("Weight is required."))?;
                let feet = self
                    .prefixed(prefix, "feet")
                    .map(parse_whole)
                    .transpose()?
                    .unwrap_or(0);
                let inches = self
                    .prefixed(prefix, "inches")
                    .map(parse_whole)
                    .transpose()?
                    .unwrap_or(0);

                Ok(Measurements::us(
                    feet,
                    f64::from(inches),
                    parse_number(weight_lbs)?,
                ))
            }
            UnitSystem::Metric => {
                let (Some(height_cm), Some(weight_kg)) = (
                    self.prefixed(prefix, "height_cm"),
                    self.prefixed(prefix, "weight_kg"),
                ) else {
                    return Err(bad_request("Height and weight are required."));
                };

                Ok(Measurements::metric(
                    parse_number(height_cm)?,
                    parse_number(weight_kg)?,
                ))
            }
        }
    }
}

fn parse_whole(raw: &str) -> WebResult<u32> {
    raw.parse().map_err(|_| bad_request(INVALID_MEASUREMENTS))
}

fn parse_number(raw: &str) -> WebResult<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| bad_request(INVALID_MEASUREMENTS))
}

fn bad_request(msg: impl Into<String>) -> WebError {
    WebError::BadRequest(msg.into())
}
