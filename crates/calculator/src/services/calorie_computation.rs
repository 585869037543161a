use crate::error::{CalculatorError, Result, ensure_finite_output};
use crate::models::{ActivityLevel, BmrFormula, EnergyUnit, PersonProfile, ResultsUnit};
use crate::services::unit_conversion::convert_energy;

/// Katch-McArdle: BMR = 370 + 21.6 × lean body mass (kg)
const KATCH_MCARDLE_BASE: f64 = 370.0;
const KATCH_MCARDLE_LBM_COEF: f64 = 21.6;

/// Daily calorie targets per weight goal, offset from maintenance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightManagement {
    /// About 1 kg (2 lb) lost per week
    pub extreme_loss: f64,
    /// About 0.5 kg (1 lb) lost per week
    pub moderate_loss: f64,
    /// About 0.25 kg (0.5 lb) lost per week
    pub mild_loss: f64,
    pub maintain: f64,
    /// About 0.25 kg (0.5 lb) gained per week
    pub mild_gain: f64,
    /// About 0.5 kg (1 lb) gained per week
    pub moderate_gain: f64,
}

impl WeightManagement {
    pub const EXTREME_LOSS_OFFSET: f64 = -1000.0;
    pub const MODERATE_LOSS_OFFSET: f64 = -500.0;
    pub const MILD_LOSS_OFFSET: f64 = -250.0;
    pub const MILD_GAIN_OFFSET: f64 = 250.0;
    pub const MODERATE_GAIN_OFFSET: f64 = 500.0;

    /// Apply `f` to every goal
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            extreme_loss: f(self.extreme_loss),
            moderate_loss: f(self.moderate_loss),
            mild_loss: f(self.mild_loss),
            maintain: f(self.maintain),
            mild_gain: f(self.mild_gain),
            moderate_gain: f(self.moderate_gain),
        }
    }

    /// Goals converted from kilocalories to `unit`
    pub fn in_unit(self, unit: EnergyUnit) -> Result<Self> {
        // Offsets are linear, so converting each goal equals converting the base.
        let factor = convert_energy(1.0, EnergyUnit::Kilocalorie, unit)?;
        let converted = self.map(|kcal| kcal * factor);
        ensure_finite_output(converted.extreme_loss, "Weight management goal")?;
        ensure_finite_output(converted.moderate_gain, "Weight management goal")?;
        Ok(converted)
    }
}

/// Full output of the calorie calculator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieResult {
    pub bmr: f64,
    pub daily_calories: f64,
    pub weight_management: WeightManagement,
    pub formula: BmrFormula,
    pub activity_level: ActivityLevel,
    pub unit: ResultsUnit,
}

/// Basal metabolic rate in kcal/day
pub fn compute_bmr(profile: &PersonProfile, formula: BmrFormula) -> Result<f64> {
    let bmr = if formula.requires_body_fat() {
        let lean_body_mass = profile.lean_body_mass_kg().ok_or_else(|| {
            CalculatorError::validation(
                "Body fat percentage is required for the Katch-McArdle formula.",
            )
        })?;
        KATCH_MCARDLE_BASE + KATCH_MCARDLE_LBM_COEF * lean_body_mass
    } else {
        let c = formula.coefficients_for_sex(profile.sex()).ok_or_else(|| {
            CalculatorError::validation(format!(
                "{} has no coefficients for {}",
                formula.display_name(),
                profile.sex()
            ))
        })?;
        c.weight * profile.weight_kg()
            + c.height * profile.height_cm()
            + c.age * f64::from(profile.age())
            + c.constant
    };

    let bmr = ensure_finite_output(bmr, "BMR")?;
    if bmr <= 0.0 {
        return Err(CalculatorError::validation(format!(
            "Inputs produce a non-positive BMR ({bmr:.1}); check height, weight and age."
        )));
    }

    Ok(bmr)
}

/// Total daily energy expenditure: BMR × activity multiplier
pub fn compute_daily_calories(bmr: f64, activity_level: ActivityLevel) -> Result<f64> {
    if !bmr.is_finite() || bmr <= 0.0 {
        return Err(CalculatorError::validation("BMR must be a positive number."));
    }

    ensure_finite_output(bmr * activity_level.multiplier(), "Daily calories")
}

pub fn compute_weight_management(daily_calories: f64) -> WeightManagement {
    WeightManagement {
        extreme_loss: daily_calories + WeightManagement::EXTREME_LOSS_OFFSET,
        moderate_loss: daily_calories + WeightManagement::MODERATE_LOSS_OFFSET,
        mild_loss: daily_calories + WeightManagement::MILD_LOSS_OFFSET,
        maintain: daily_calories,
        mild_gain: daily_calories + WeightManagement::MILD_GAIN_OFFSET,
        moderate_gain: daily_calories + WeightManagement::MODERATE_GAIN_OFFSET,
    }
}

/// BMR, TDEE and weight goals in one pass, reported in `unit`
pub fn calculate_calories(
    profile: &PersonProfile,
    formula: BmrFormula,
    activity_level: ActivityLevel,
    unit: ResultsUnit,
) -> Result<CalorieResult> {
    let bmr = compute_bmr(profile, formula)?;
    let daily_calories = compute_daily_calories(bmr, activity_level)?;
    let weight_management = compute_weight_management(daily_calories);

    let target = unit.energy_unit();
    Ok(CalorieResult {
        bmr: convert_energy(bmr, EnergyUnit::Kilocalorie, target)?,
        daily_calories: convert_energy(daily_calories, EnergyUnit::Kilocalorie, target)?,
        weight_management: weight_management.in_unit(target)?,
        formula,
        activity_level,
        unit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    fn reference_male() -> PersonProfile {
        PersonProfile::new(25, Sex::Male, 175.0, 70.0).unwrap()
    }

    #[test]
    fn test_mifflin_st_jeor() {
        let bmr = compute_bmr(&reference_male(), BmrFormula::MifflinStJeor).unwrap();
        // 700 + 1093.75 - 125 + 5
        assert_close(bmr, 1673.75);

        let female = PersonProfile::new(25, Sex::Female, 175.0, 70.0).unwrap();
        let bmr = compute_bmr(&female, BmrFormula::MifflinStJeor).unwrap();
        assert_close(bmr, 1507.75);
    }

    #[test]
    fn test_harris_benedict() {
        let bmr = compute_bmr(&reference_male(), BmrFormula::HarrisBenedict).unwrap();
        assert_close(bmr, 13.397 * 70.0 + 4.799 * 175.0 - 5.677 * 25.0 + 88.362);

        let female = PersonProfile::new(40, Sex::Female, 165.0, 60.0).unwrap();
        let bmr = compute_bmr(&female, BmrFormula::HarrisBenedict).unwrap();
        assert_close(bmr, 9.247 * 60.0 + 3.098 * 165.0 - 4.330 * 40.0 + 447.593);
    }

    #[test]
    fn test_katch_mcardle() {
        let profile = reference_male().with_body_fat(20.0).unwrap();
        let bmr = compute_bmr(&profile, BmrFormula::KatchMcardle).unwrap();
        assert_close(bmr, 370.0 + 21.6 * 56.0);
    }

    #[test]
    fn test_katch_mcardle_requires_body_fat() {
        let result = compute_bmr(&reference_male(), BmrFormula::KatchMcardle);
        assert!(matches!(result, Err(CalculatorError::Validation(_))));
    }

    #[test]
    fn test_non_positive_bmr_is_rejected() {
        let tiny = PersonProfile::new(80, Sex::Female, 10.0, 1.0).unwrap();
        assert!(compute_bmr(&tiny, BmrFormula::MifflinStJeor).is_err());
    }

    #[test]
    fn test_overflowing_bmr_is_an_error() {
        let huge = PersonProfile::new(30, Sex::Male, 175.0, 1e308).unwrap();
        assert!(matches!(
            compute_bmr(&huge, BmrFormula::MifflinStJeor),
            Err(CalculatorError::Validation(_))
        ));
        assert!(compute_daily_calories(1e308, ActivityLevel::ExtraActive).is_err());
    }

    #[test]
    fn test_daily_calories() {
        assert_close(
            compute_daily_calories(1500.0, ActivityLevel::Sedentary).unwrap(),
            1800.0,
        );
        assert_close(compute_daily_calories(1500.0, ActivityLevel::Bmr).unwrap(), 1500.0);
        assert!(compute_daily_calories(0.0, ActivityLevel::Moderate).is_err());
        assert!(compute_daily_calories(f64::NAN, ActivityLevel::Moderate).is_err());
    }

    #[test]
    fn test_weight_management_offsets() {
        let goals = compute_weight_management(2200.0);
        assert_eq!(goals.maintain, 2200.0);
        assert_eq!(goals.extreme_loss, 1200.0);
        assert_eq!(goals.moderate_loss, 1700.0);
        assert_eq!(goals.mild_loss, 1950.0);
        assert_eq!(goals.mild_gain, 2450.0);
        assert_eq!(goals.moderate_gain, 2700.0);
    }

    #[test]
    fn test_weight_management_in_kilojoules() {
        let goals = compute_weight_management(2000.0)
            .in_unit(EnergyUnit::Kilojoule)
            .unwrap();
        assert_close(goals.maintain, 8368.0);
        assert_close(goals.extreme_loss, 1000.0 * 4.184);
    }

    #[test]
    fn test_calculate_calories_pipeline() {
        let result = calculate_calories(
            &reference_male(),
            BmrFormula::MifflinStJeor,
            ActivityLevel::Moderate,
            ResultsUnit::Calories,
        )
        .unwrap();

        assert_close(result.bmr, 1673.75);
        assert_close(result.daily_calories, 1673.75 * 1.55);
        assert_eq!(result.weight_management.maintain, result.daily_calories);
        assert_close(
            result.weight_management.extreme_loss,
            result.daily_calories - 1000.0,
        );
    }

    #[test]
    fn test_calculate_calories_in_kilojoules() {
        let kcal = calculate_calories(
            &reference_male(),
            BmrFormula::HarrisBenedict,
            ActivityLevel::Active,
            ResultsUnit::Calories,
        )
        .unwrap();
        let kj = calculate_calories(
            &reference_male(),
            BmrFormula::HarrisBenedict,
            ActivityLevel::Active,
            ResultsUnit::Kilojoules,
        )
        .unwrap();

        assert_close(kj.bmr, kcal.bmr * 4.184);
        assert_close(kj.daily_calories, kcal.daily_calories * 4.184);
        assert_close(
            kj.weight_management.mild_gain,
            kcal.weight_management.mild_gain * 4.184,
        );
        assert_eq!(kj.unit, ResultsUnit::Kilojoules);
    }
}
