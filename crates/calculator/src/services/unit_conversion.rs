use crate::error::{Result, ensure_finite, ensure_finite_output};
use crate::models::EnergyUnit;
use crate::models::units::{CM_PER_INCH, INCHES_PER_FOOT, KG_PER_LB};

/// Convert an energy value between units, going through kilocalories.
///
/// 1 kcal = 4.184 kJ = 4184 J = 1000 cal
pub fn convert_energy(value: f64, from_unit: EnergyUnit, to_unit: EnergyUnit) -> Result<f64> {
    let value = ensure_finite(value, "Energy value")?;
    if from_unit == to_unit {
        return Ok(value);
    }

    let kcal = value * from_unit.kcal_per_unit();
    ensure_finite_output(kcal / to_unit.kcal_per_unit(), "Converted energy value")
}

pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

pub fn kg_to_lbs(kg: f64) -> f64 {
    kg / KG_PER_LB
}

pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    inches_to_cm(feet * INCHES_PER_FOOT + inches)
}
