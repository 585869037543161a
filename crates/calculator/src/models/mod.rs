pub mod activity_level;
pub mod bmi_classification;
pub mod bmr_formula;
pub mod profile;
pub mod units;

pub use activity_level::ActivityLevel;
pub use bmi_classification::{BmiCategory, BmiClassification};
pub use bmr_formula::{BmrFormula, LinearCoefficients};
pub use profile::{PersonProfile, Sex};
pub use units::{EnergyUnit, ResultsUnit, UnitSystem};
