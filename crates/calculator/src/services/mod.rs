pub mod bmi_computation;
pub mod calorie_computation;
pub mod unit_conversion;

pub use bmi_computation::{
    BmiResult, HealthyWeightRange, calculate_bmi, classify_bmi, compute_bmi, compute_bmi_prime,
    compute_healthy_weight_range, compute_ponderal_index,
};
pub use calorie_computation::{
    CalorieResult, WeightManagement, calculate_calories, compute_bmr, compute_daily_calories,
    compute_weight_management,
};
pub use unit_conversion::convert_energy;
