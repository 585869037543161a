pub mod bmi;
pub mod calorie;
pub mod common;
pub mod energy;
