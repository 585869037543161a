//! Calorie, BMR and BMI formulas plus the request/response types that carry them.
//!
//! Everything here is a pure function over value types; nothing is cached or shared.

pub mod dto;
pub mod error;
pub mod models;
pub mod services;

pub use error::{CalculatorError, Result};
