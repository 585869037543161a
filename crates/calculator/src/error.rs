use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculatorError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(String),
}

pub type Result<T> = std::result::Result<T, CalculatorError>;

impl CalculatorError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Message suitable for returning to the caller, without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::UnsupportedUnit(msg) => msg,
        }
    }
}

/// Rejects NaN and infinities before they reach a formula
pub(crate) fn ensure_finite(value: f64, field: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculatorError::validation(format!(
            "{field} must be a finite number"
        )))
    }
}

/// Rejects computed values that overflowed or underflowed into NaN/infinity
pub(crate) fn ensure_finite_output(value: f64, quantity: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculatorError::validation(format!(
            "{quantity} is out of range for the given inputs"
        )))
    }
}

pub(crate) fn ensure_positive(value: f64, field: &str) -> Result<f64> {
    let value = ensure_finite(value, field)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CalculatorError::validation(format!(
            "{field} must be greater than zero"
        )))
    }
}
