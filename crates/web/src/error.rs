use axum::{
    Json,
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use calculator::error::CalculatorError;
use serde_json::json;
use std::fmt;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Calculation(CalculatorError),
    Validation(ValidationErrors),
    BadRequest(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calculation(e) => write!(f, "Calculation error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Calculation(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = match &self {
            Self::Calculation(e) => {
                tracing::warn!("Calculation rejected: {}", e);
                let kind = match e {
                    CalculatorError::Validation(_) => "validation_error",
                    CalculatorError::UnsupportedUnit(_) => "unsupported_unit",
                };
                json!({
                    "error": e.message(),
                    "kind": kind
                })
            }
            Self::Validation(errors) => {
                let mut field_errors = Vec::new();
                collect_field_errors(errors, &mut field_errors);
                field_errors.sort();

                json!({
                    "error": "Validation failed",
                    "kind": "validation_error",
                    "details": field_errors
                })
            }
            Self::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                json!({
                    "error": msg
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

/// Flatten field errors into `field: message` lines, descending into nested
/// structs. Nested request structs are flattened in the JSON body, so their
/// fields are reported under their own names.
fn collect_field_errors(errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(errors) => {
                out.extend(errors.iter().map(|e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    )
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect_field_errors(nested, out),
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    collect_field_errors(nested, out);
                }
            }
        }
    }
}

impl From<CalculatorError> for WebError {
    fn from(error: CalculatorError) -> Self {
        Self::Calculation(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

impl From<JsonRejection> for WebError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<FormRejection> for WebError {
    fn from(rejection: FormRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

pub type WebResult<T> = Result<T, WebError>;
