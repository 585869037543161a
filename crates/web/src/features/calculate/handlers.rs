use std::collections::HashMap;

use axum::{
    Form, Json,
    extract::rejection::FormRejection,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::error::WebError;
use crate::features::{bmi, calories, energy};

use super::form::{CalcType, FormFields};

/// Form endpoint used by the calculator page; `calc_type` picks the calculator
#[utoipa::path(
    post,
    path = "/calculate",
    request_body(
        content = HashMap<String, String>,
        content_type = "application/x-www-form-urlencoded",
        description = "Calculator form fields, selected by `calc_type` (calorie, bmi or energy)"
    ),
    responses(
        (status = 200, description = "Result of the selected calculator"),
        (status = 400, description = "Missing or invalid form field")
    ),
    tag = "forms"
)]
pub async fn calculate(
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Result<Response, WebError> {
    let Form(fields) = form?;
    let fields = FormFields::from(fields);

    let response = match fields.calc_type()? {
        CalcType::Calorie => {
            let request = fields.calorie_request()?;
            request.validate()?;
            Json(calories::services::calculate_calories(&request)?).into_response()
        }
        CalcType::Bmi => {
            let request = fields.bmi_request()?;
            request.validate()?;
            Json(bmi::services::calculate_bmi(&request)?).into_response()
        }
        CalcType::Energy => {
            let request = fields.energy_request()?;
            request.validate()?;
            Json(energy::services::convert_energy(&request)?).into_response()
        }
    };

    Ok(response)
}
