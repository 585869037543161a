use axum::{
    Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use calculator::dto::bmi::{BmiRequest, BmiResponse};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/bmi",
    request_body = BmiRequest,
    responses(
        (status = 200, description = "BMI, classification and healthy weight range", body = BmiResponse),
        (status = 400, description = "Invalid or incomplete height/weight")
    ),
    tag = "bmi"
)]
pub async fn calculate_bmi(
    payload: Result<Json<BmiRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let response = services::calculate_bmi(&payload)?;

    Ok(Json(response).into_response())
}
