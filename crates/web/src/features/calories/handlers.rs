use axum::{
    Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use calculator::dto::calorie::{CalorieRequest, CalorieResponse};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/calories",
    request_body = CalorieRequest,
    responses(
        (status = 200, description = "BMR, daily calorie needs and weight goals", body = CalorieResponse),
        (status = 400, description = "Invalid or incomplete biometric input")
    ),
    tag = "calories"
)]
pub async fn calculate_calories(
    payload: Result<Json<CalorieRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let response = services::calculate_calories(&payload)?;

    Ok(Json(response).into_response())
}
