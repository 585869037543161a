use axum::{
    Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use calculator::dto::energy::{EnergyConversionRequest, EnergyConversionResponse};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/energy/convert",
    request_body = EnergyConversionRequest,
    responses(
        (status = 200, description = "Value converted between energy units", body = EnergyConversionResponse),
        (status = 400, description = "Unknown unit or invalid value")
    ),
    tag = "energy"
)]
pub async fn convert_energy(
    payload: Result<Json<EnergyConversionRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let response = services::convert_energy(&payload)?;

    Ok(Json(response).into_response())
}
