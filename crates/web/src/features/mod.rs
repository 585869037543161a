use axum::{Json, Router, response::IntoResponse, routing::get};
use serde_json::json;

pub mod bmi;
pub mod calculate;
pub mod calories;
pub mod energy;

pub fn routes() -> Router {
    let api = Router::new()
        .merge(calories::routes::routes())
        .merge(bmi::routes::routes())
        .merge(energy::routes::routes());

    Router::new()
        .nest("/api", api)
        .merge(calculate::routes::routes())
        .route("/health", get(health))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up")
    ),
    tag = "health"
)]
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
