use axum::{Router, routing::post};

use super::handlers::calculate_bmi;

pub fn routes() -> Router {
    Router::new().route("/bmi", post(calculate_bmi))
}
