use axum::{Router, routing::post};

use super::handlers::calculate_calories;

pub fn routes() -> Router {
    Router::new().route("/calories", post(calculate_calories))
}
