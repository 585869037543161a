use axum::{Router, routing::post};

use super::handlers::convert_energy;

pub fn routes() -> Router {
    Router::new().route("/energy/convert", post(convert_energy))
}
