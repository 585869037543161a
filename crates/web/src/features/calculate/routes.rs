use axum::{Router, routing::post};

use super::handlers::calculate;

pub fn routes() -> Router {
    Router::new().route("/calculate", post(calculate))
}
