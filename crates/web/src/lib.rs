use std::time::Duration;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::calories::handlers::calculate_calories,
        features::bmi::handlers::calculate_bmi,
        features::energy::handlers::convert_energy,
        features::calculate::handlers::calculate,
        features::health,
    ),
    components(
        schemas(
            calculator::dto::calorie::CalorieRequest,
            calculator::dto::calorie::CalorieResponse,
            calculator::dto::calorie::WeightManagementResponse,
            calculator::dto::bmi::BmiRequest,
            calculator::dto::bmi::BmiResponse,
            calculator::dto::energy::EnergyConversionRequest,
            calculator::dto::energy::EnergyConversionResponse,
            calculator::dto::common::Measurements,
            calculator::models::Sex,
            calculator::models::ActivityLevel,
            calculator::models::BmrFormula,
            calculator::models::UnitSystem,
            calculator::models::ResultsUnit,
            calculator::models::BmiClassification,
            calculator::models::BmiCategory,
        )
    ),
    tags(
        (name = "calories", description = "BMR and daily calorie needs"),
        (name = "bmi", description = "Body mass index and derived indices"),
        (name = "energy", description = "Energy unit conversion"),
        (name = "forms", description = "Form-encoded endpoint used by the calculator page"),
        (name = "health", description = "Liveness probe"),
    )
)]
pub struct ApiDoc;

/// Full application router with tracing and CORS applied
pub fn app(config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let mut router = features::routes();
    if config.swagger_ui {
        router = router.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    )
}
