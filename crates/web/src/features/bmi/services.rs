use calculator::{
    dto::bmi::{BmiRequest, BmiResponse},
    error::Result,
    services::bmi_computation,
};

pub fn calculate_bmi(request: &BmiRequest) -> Result<BmiResponse> {
    let metric = request.to_metric()?;
    let result = bmi_computation::calculate_bmi(metric.weight_kg, metric.height_cm)?;

    tracing::debug!(
        bmi = result.bmi,
        classification = %result.classification,
        "BMI calculation complete"
    );

    Ok(BmiResponse::new(result, request.measurements.unit_system))
}
