use calculator::{
    dto::calorie::{CalorieRequest, CalorieResponse},
    error::Result,
    services::calorie_computation,
};

/// Run the calorie calculator for an already validated request
pub fn calculate_calories(request: &CalorieRequest) -> Result<CalorieResponse> {
    let profile = request.to_profile()?;

    let result = calorie_computation::calculate_calories(
        &profile,
        request.bmr_formula,
        request.activity_level,
        request.results_unit,
    )?;

    tracing::debug!(
        formula = %request.bmr_formula,
        activity_level = %request.activity_level,
        bmr = result.bmr,
        daily_calories = result.daily_calories,
        "Calorie calculation complete"
    );

    Ok(CalorieResponse::from(result))
}
