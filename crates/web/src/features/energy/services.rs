use calculator::{
    dto::energy::{EnergyConversionRequest, EnergyConversionResponse},
    error::Result,
    services::unit_conversion,
};

pub fn convert_energy(request: &EnergyConversionRequest) -> Result<EnergyConversionResponse> {
    let (from_unit, to_unit) = request.units()?;
    let converted = unit_conversion::convert_energy(request.value, from_unit, to_unit)?;

    tracing::debug!(
        value = request.value,
        %from_unit,
        %to_unit,
        converted,
        "Energy conversion complete"
    );

    Ok(EnergyConversionResponse::new(request, converted))
}
