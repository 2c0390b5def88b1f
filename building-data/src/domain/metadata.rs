/// Summary figures computed once when the dataset was generated.
///
/// Carried as-is from the source; nothing in this crate recomputes them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Metadata {
    pub total_surface_area: f64,
    pub pv_surface_area: f64,
    pub total_consumption: f64,
    pub total_production: f64,
    pub average_temperature: f64,
    pub average_co2: f64,
    pub generation_timestamp: String,
}
