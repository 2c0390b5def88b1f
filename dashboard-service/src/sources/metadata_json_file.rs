use std::path::Path;

use building_data::domain::Metadata;

use crate::loader::LoadError;

/// Shape of `metadata.json` as written by the dataset generator.
#[derive(serde::Deserialize)]
struct MetadataFile {
    surface_totale: f64,
    surface_pv: f64,
    consommation_totale: f64,
    production_totale: f64,
    temperature_moyenne: f64,
    co2_moyen: f64,
    date_generation: String,
}

impl From<MetadataFile> for Metadata {
    fn from(m: MetadataFile) -> Self {
        Metadata {
            total_surface_area: m.surface_totale,
            pv_surface_area: m.surface_pv,
            total_consumption: m.consommation_totale,
            total_production: m.production_totale,
            average_temperature: m.temperature_moyenne,
            average_co2: m.co2_moyen,
            generation_timestamp: m.date_generation,
        }
    }
}

pub fn parse_metadata(path: &Path, bytes: &[u8]) -> Result<Metadata, LoadError> {
    let parsed: MetadataFile = serde_json::from_slice(bytes).map_err(|source| LoadError::Metadata {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parsed.into())
}
