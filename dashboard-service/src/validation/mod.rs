use building_data::domain::{Co2Record, ConsumptionRecord, ProductionRecord, TemperatureRecord};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

fn finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite { field })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

/// Pure validation of a `ConsumptionRecord`: kWh must be finite and
/// non-negative.
pub fn validate_consumption(r: &ConsumptionRecord) -> Result<(), ValidationError> {
    non_negative("consommation", r.consumption_kwh)
}

pub fn validate_production(r: &ProductionRecord) -> Result<(), ValidationError> {
    non_negative("production", r.production_kwh)
}

/// Temperatures may be negative but never NaN or infinite.
pub fn validate_temperature(r: &TemperatureRecord) -> Result<(), ValidationError> {
    finite("temperature", r.temperature_celsius)
}

pub fn validate_co2(r: &Co2Record) -> Result<(), ValidationError> {
    non_negative("co2", r.co2_ppm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use building_data::domain::{Level, Orientation};
    use time::macros::date;

    fn consumption(kwh: f64) -> ConsumptionRecord {
        ConsumptionRecord {
            zone_id: "Z1".to_string(),
            zone_name: "Open space".to_string(),
            level: Level::Floor1,
            orientation: Orientation::N,
            usage_category: "lighting".to_string(),
            date: date!(2024 - 01 - 01),
            consumption_kwh: kwh,
        }
    }

    #[test]
    fn consumption_validation_accepts_zero() {
        assert!(validate_consumption(&consumption(0.0)).is_ok());
    }

    #[test]
    fn consumption_validation_rejects_negative_kwh() {
        let res = validate_consumption(&consumption(-0.1));
        assert!(matches!(res, Err(ValidationError::Negative { field: "consommation", .. })));
    }

    #[test]
    fn production_validation_rejects_nan() {
        let r = ProductionRecord {
            date: date!(2024 - 01 - 01),
            production_kwh: f64::NAN,
        };
        assert!(matches!(validate_production(&r), Err(ValidationError::NotFinite { .. })));
    }

    #[test]
    fn temperature_validation_allows_sub_zero() {
        let r = TemperatureRecord {
            level: Level::Ground,
            orientation: Orientation::E,
            date: date!(2024 - 01 - 01),
            temperature_celsius: -4.5,
        };
        assert!(validate_temperature(&r).is_ok());
    }
}
