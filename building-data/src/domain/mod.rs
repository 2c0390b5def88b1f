mod consumption;
mod metadata;
mod readings;
mod zone;

pub use consumption::ConsumptionRecord;
pub use metadata::Metadata;
pub use readings::{Co2Record, ProductionRecord, TemperatureRecord};
pub use zone::{Level, Orientation, ParseLevelError, ParseOrientationError};
