use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

const DEFAULT_CONFIG_PATH: &str = "dashboard-config.toml";

fn default_dir() -> PathBuf {
    PathBuf::from("output/data")
}

fn default_consumption_file() -> String {
    "consommation.csv".to_string()
}

fn default_production_file() -> String {
    "production.csv".to_string()
}

fn default_temperature_file() -> String {
    "temperature.csv".to_string()
}

fn default_co2_file() -> String {
    "co2.csv".to_string()
}

fn default_metadata_file() -> String {
    "metadata.json".to_string()
}

/// Location of the generated dataset files.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_consumption_file")]
    pub consumption_file: String,
    #[serde(default = "default_production_file")]
    pub production_file: String,
    #[serde(default = "default_temperature_file")]
    pub temperature_file: String,
    #[serde(default = "default_co2_file")]
    pub co2_file: String,
    #[serde(default = "default_metadata_file")]
    pub metadata_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            consumption_file: default_consumption_file(),
            production_file: default_production_file(),
            temperature_file: default_temperature_file(),
            co2_file: default_co2_file(),
            metadata_file: default_metadata_file(),
        }
    }
}

impl DataConfig {
    /// Data directory with the given file name joined on.
    pub fn path_of(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    pub fn with_dir<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,
}

impl AppConfig {
    /// Reads `DASHBOARD_CONFIG`, or `dashboard-config.toml` when unset.
    /// Only the default file may be absent; built-in defaults apply then.
    pub fn load() -> anyhow::Result<Self> {
        use std::env;

        match env::var("DASHBOARD_CONFIG") {
            Ok(path) => Self::from_file(&path),
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config {}: {e}", path.display()))?;
        let cfg: AppConfig = toml::from_str(&contents)?;
        Ok(cfg)
    }
}
