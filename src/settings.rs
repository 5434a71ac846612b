use std::path::Path;

use vecmath_impl::Float3;

use crate::trails::DEFAULT_TRAIL_RATE;

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Error parsing settings file: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Settings {
    pub seed: u64,
    pub particle_count: usize,
    pub steps: u32,
    pub time_step: f32,
    pub trail_rate: f32,
    pub gravity: Float3,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            seed: 1,
            particle_count: 100,
            steps: 24,
            time_step: 1.0 / 24.0,
            trail_rate: DEFAULT_TRAIL_RATE,
            gravity: Float3::new(0.0, 0.0, -9.81),
            verbose: false,
        }
    }
}

impl Settings {
    pub fn from_toml(text: &str) -> Result<Settings, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Settings, SettingsError> {
        let text = std::fs::read_to_string(path)?;
        Settings::from_toml(&text)
    }
}
