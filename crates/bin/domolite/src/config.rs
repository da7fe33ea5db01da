//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `domolite.toml` in the working directory. Every field has a
//! default so the file is optional; with no file at all the walkthrough runs
//! against the built-in sample devices. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use domolite_domain::device::{Device, DeviceKind};

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Devices to register before the walkthrough.
    pub devices: Vec<DeviceEntry>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// One device to register, as written in the config file.
///
/// The variant attribute may be omitted; it then takes the documented
/// default (brightness 0, temperature 20.0).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DeviceEntry {
    Light {
        name: String,
        #[serde(default)]
        energy: f64,
        #[serde(default)]
        brightness: i64,
    },
    Thermostat {
        name: String,
        #[serde(default)]
        energy: f64,
        #[serde(default = "default_temperature")]
        temperature: f64,
    },
}

fn default_temperature() -> f64 {
    DeviceKind::DEFAULT_TEMPERATURE
}

impl DeviceEntry {
    /// Build the domain device described by this entry.
    #[must_use]
    pub fn into_device(self) -> Device {
        match self {
            Self::Light {
                name,
                energy,
                brightness,
            } => Device::builder()
                .name(name)
                .energy_consumption(energy)
                .kind(DeviceKind::light(brightness))
                .build(),
            Self::Thermostat {
                name,
                energy,
                temperature,
            } => Device::builder()
                .name(name)
                .energy_consumption(energy)
                .kind(DeviceKind::thermostat(temperature))
                .build(),
        }
    }
}

impl Config {
    /// Load configuration from `domolite.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("domolite.toml")?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("DOMOLITE_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            devices: default_devices(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "domolite=info".to_string(),
        }
    }
}

/// The sample devices the walkthrough demonstrates when no file overrides
/// them.
fn default_devices() -> Vec<DeviceEntry> {
    vec![
        DeviceEntry::Light {
            name: "Reading Light".to_string(),
            energy: 5.5,
            brightness: 70,
        },
        DeviceEntry::Thermostat {
            name: "Living Room Thermostat".to_string(),
            energy: 12.3,
            temperature: 22.5,
        },
        DeviceEntry::Light {
            name: "Kitchen Light".to_string(),
            energy: 4.2,
            brightness: 80,
        },
    ]
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
}
