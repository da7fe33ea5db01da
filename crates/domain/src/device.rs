//! Device — a controllable smart-home unit with a name and an energy figure.
//!
//! A device is a shared core (`name`, `energy_consumption`) plus a tagged
//! [`DeviceKind`] payload carrying the variant-specific attribute. The name
//! doubles as the display identity and is not required to be unique.

use serde::{Deserialize, Serialize};

/// A controllable smart-home unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    pub energy_consumption: f64,
    #[serde(flatten)]
    pub kind: DeviceKind,
}

/// Variant payload distinguishing the device kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DeviceKind {
    Light { brightness: i64 },
    Thermostat { temperature: f64 },
}

impl DeviceKind {
    /// Brightness a light starts with.
    pub const DEFAULT_BRIGHTNESS: i64 = 0;
    /// Temperature a thermostat starts with.
    pub const DEFAULT_TEMPERATURE: f64 = 20.0;

    /// A light payload with the given brightness.
    #[must_use]
    pub fn light(brightness: i64) -> Self {
        Self::Light { brightness }
    }

    /// A thermostat payload with the given temperature.
    #[must_use]
    pub fn thermostat(temperature: f64) -> Self {
        Self::Thermostat { temperature }
    }

    /// A light payload with the default brightness.
    #[must_use]
    pub fn default_light() -> Self {
        Self::light(Self::DEFAULT_BRIGHTNESS)
    }

    /// A thermostat payload with the default temperature.
    #[must_use]
    pub fn default_thermostat() -> Self {
        Self::thermostat(Self::DEFAULT_TEMPERATURE)
    }

    /// Display name of the kind, as used by introspection requests.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Light { .. } => "Light",
            Self::Thermostat { .. } => "Thermostat",
        }
    }
}

impl Default for DeviceKind {
    fn default() -> Self {
        Self::default_light()
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind_name())
    }
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Announce the device switching on.
    pub fn turn_on(&self) {
        println!("{}", self.status_line(true));
    }

    /// Announce the device switching off.
    pub fn turn_off(&self) {
        println!("{}", self.status_line(false));
    }

    /// Set the brightness and print a confirmation.
    ///
    /// Only lights carry a brightness; on any other variant the call is
    /// ignored. The value is stored as given, without range checks.
    pub fn set_brightness(&mut self, brightness: i64) {
        if let DeviceKind::Light { brightness: value } = &mut self.kind {
            *value = brightness;
            println!("{}", self.brightness_line(brightness));
        }
    }

    /// Set the temperature and print a confirmation.
    ///
    /// Only thermostats carry a temperature; on any other variant the call
    /// is ignored. The value is stored as given, without range checks.
    pub fn set_temperature(&mut self, temperature: f64) {
        if let DeviceKind::Thermostat { temperature: value } = &mut self.kind {
            *value = temperature;
            println!("{}", self.temperature_line(temperature));
        }
    }

    /// The brightness, when this device is a light.
    #[must_use]
    pub fn brightness(&self) -> Option<i64> {
        match self.kind {
            DeviceKind::Light { brightness } => Some(brightness),
            DeviceKind::Thermostat { .. } => None,
        }
    }

    /// The temperature, when this device is a thermostat.
    #[must_use]
    pub fn temperature(&self) -> Option<f64> {
        match self.kind {
            DeviceKind::Thermostat { temperature } => Some(temperature),
            DeviceKind::Light { .. } => None,
        }
    }

    fn status_line(&self, on: bool) -> String {
        let state = if on { "ON" } else { "OFF" };
        format!("{} is now {state}.", self.name)
    }

    fn brightness_line(&self, brightness: i64) -> String {
        format!("{} brightness set to {brightness}.", self.name)
    }

    fn temperature_line(&self, temperature: f64) -> String {
        format!("{} temperature set to {temperature}\u{b0}C.", self.name)
    }
}

/// Step-by-step builder for [`Device`].
///
/// `build` is infallible: the model enforces no invariants, so unset fields
/// fall back to defaults (empty name, zero energy, default light payload).
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    name: Option<String>,
    energy_consumption: Option<f64>,
    kind: Option<DeviceKind>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn energy_consumption(mut self, energy_consumption: f64) -> Self {
        self.energy_consumption = Some(energy_consumption);
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: DeviceKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Consume the builder and return a [`Device`].
    #[must_use]
    pub fn build(self) -> Device {
        Device {
            name: self.name.unwrap_or_default(),
            energy_consumption: self.energy_consumption.unwrap_or_default(),
            kind: self.kind.unwrap_or_default(),
        }
    }
}
