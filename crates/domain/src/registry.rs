//! Registry — ordered container of devices.
//!
//! The registry owns its device sequence exclusively; it grows only through
//! [`Registry::add`] and is read through borrowing cursors and sorted views,
//! so insertion order is never disturbed by consumers.

use crate::describe;
use crate::device::Device;
use crate::error::{CursorError, DomoliteError};
use crate::ordering;

/// Ordered, growable collection of devices.
#[derive(Debug, Default)]
pub struct Registry {
    devices: Vec<Device>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a device. No uniqueness or validity checks are applied.
    pub fn add(&mut self, device: Device) {
        self.devices.push(device);
    }

    /// Number of registered devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether the registry holds no devices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Start a fresh traversal over the devices in insertion order.
    ///
    /// Every call returns an independent [`Cursor`] positioned before the
    /// first device.
    #[must_use]
    pub fn iter(&self) -> Cursor<'_> {
        Cursor::new(&self.devices)
    }

    /// The devices sorted by name, ascending and stable.
    ///
    /// Returns a new view; the stored order is untouched.
    #[must_use]
    pub fn sorted_by_name(&self) -> Vec<&Device> {
        let mut view: Vec<&Device> = self.devices.iter().collect();
        view.sort_by(|a, b| ordering::by_name(Some(*a), Some(*b)));
        view
    }

    /// The devices sorted by energy consumption, ascending and stable.
    ///
    /// Returns a new view; the stored order is untouched.
    #[must_use]
    pub fn sorted_by_energy(&self) -> Vec<&Device> {
        let mut view: Vec<&Device> = self.devices.iter().collect();
        view.sort_by(|a, b| ordering::by_energy(Some(*a), Some(*b)));
        view
    }

    /// Render the introspection report for a kind name.
    ///
    /// See [`describe::report`]; the registry contents play no part, the
    /// report is built from a throwaway default instance.
    ///
    /// # Errors
    ///
    /// Returns [`DomoliteError::Describe`] when `kind_name` matches no known
    /// variant.
    #[allow(clippy::unused_self)]
    pub fn describe(
        &self,
        kind_name: &str,
        field_names: &[&str],
    ) -> Result<String, DomoliteError> {
        describe::report(kind_name, field_names)
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Device;
    type IntoIter = Cursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Restartable, forward-only traversal over a registry's devices.
///
/// The cursor starts *before* the first device: [`Cursor::current`] is an
/// error until the first [`Cursor::advance`], and again once the traversal
/// is exhausted. The [`Iterator`] impl drives the same state machine and
/// never exposes the invalid positions.
#[derive(Debug)]
pub struct Cursor<'a> {
    devices: &'a [Device],
    position: Option<usize>,
}

impl<'a> Cursor<'a> {
    fn new(devices: &'a [Device]) -> Self {
        Self {
            devices,
            position: None,
        }
    }

    /// Step to the next device. Returns `false` once past the last one.
    pub fn advance(&mut self) -> bool {
        let next = self.position.map_or(0, |index| index.saturating_add(1));
        self.position = Some(next);
        next < self.devices.len()
    }

    /// The device under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::NotStarted`] before the first `advance` and
    /// [`CursorError::Exhausted`] after the traversal ran past the end.
    pub fn current(&self) -> Result<&'a Device, DomoliteError> {
        match self.position {
            None => Err(CursorError::NotStarted.into()),
            Some(index) => self
                .devices
                .get(index)
                .ok_or_else(|| CursorError::Exhausted.into()),
        }
    }

    /// Rewind to before the first device, restarting the traversal.
    pub fn reset(&mut self) {
        self.position = None;
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = &'a Device;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            self.current().ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DeviceKind;

    fn sample_registry() -> Registry {
        let mut registry = Registry::new();
        registry.add(
            Device::builder()
                .name("Reading Light")
                .energy_consumption(5.5)
                .kind(DeviceKind::light(70))
                .build(),
        );
        registry.add(
            Device::builder()
                .name("Living Room Thermostat")
                .energy_consumption(12.3)
                .kind(DeviceKind::thermostat(22.5))
                .build(),
        );
        registry.add(
            Device::builder()
                .name("Kitchen Light")
                .energy_consumption(4.2)
                .kind(DeviceKind::light(80))
                .build(),
        );
        registry
    }

    fn names<'a>(devices: impl IntoIterator<Item = &'a Device>) -> Vec<&'a str> {
        devices.into_iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn should_start_empty() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn should_count_added_devices() {
        let registry = sample_registry();
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn should_iterate_in_insertion_order_exactly_once() {
        let registry = sample_registry();
        assert_eq!(
            names(&registry),
            vec!["Reading Light", "Living Room Thermostat", "Kitchen Light"]
        );
    }

    #[test]
    fn should_yield_the_same_order_on_an_independent_second_traversal() {
        let registry = sample_registry();
        let first: Vec<&str> = names(registry.iter());
        let second: Vec<&str> = names(registry.iter());
        assert_eq!(first, second);
    }

    #[test]
    fn should_fail_reading_before_the_traversal_starts() {
        let registry = sample_registry();
        let cursor = registry.iter();
        assert!(matches!(
            cursor.current(),
            Err(DomoliteError::Cursor(CursorError::NotStarted))
        ));
    }

    #[test]
    fn should_fail_reading_after_the_traversal_is_exhausted() {
        let registry = sample_registry();
        let mut cursor = registry.iter();
        while cursor.advance() {}
        assert!(matches!(
            cursor.current(),
            Err(DomoliteError::Cursor(CursorError::Exhausted))
        ));
    }

    #[test]
    fn should_report_exhaustion_on_an_empty_registry_after_one_advance() {
        let registry = Registry::new();
        let mut cursor = registry.iter();
        assert!(!cursor.advance());
        assert!(matches!(
            cursor.current(),
            Err(DomoliteError::Cursor(CursorError::Exhausted))
        ));
    }

    #[test]
    fn should_expose_the_current_device_between_advances() {
        let registry = sample_registry();
        let mut cursor = registry.iter();
        assert!(cursor.advance());
        assert_eq!(cursor.current().unwrap().name, "Reading Light");
        assert!(cursor.advance());
        assert_eq!(cursor.current().unwrap().name, "Living Room Thermostat");
    }

    #[test]
    fn should_restart_from_before_the_first_device_after_reset() {
        let registry = sample_registry();
        let mut cursor = registry.iter();
        assert!(cursor.advance());
        assert!(cursor.advance());
        cursor.reset();
        assert!(matches!(
            cursor.current(),
            Err(DomoliteError::Cursor(CursorError::NotStarted))
        ));
        assert!(cursor.advance());
        assert_eq!(cursor.current().unwrap().name, "Reading Light");
    }

    #[test]
    fn should_sort_by_name_ascending() {
        let registry = sample_registry();
        assert_eq!(
            names(registry.sorted_by_name()),
            vec!["Kitchen Light", "Living Room Thermostat", "Reading Light"]
        );
    }

    #[test]
    fn should_sort_by_energy_ascending() {
        let registry = sample_registry();
        assert_eq!(
            names(registry.sorted_by_energy()),
            vec!["Kitchen Light", "Reading Light", "Living Room Thermostat"]
        );
    }

    #[test]
    fn should_not_mutate_the_stored_order_when_sorting() {
        let registry = sample_registry();
        let _ = registry.sorted_by_name();
        let _ = registry.sorted_by_energy();
        assert_eq!(
            names(&registry),
            vec!["Reading Light", "Living Room Thermostat", "Kitchen Light"]
        );
    }

    #[test]
    fn should_keep_insertion_order_between_equal_energy_devices() {
        let mut registry = Registry::new();
        registry.add(
            Device::builder()
                .name("Second Alphabetically")
                .energy_consumption(3.0)
                .build(),
        );
        registry.add(
            Device::builder()
                .name("First Alphabetically")
                .energy_consumption(3.0)
                .build(),
        );
        assert_eq!(
            names(registry.sorted_by_energy()),
            vec!["Second Alphabetically", "First Alphabetically"]
        );
    }

    #[test]
    fn should_render_an_introspection_report() {
        let registry = Registry::new();
        let report = registry.describe("Light", &["brightness"]).unwrap();
        assert!(report.contains("brightness = 0"));
    }

    #[test]
    fn should_propagate_unknown_kind_from_describe() {
        let registry = Registry::new();
        assert!(registry.describe("NoSuchType", &["brightness"]).is_err());
    }
}
