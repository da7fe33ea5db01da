//! Describe — introspection over the device variants as a dispatch table.
//!
//! Each known variant is a static [`VariantSpec`]: its display name, a
//! constructor producing a default-initialized throwaway instance, and the
//! declared fields in order, each paired with an accessor. Resolving a kind
//! name walks this table; there is no runtime reflection.

use crate::device::{Device, DeviceKind};
use crate::error::{DescribeError, DomoliteError};

/// A single typed field value read out of a device.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// A declared field: its name and how to read it from a device.
///
/// The accessor returns `None` when the device does not carry the field,
/// which cannot happen for instances built by the owning [`VariantSpec`].
pub struct FieldSpec {
    pub name: &'static str,
    pub read: fn(&Device) -> Option<FieldValue>,
}

/// A known device variant in the dispatch table.
pub struct VariantSpec {
    pub name: &'static str,
    pub construct: fn() -> Device,
    pub fields: &'static [FieldSpec],
}

fn read_name(device: &Device) -> Option<FieldValue> {
    Some(FieldValue::Text(device.name.clone()))
}

fn read_energy_consumption(device: &Device) -> Option<FieldValue> {
    Some(FieldValue::Float(device.energy_consumption))
}

fn read_brightness(device: &Device) -> Option<FieldValue> {
    device.brightness().map(FieldValue::Int)
}

fn read_temperature(device: &Device) -> Option<FieldValue> {
    device.temperature().map(FieldValue::Float)
}

fn default_light() -> Device {
    Device::builder().kind(DeviceKind::default_light()).build()
}

fn default_thermostat() -> Device {
    Device::builder().kind(DeviceKind::default_thermostat()).build()
}

static LIGHT_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        name: "name",
        read: read_name,
    },
    FieldSpec {
        name: "energy_consumption",
        read: read_energy_consumption,
    },
    FieldSpec {
        name: "brightness",
        read: read_brightness,
    },
];

static THERMOSTAT_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        name: "name",
        read: read_name,
    },
    FieldSpec {
        name: "energy_consumption",
        read: read_energy_consumption,
    },
    FieldSpec {
        name: "temperature",
        read: read_temperature,
    },
];

static VARIANTS: [VariantSpec; 2] = [
    VariantSpec {
        name: "Light",
        construct: default_light,
        fields: &LIGHT_FIELDS,
    },
    VariantSpec {
        name: "Thermostat",
        construct: default_thermostat,
        fields: &THERMOSTAT_FIELDS,
    },
];

/// Resolve a kind name to its table entry, ignoring ASCII case.
///
/// # Errors
///
/// Returns [`DescribeError::UnknownKind`] when no variant matches.
pub fn variant(kind_name: &str) -> Result<&'static VariantSpec, DomoliteError> {
    VARIANTS
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(kind_name))
        .ok_or_else(|| DescribeError::UnknownKind(kind_name.to_string()).into())
}

/// Render the introspection report for a kind.
///
/// Constructs a default instance of the variant and lists every requested
/// name that matches a declared field as a `field = value` line, in declared
/// order. Unknown field names are skipped. The report starts with a
/// `Class:` header and is trimmed of trailing whitespace.
///
/// # Errors
///
/// Returns [`DescribeError::UnknownKind`] when `kind_name` matches no
/// variant.
pub fn report(kind_name: &str, field_names: &[&str]) -> Result<String, DomoliteError> {
    let spec = variant(kind_name)?;
    let instance = (spec.construct)();

    let mut out = format!("Class: {}\n", spec.name);
    for field in spec.fields.iter().filter(|f| field_names.contains(&f.name)) {
        if let Some(value) = (field.read)(&instance) {
            out.push_str(&format!("{} = {value}\n", field.name));
        }
    }
    Ok(out.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_default_brightness_for_light() {
        let report = report("Light", &["brightness"]).unwrap();
        assert_eq!(report, "Class: Light\nbrightness = 0");
    }

    #[test]
    fn should_report_default_temperature_for_thermostat() {
        let report = report("Thermostat", &["temperature"]).unwrap();
        assert_eq!(report, "Class: Thermostat\ntemperature = 20");
    }

    #[test]
    fn should_fail_for_unknown_kind() {
        let result = report("NoSuchType", &["brightness"]);
        assert!(matches!(
            result,
            Err(DomoliteError::Describe(DescribeError::UnknownKind(name))) if name == "NoSuchType"
        ));
    }

    #[test]
    fn should_resolve_kind_names_ignoring_ascii_case() {
        assert!(report("light", &["brightness"]).is_ok());
        assert!(report("THERMOSTAT", &["temperature"]).is_ok());
    }

    #[test]
    fn should_list_fields_in_declared_order_not_request_order() {
        let report = report("Light", &["brightness", "energy_consumption"]).unwrap();
        assert_eq!(
            report,
            "Class: Light\nenergy_consumption = 0\nbrightness = 0"
        );
    }

    #[test]
    fn should_skip_unknown_field_names() {
        let report = report("Light", &["voltage", "brightness"]).unwrap();
        assert_eq!(report, "Class: Light\nbrightness = 0");
    }

    #[test]
    fn should_skip_fields_of_the_other_variant() {
        let report = report("Light", &["temperature", "brightness"]).unwrap();
        assert_eq!(report, "Class: Light\nbrightness = 0");
    }

    #[test]
    fn should_reduce_to_the_header_when_no_field_matches() {
        let report = report("Thermostat", &[]).unwrap();
        assert_eq!(report, "Class: Thermostat");
    }

    #[test]
    fn should_display_whole_floats_without_a_fraction() {
        assert_eq!(FieldValue::Float(20.0).to_string(), "20");
        assert_eq!(FieldValue::Float(22.5).to_string(), "22.5");
    }

    #[test]
    fn should_display_ints_and_text_verbatim() {
        assert_eq!(FieldValue::Int(-3).to_string(), "-3");
        assert_eq!(FieldValue::Text("Reading Light".to_string()).to_string(), "Reading Light");
    }
}
