//! Walkthrough — the demonstration run over a populated registry.
//!
//! Lists every device through the registry cursor, prints both sorted
//! views, then renders the introspection reports for the two device kinds.
//! Output goes to a caller-supplied sink so the transcript stays assertable.

use std::io;

use domolite_domain::device::Device;
use domolite_domain::error::DomoliteError;
use domolite_domain::registry::Registry;

/// Errors surfaced by the walkthrough.
#[derive(Debug, thiserror::Error)]
pub enum WalkthroughError {
    /// The output sink rejected a write.
    #[error("failed writing the walkthrough report")]
    Io(#[from] io::Error),

    /// A domain operation failed.
    #[error("domain error during the walkthrough")]
    Domain(#[from] DomoliteError),
}

/// Run the full walkthrough against `out`.
///
/// Straight-line sequencing: the device listing in insertion order, the
/// by-name and by-energy views, then the two introspection reports.
///
/// # Errors
///
/// Propagates write failures and any [`DomoliteError`] from the registry;
/// callers are not expected to recover from either.
#[tracing::instrument(skip_all, fields(devices = registry.len()))]
pub fn run(registry: &Registry, out: &mut impl io::Write) -> Result<(), WalkthroughError> {
    writeln!(out, "All devices in the smart home:")?;
    for device in registry {
        write_device_line(out, device)?;
    }

    writeln!(out)?;
    writeln!(out, "Devices sorted by name:")?;
    for device in registry.sorted_by_name() {
        write_device_line(out, device)?;
    }

    writeln!(out)?;
    writeln!(out, "Devices sorted by energy consumption:")?;
    for device in registry.sorted_by_energy() {
        write_device_line(out, device)?;
    }

    writeln!(out)?;
    writeln!(out, "Introspection report for Light:")?;
    writeln!(out, "{}", registry.describe("Light", &["brightness"])?)?;

    writeln!(out)?;
    writeln!(out, "Introspection report for Thermostat:")?;
    writeln!(out, "{}", registry.describe("Thermostat", &["temperature"])?)?;

    Ok(())
}

fn write_device_line(out: &mut impl io::Write, device: &Device) -> io::Result<()> {
    writeln!(
        out,
        "Device: {}, Energy: {}",
        device.name, device.energy_consumption
    )
}
