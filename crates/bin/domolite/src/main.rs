//! # domolite — smart-home walkthrough binary
//!
//! Composition root that wires configuration, logging, and the registry
//! together and runs the walkthrough.
//!
//! ## Responsibilities
//! - Load configuration (`domolite.toml`, env overrides)
//! - Initialize the tracing subscriber (diagnostics go to stderr; stdout is
//!   reserved for the walkthrough report)
//! - Populate a registry from the configured device entries
//! - Run the walkthrough against locked stdout
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::io::Write;

use anyhow::Context;
use domolite_app::walkthrough;
use domolite_domain::registry::Registry;
use tracing_subscriber::EnvFilter;

use config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;
    init_tracing(&config.logging.filter);

    let mut registry = Registry::new();
    for entry in config.devices {
        registry.add(entry.into_device());
    }
    tracing::info!(devices = registry.len(), "registry populated");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    walkthrough::run(&registry, &mut out).context("running the walkthrough")?;
    out.flush()?;

    Ok(())
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
