//! Glint probe
//!
//! Selects the platform loader, runs one reload pass against whatever
//! context is current (usually none) and logs what resolved.
//!
//! Settings come from the first argument or `GLINT_SETTINGS`.

use anyhow::{Context, Result};
use glint_core::{Gl, LoaderSettings, Platform, SlotState};

fn load_settings() -> Result<LoaderSettings> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("GLINT_SETTINGS").ok());

    match path {
        Some(path) => LoaderSettings::from_path(&path)
            .with_context(|| format!("loading settings from {path}")),
        None => Ok(LoaderSettings::default()),
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tracing::info!("Glint v{}", glint_core::VERSION);
    let platform = Platform::detect();
    tracing::info!(
        "Host platform: {} (GL library: {})",
        platform.name(),
        platform.gl_library().unwrap_or("<none>")
    );

    let settings = load_settings()?;
    tracing::debug!("settings: {:?}", settings);

    // Only resolves addresses; nothing below calls into the driver.
    let mut gl = unsafe { Gl::from_settings(&settings) }.context("selecting symbol locator")?;
    let report = gl.reload_functions();
    tracing::info!(
        "Resolved {}/{} entry points ({} core, {} extension)",
        report.resolved(),
        report.total(),
        report.core,
        report.extension
    );

    for slot in gl.functions().iter() {
        if slot.state() == SlotState::Unavailable {
            tracing::debug!("unavailable: {}", slot.name());
        }
    }

    for (name, value) in gl.functions().counters().snapshot() {
        tracing::debug!("{} = {}", name, value);
    }

    Ok(())
}
