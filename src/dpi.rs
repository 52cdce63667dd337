//! Writing the per-monitor DPI value and making Windows pick it up.

use std::io::Write;

use crate::{
    error::DpiError,
    monitor::MonitorRecord,
    platform::{DisplayDevice, DisplayPlatform},
    types::{DpiLevel, Resolution},
};

type Result<T = ()> = std::result::Result<T, DpiError>;

/// Writes `level` as the DPI value of the monitor with the given registry key.
///
/// A failed write is logged and otherwise ignored.
pub fn set_dpi_override(platform: &impl DisplayPlatform, registry_key: &str, level: DpiLevel) {
    match platform.write_dpi_value(registry_key, level) {
        Ok(()) => log::debug!("Wrote DPI value {} to {}", level, registry_key),
        Err(err) => log::warn!("Could not write DPI value for {}: {}", registry_key, err),
    }
}

/// Shrinks the adapter's resolution by one pixel and restores it right away,
/// which makes Windows re-read the DPI settings.
///
/// Progress is written to `out`. Returns the restored resolution. Fails only
/// if the current resolution cannot be queried.
pub fn bounce_resolution(
    platform: &impl DisplayPlatform,
    adapter: &DisplayDevice,
    out: &mut impl Write,
) -> Result<Resolution> {
    let original = platform
        .current_resolution(&adapter.name)
        .ok_or_else(|| DpiError::ResolutionUnavailable(adapter.name.to_string()))?;
    let temporary = original.shrunk_by_one();

    writeln!(out, "Changing resolution temporarily to {}...", temporary)?;
    if let Err(err) = platform.change_resolution(&adapter.name, temporary) {
        log::warn!("Temporary resolution change failed: {}", err);
    }

    writeln!(out, "Restoring resolution to {}...", original)?;
    if let Err(err) = platform.change_resolution(&adapter.name, original) {
        log::warn!("Restoring the resolution failed: {}", err);
    }

    Ok(original)
}

/// Applies `level` to `monitor` and refreshes its adapter
pub fn apply_dpi(
    platform: &impl DisplayPlatform,
    monitor: &MonitorRecord,
    level: DpiLevel,
    out: &mut impl Write,
) -> Result<Resolution> {
    writeln!(out, "Changing DPI value in registry to {}", level)?;
    set_dpi_override(platform, &monitor.registry_key, level);
    bounce_resolution(platform, &monitor.adapter, out)
}
