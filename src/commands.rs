//! Bodies of the CLI commands, writing their output to any `io::Write`.

use std::io::Write;
use std::path::PathBuf;

use crate::{
    config,
    dpi::apply_dpi,
    error::DpiError,
    monitor::{MonitorRecord, MonitorResolver},
    platform::DisplayPlatform,
    types::{DpiLevel, Resolution},
};

type Result<T = ()> = std::result::Result<T, DpiError>;

/// Where the name of the monitor to change comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorNameSource {
    /// Given on the command line
    Argument(String),
    /// Read from an explicit config file
    ConfigFile(PathBuf),
    /// Read from the first existing `dpi.cfg` in the given paths
    Search(Vec<PathBuf>),
}

impl MonitorNameSource {
    /// Searches the working directory and the executable's directory
    pub fn default_search() -> Result<Self> {
        let working_dir = std::env::current_dir()?;
        let exe_dir = config::exe_dir();
        Ok(MonitorNameSource::Search(config::search_paths(
            &working_dir,
            exe_dir.as_deref(),
        )))
    }

    /// Resolves the monitor name, failing if no source provides one
    pub fn resolve(&self) -> Result<String> {
        let name = match self {
            MonitorNameSource::Argument(name) => Some(name.clone()),
            MonitorNameSource::ConfigFile(path) => {
                log::info!("Reading monitor name from {}", path.display());
                let name = config::read_monitor_name(path)?;
                if name.is_none() {
                    log::info!("{} not found or empty", path.display());
                }
                name
            }
            MonitorNameSource::Search(paths) => {
                log::info!(
                    "No monitor name specified, looking for {}...",
                    config::CONFIG_FILENAME
                );
                config::locate_monitor_name(paths)?
            }
        };

        name.ok_or(DpiError::MonitorNameUnresolved)
    }
}

/// Prints the names of at most `limit` matched monitors, one per line.
///
/// With `long` every identifier of the monitor is printed as well.
pub fn list<P: DisplayPlatform>(
    resolver: &MonitorResolver<P>,
    limit: usize,
    long: bool,
    out: &mut impl Write,
) -> Result {
    for monitor in resolver.list_monitors(limit) {
        writeln!(out, "{}", monitor.monitor_name)?;
        if long {
            writeln!(out, "{}", indent(&monitor.to_string()))?;
        }
    }

    Ok(())
}

/// Changes the DPI level of the monitor named by `source`.
///
/// Returns the monitor that was changed and the resolution it was restored to.
pub fn set<P: DisplayPlatform>(
    resolver: &MonitorResolver<P>,
    level: DpiLevel,
    source: &MonitorNameSource,
    out: &mut impl Write,
) -> Result<(MonitorRecord, Resolution)> {
    let name = source.resolve()?;

    writeln!(out, "Looking for monitor {}...", name)?;
    let monitor = resolver
        .get_monitor(&name)
        .ok_or_else(|| DpiError::MonitorNotFound(name.clone()))?;

    writeln!(
        out,
        "Found monitor {} with following identifiers:",
        monitor.monitor_name
    )?;
    writeln!(out, "{}", monitor)?;

    let resolution = apply_dpi(resolver.platform(), &monitor, level, out)?;
    writeln!(out, "DPI level of {} set to {}", monitor.monitor_name, level)?;

    Ok((monitor, resolution))
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
