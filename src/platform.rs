use core::fmt;

use thiserror::Error;

use crate::types::{DpiLevel, Resolution};

/// Registry path (below `HKEY_CURRENT_USER`) holding one subkey per monitor
pub const PER_MONITOR_SETTINGS_PATH: &str = r"Control Panel\Desktop\PerMonitorSettings";

/// Name of the value written below a per-monitor subkey
pub const DPI_VALUE_NAME: &str = "DpiValue";

/// Error type for calls into the platform
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    #[error("{call} failed with code {code}")]
    WinAPI { call: &'static str, code: i64 },
    #[error("Registry key {0} does not exist")]
    KeyNotFound(String),
    #[error("Display {0} rejected the mode change (code {1})")]
    ModeChange(String, i32),
}

/// Identity of an adapter or monitor device as reported by the OS
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct DisplayDevice {
    /// Device name, e.g. `\\.\DISPLAY1` for an adapter
    pub name: String,
    /// Human readable description
    pub string: String,
    /// Hardware id, e.g. `MONITOR\LGD047A\{...}\0001` for a monitor
    pub id: String,
    /// Driver registry key
    pub key: String,
}

impl DisplayDevice {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

impl fmt::Display for DisplayDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Device {{ name: {}, string: {}, id: {}, key: {} }}",
            self.name, self.string, self.id, self.key
        )
    }
}

/// The OS services the monitor resolver and the DPI switch are built on.
///
/// The Windows implementation lives in `platforms::windows`; tests provide
/// an in-memory one.
pub trait DisplayPlatform {
    /// Returns the adapter at `index`, or `None` once the index is past the last adapter
    fn adapter(&self, index: u32) -> Option<DisplayDevice>;

    /// Returns the first monitor attached to `adapter`
    fn monitor(&self, adapter: &DisplayDevice) -> Option<DisplayDevice>;

    /// Lists the subkeys of [`PER_MONITOR_SETTINGS_PATH`] in enumeration order.
    ///
    /// A missing path is reported as [`PlatformError::KeyNotFound`].
    fn per_monitor_keys(&self) -> Result<Vec<String>, PlatformError>;

    /// Writes [`DPI_VALUE_NAME`] below `PER_MONITOR_SETTINGS_PATH\registry_key`
    fn write_dpi_value(&self, registry_key: &str, level: DpiLevel) -> Result<(), PlatformError>;

    /// Current resolution of the adapter called `adapter_name`
    fn current_resolution(&self, adapter_name: &str) -> Option<Resolution>;

    /// Switches the adapter called `adapter_name` to `resolution`
    fn change_resolution(
        &self,
        adapter_name: &str,
        resolution: Resolution,
    ) -> Result<(), PlatformError>;
}

impl<P: DisplayPlatform + ?Sized> DisplayPlatform for &P {
    fn adapter(&self, index: u32) -> Option<DisplayDevice> {
        (**self).adapter(index)
    }

    fn monitor(&self, adapter: &DisplayDevice) -> Option<DisplayDevice> {
        (**self).monitor(adapter)
    }

    fn per_monitor_keys(&self) -> Result<Vec<String>, PlatformError> {
        (**self).per_monitor_keys()
    }

    fn write_dpi_value(&self, registry_key: &str, level: DpiLevel) -> Result<(), PlatformError> {
        (**self).write_dpi_value(registry_key, level)
    }

    fn current_resolution(&self, adapter_name: &str) -> Option<Resolution> {
        (**self).current_resolution(adapter_name)
    }

    fn change_resolution(
        &self,
        adapter_name: &str,
        resolution: Resolution,
    ) -> Result<(), PlatformError> {
        (**self).change_resolution(adapter_name, resolution)
    }
}
