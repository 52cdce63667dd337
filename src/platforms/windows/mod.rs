//! Win32 implementation of [`DisplayPlatform`]

mod display;
mod registry;

use crate::{
    platform::{
        DPI_VALUE_NAME, DisplayDevice, DisplayPlatform, PER_MONITOR_SETTINGS_PATH, PlatformError,
    },
    types::{DpiLevel, Resolution},
};

/// Talks to the GDI display APIs and the current user's registry hive
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsPlatform;

impl WindowsPlatform {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayPlatform for WindowsPlatform {
    fn adapter(&self, index: u32) -> Option<DisplayDevice> {
        display::display_device(None, index)
    }

    fn monitor(&self, adapter: &DisplayDevice) -> Option<DisplayDevice> {
        display::display_device(Some(&adapter.name), 0)
    }

    fn per_monitor_keys(&self) -> Result<Vec<String>, PlatformError> {
        let key = registry::RegKey::open_read(PER_MONITOR_SETTINGS_PATH)?;
        key.subkey_names()
    }

    fn write_dpi_value(&self, registry_key: &str, level: DpiLevel) -> Result<(), PlatformError> {
        let path = format!("{}\\{}", PER_MONITOR_SETTINGS_PATH, registry_key);
        let key = registry::RegKey::open_write(&path)?;
        key.set_dword(DPI_VALUE_NAME, level.to_registry_dword())
    }

    fn current_resolution(&self, adapter_name: &str) -> Option<Resolution> {
        display::current_resolution(adapter_name)
    }

    fn change_resolution(
        &self,
        adapter_name: &str,
        resolution: Resolution,
    ) -> Result<(), PlatformError> {
        display::change_resolution(adapter_name, resolution)
    }
}
