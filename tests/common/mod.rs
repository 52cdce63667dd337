//! In-memory `DisplayPlatform` shared by the integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use dpiz::{DisplayDevice, DisplayPlatform, DpiLevel, PlatformError, Resolution};

/// Adapters, registry keys and modes of a made-up machine
#[derive(Debug, Default)]
pub struct FakePlatform {
    adapters: Vec<(DisplayDevice, Option<DisplayDevice>)>,
    keys: Option<Vec<String>>,
    resolutions: HashMap<String, Resolution>,
    fail_dpi_write: bool,
    fail_mode_change: bool,
    pub dpi_writes: RefCell<Vec<(String, DpiLevel)>>,
    pub mode_changes: RefCell<Vec<(String, Resolution)>>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an adapter `\\.\DISPLAY<n>` driving a monitor with hardware id `monitor_id`
    pub fn with_monitor(mut self, monitor_id: &str) -> Self {
        let adapter = self.next_adapter();
        let monitor = DisplayDevice::new(format!(r"{}\Monitor0", adapter.name), monitor_id);
        self.adapters.push((adapter, Some(monitor)));
        self
    }

    /// Adds an adapter with nothing attached
    pub fn with_empty_adapter(mut self) -> Self {
        let adapter = self.next_adapter();
        self.adapters.push((adapter, None));
        self
    }

    pub fn with_keys(mut self, keys: &[&str]) -> Self {
        self.keys = Some(keys.iter().map(|k| k.to_string()).collect());
        self
    }

    pub fn with_resolution(mut self, adapter_name: &str, width: u32, height: u32) -> Self {
        self.resolutions
            .insert(adapter_name.to_string(), Resolution::new(width, height));
        self
    }

    pub fn failing_dpi_write(mut self) -> Self {
        self.fail_dpi_write = true;
        self
    }

    pub fn failing_mode_change(mut self) -> Self {
        self.fail_mode_change = true;
        self
    }

    fn next_adapter(&self) -> DisplayDevice {
        let n = self.adapters.len() + 1;
        DisplayDevice {
            name: format!(r"\\.\DISPLAY{}", n),
            string: "Fake Graphics".to_string(),
            id: format!(r"PCI\VEN_0000&DEV_{:04}", n),
            key: String::new(),
        }
    }
}

impl DisplayPlatform for FakePlatform {
    fn adapter(&self, index: u32) -> Option<DisplayDevice> {
        self.adapters
            .get(index as usize)
            .map(|(adapter, _)| adapter.clone())
    }

    fn monitor(&self, adapter: &DisplayDevice) -> Option<DisplayDevice> {
        self.adapters
            .iter()
            .find(|(a, _)| a.name == adapter.name)
            .and_then(|(_, monitor)| monitor.clone())
    }

    fn per_monitor_keys(&self) -> Result<Vec<String>, PlatformError> {
        self.keys.clone().ok_or_else(|| {
            PlatformError::KeyNotFound(dpiz::PER_MONITOR_SETTINGS_PATH.to_string())
        })
    }

    fn write_dpi_value(&self, registry_key: &str, level: DpiLevel) -> Result<(), PlatformError> {
        if self.fail_dpi_write {
            return Err(PlatformError::WinAPI {
                call: "RegOpenKeyExW",
                code: 5,
            });
        }
        self.dpi_writes
            .borrow_mut()
            .push((registry_key.to_string(), level));
        Ok(())
    }

    fn current_resolution(&self, adapter_name: &str) -> Option<Resolution> {
        self.resolutions.get(adapter_name).copied()
    }

    fn change_resolution(
        &self,
        adapter_name: &str,
        resolution: Resolution,
    ) -> Result<(), PlatformError> {
        self.mode_changes
            .borrow_mut()
            .push((adapter_name.to_string(), resolution));
        if self.fail_mode_change {
            return Err(PlatformError::ModeChange(adapter_name.to_string(), -1));
        }
        Ok(())
    }
}
