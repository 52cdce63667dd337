use core::fmt;

use crate::platform::{DisplayDevice, DisplayPlatform, PlatformError};

/// A monitor matched to its per-monitor DPI registry key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonitorRecord {
    /// Short name taken from the monitor's hardware id, e.g. `LGD047A`
    pub monitor_name: String,
    /// The adapter driving the monitor
    pub adapter: DisplayDevice,
    /// The monitor device itself
    pub monitor: DisplayDevice,
    /// Subkey below the per-monitor settings path, starts with `monitor_name`
    pub registry_key: String,
}

impl fmt::Display for MonitorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DeviceID: {}", self.adapter.id)?;
        writeln!(f, "DeviceName: {}", self.adapter.name)?;
        writeln!(f, "Monitor DeviceID: {}", self.monitor.id)?;
        writeln!(f, "Monitor DeviceName: {}", self.monitor.name)?;
        write!(f, "Registry key name: {}", self.registry_key)
    }
}

/// Extracts the segment between the first two backslashes of a device id.
///
/// `MONITOR\LGD047A\{4d36e96e-...}\0001` yields `LGD047A`. Ids with fewer
/// than two separators, or an empty segment, yield `None`.
pub fn parse_monitor_name(device_id: &str) -> Option<&str> {
    let (_, rest) = device_id.split_once('\\')?;
    let (name, _) = rest.split_once('\\')?;
    if name.is_empty() {
        return None;
    }
    Some(name)
}

/// Returns the first key that starts with `monitor_name`
pub fn match_registry_key<'k>(
    monitor_name: &str,
    keys: impl IntoIterator<Item = &'k str>,
) -> Option<&'k str> {
    keys.into_iter().find(|key| key.starts_with(monitor_name))
}

/// Matches the attached monitors against the per-monitor DPI registry keys
#[derive(Debug, Clone)]
pub struct MonitorResolver<P> {
    platform: P,
}

impl<P: DisplayPlatform> MonitorResolver<P> {
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Lists every adapter that has a monitor attached, together with that monitor
    pub fn enumerate_adapters(&self) -> Vec<(DisplayDevice, DisplayDevice)> {
        let mut result = Vec::new();

        let mut dev_num: u32 = 0;
        while let Some(adapter) = self.platform.adapter(dev_num) {
            match self.platform.monitor(&adapter) {
                Some(monitor) => {
                    log::debug!("{}: {} - {}", dev_num, adapter.name, monitor.id);
                    result.push((adapter, monitor));
                }
                None => log::debug!("{}: {} has no monitor attached", dev_num, adapter.name),
            }

            dev_num += 1; // advance to next display device
        }

        result
    }

    /// Lists the per-monitor DPI registry keys, empty if there are none
    pub fn enumerate_registry_keys(&self) -> Vec<String> {
        match self.platform.per_monitor_keys() {
            Ok(keys) => {
                log::debug!("Discovered {} per-monitor registry keys", keys.len());
                keys
            }
            Err(PlatformError::KeyNotFound(path)) => {
                log::debug!("Registry key {} does not exist", path);
                Vec::new()
            }
            Err(err) => {
                log::warn!("Could not read per-monitor registry keys: {}", err);
                Vec::new()
            }
        }
    }

    /// Returns at most `limit` matched monitors in adapter enumeration order
    pub fn list_monitors(&self, limit: usize) -> Vec<MonitorRecord> {
        let adapters = self.enumerate_adapters();
        let keys = self.enumerate_registry_keys();

        adapters
            .into_iter()
            .filter_map(|(adapter, monitor)| {
                let Some(monitor_name) = parse_monitor_name(&monitor.id) else {
                    log::debug!("Skipping monitor with unexpected id {}", monitor.id);
                    return None;
                };
                let Some(registry_key) =
                    match_registry_key(monitor_name, keys.iter().map(String::as_str))
                else {
                    log::debug!("No registry key for monitor {}", monitor_name);
                    return None;
                };

                Some(MonitorRecord {
                    monitor_name: monitor_name.to_string(),
                    registry_key: registry_key.to_string(),
                    adapter,
                    monitor,
                })
            })
            .take(limit)
            .collect()
    }

    /// Returns all matched monitors
    pub fn monitors(&self) -> Vec<MonitorRecord> {
        self.list_monitors(usize::MAX)
    }

    /// Finds the monitor whose name equals `name` exactly
    pub fn get_monitor(&self, name: &str) -> Option<MonitorRecord> {
        self.monitors()
            .into_iter()
            .find(|monitor| monitor.monitor_name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_between_first_two_separators() {
        assert_eq!(
            parse_monitor_name(r"MonitorID\LGD047A\{GUID}"),
            Some("LGD047A")
        );
        assert_eq!(
            parse_monitor_name(r"MONITOR\DEL40B6\{4d36e96e-e325-11ce-bfc1-08002be10318}\0004"),
            Some("DEL40B6")
        );
    }

    #[test]
    fn ids_without_two_separators_are_rejected() {
        assert_eq!(parse_monitor_name(""), None);
        assert_eq!(parse_monitor_name("MONITOR"), None);
        assert_eq!(parse_monitor_name(r"MONITOR\LGD047A"), None);
        assert_eq!(parse_monitor_name(r"MONITOR\\0001"), None);
    }

    #[test]
    fn first_prefix_match_wins() {
        let keys = ["LGD047A123", "DEL040B456", "LGD047A999"];
        assert_eq!(
            match_registry_key("LGD047A", keys.iter().copied()),
            Some("LGD047A123")
        );
        assert_eq!(
            match_registry_key("DEL040B", keys.iter().copied()),
            Some("DEL040B456")
        );
        assert_eq!(match_registry_key("SAM0F00", keys.iter().copied()), None);
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        let keys = ["lgd047a123"];
        assert_eq!(match_registry_key("LGD047A", keys.iter().copied()), None);
    }
}
