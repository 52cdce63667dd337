//! A library to change the per-monitor DPI scaling on Windows.
//!
//! Monitors are matched to their entries below
//! `HKEY_CURRENT_USER\Control Panel\Desktop\PerMonitorSettings`. Changing the
//! `DpiValue` of an entry and briefly bouncing the resolution of the monitor's
//! adapter makes Windows apply the new scaling.

pub mod commands;
pub mod config;
mod dpi;
mod error;
mod monitor;
mod platform;
pub mod platforms;
mod types;

pub use dpi::*;
pub use error::*;
pub use monitor::*;
pub use platform::*;
pub use types::*;
