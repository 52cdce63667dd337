//! Platform backends implementing [`crate::DisplayPlatform`]

#[cfg(target_os = "windows")]
pub mod windows;
