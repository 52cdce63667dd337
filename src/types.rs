use core::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Contains the resolution of a display
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Creates a new resolution
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The resolution one pixel smaller in each dimension
    pub fn shrunk_by_one(self) -> Self {
        Self::new(self.width.saturating_sub(1), self.height.saturating_sub(1))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Per-monitor DPI level relative to the recommended one.
///
/// `0` is the recommended scaling, negative values step down, positive values
/// step up. The steps are defined by Windows and not mapped to percentages.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DpiLevel(pub i32);

impl DpiLevel {
    /// The REG_DWORD bit pattern stored in the registry (`-1` is `0xFFFFFFFF`)
    pub fn to_registry_dword(self) -> u32 {
        self.0 as u32
    }
}

impl fmt::Display for DpiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug)]
pub enum ParseDpiLevelError {
    #[error("DPI level must be a signed integer")]
    IntError(#[from] std::num::ParseIntError),
}

impl FromStr for DpiLevel {
    type Err = ParseDpiLevelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DpiLevel(s.trim().parse::<i32>()?))
    }
}
