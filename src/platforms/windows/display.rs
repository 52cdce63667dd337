use windows::Win32::Graphics::Gdi::{
    CDS_TYPE, ChangeDisplaySettingsExW, DEVMODEW, DISP_CHANGE_SUCCESSFUL, DISPLAY_DEVICEW,
    DM_PELSHEIGHT, DM_PELSWIDTH, ENUM_CURRENT_SETTINGS, EnumDisplayDevicesW, EnumDisplaySettingsW,
};
use windows::core::PCWSTR;

use crate::{
    platform::{DisplayDevice, PlatformError},
    types::Resolution,
};

/// Null terminated UTF-16 copy of `s`
pub(super) fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Reads a null terminated UTF-16 buffer
pub(super) fn from_wide(buffer: &[u16]) -> String {
    let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
    String::from_utf16_lossy(&buffer[..len])
}

/// Returns device `index` below `parent`, or below the desktop if `parent` is `None`
pub fn display_device(parent: Option<&str>, index: u32) -> Option<DisplayDevice> {
    let parent = parent.map(to_wide);
    let parent_ptr = parent
        .as_ref()
        .map_or(PCWSTR::null(), |p| PCWSTR(p.as_ptr()));

    let mut device = DISPLAY_DEVICEW {
        cb: std::mem::size_of::<DISPLAY_DEVICEW>() as u32,
        ..Default::default()
    };

    // SAFETY: `device.cb` holds the struct size and `parent` outlives the call
    let found = unsafe { EnumDisplayDevicesW(parent_ptr, index, &mut device, 0) };
    if !found.as_bool() {
        return None;
    }

    Some(DisplayDevice {
        name: from_wide(&device.DeviceName),
        string: from_wide(&device.DeviceString),
        id: from_wide(&device.DeviceID),
        key: from_wide(&device.DeviceKey),
    })
}

fn empty_devmode() -> DEVMODEW {
    DEVMODEW {
        dmSize: std::mem::size_of::<DEVMODEW>() as u16,
        dmDriverExtra: 0,
        ..Default::default()
    }
}

/// Queries the current resolution of the adapter `name`
pub fn current_resolution(name: &str) -> Option<Resolution> {
    let wide_name = to_wide(name);
    let mut devmode = empty_devmode();

    // SAFETY: `devmode.dmSize` is set and `wide_name` is null terminated
    let ok = unsafe {
        EnumDisplaySettingsW(
            PCWSTR(wide_name.as_ptr()),
            ENUM_CURRENT_SETTINGS,
            &mut devmode,
        )
    };
    if !ok.as_bool() {
        log::debug!("EnumDisplaySettingsW failed for {}", name);
        return None;
    }

    Some(Resolution::new(devmode.dmPelsWidth, devmode.dmPelsHeight))
}

/// Switches the adapter `name` to `resolution` without persisting the mode
pub fn change_resolution(name: &str, resolution: Resolution) -> Result<(), PlatformError> {
    let wide_name = to_wide(name);
    let mut devmode = empty_devmode();
    devmode.dmPelsWidth = resolution.width;
    devmode.dmPelsHeight = resolution.height;
    devmode.dmFields = DM_PELSWIDTH | DM_PELSHEIGHT;

    // SAFETY: `devmode` is initialised and lives for the duration of the call
    let result = unsafe {
        ChangeDisplaySettingsExW(
            PCWSTR(wide_name.as_ptr()),
            Some(&devmode as *const DEVMODEW),
            None,
            CDS_TYPE(0),
            None,
        )
    };

    if result == DISP_CHANGE_SUCCESSFUL {
        log::debug!("{} switched to {}", name, resolution);
        Ok(())
    } else {
        Err(PlatformError::ModeChange(name.to_string(), result.0))
    }
}
