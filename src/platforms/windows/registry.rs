use windows::Win32::Foundation::{ERROR_FILE_NOT_FOUND, ERROR_NO_MORE_ITEMS, WIN32_ERROR};
use windows::Win32::System::Registry::{
    HKEY, HKEY_CURRENT_USER, KEY_QUERY_VALUE, KEY_READ, KEY_SET_VALUE, REG_DWORD, REG_SAM_FLAGS,
    RegCloseKey, RegEnumKeyExW, RegOpenKeyExW, RegSetValueExW,
};
use windows::core::{PCWSTR, PWSTR};

use super::display::{from_wide, to_wide};
use crate::platform::PlatformError;

/// Registry key names are at most 255 characters
const MAX_KEY_LEN: usize = 256;

/// An open key below `HKEY_CURRENT_USER`, closed on drop
pub struct RegKey(HKEY);

fn check(call: &'static str, status: WIN32_ERROR) -> Result<(), PlatformError> {
    if status.is_err() {
        return Err(PlatformError::WinAPI {
            call,
            code: status.0 as i64,
        });
    }
    Ok(())
}

impl RegKey {
    fn open(path: &str, access: REG_SAM_FLAGS) -> Result<Self, PlatformError> {
        let wide_path = to_wide(path);
        let mut key = HKEY::default();
        // SAFETY: `wide_path` is null terminated and `key` is closed by `Drop`
        let status = unsafe {
            RegOpenKeyExW(
                HKEY_CURRENT_USER,
                PCWSTR(wide_path.as_ptr()),
                None,
                access,
                &mut key,
            )
        };
        if status == ERROR_FILE_NOT_FOUND {
            return Err(PlatformError::KeyNotFound(path.to_string()));
        }
        check("RegOpenKeyExW", status)?;
        Ok(Self(key))
    }

    pub fn open_read(path: &str) -> Result<Self, PlatformError> {
        Self::open(path, KEY_READ)
    }

    pub fn open_write(path: &str) -> Result<Self, PlatformError> {
        Self::open(path, KEY_SET_VALUE | KEY_QUERY_VALUE)
    }

    /// Names of all direct subkeys in enumeration order
    pub fn subkey_names(&self) -> Result<Vec<String>, PlatformError> {
        let mut names = Vec::new();
        let mut buffer = [0u16; MAX_KEY_LEN];

        for index in 0.. {
            let mut len = buffer.len() as u32;
            // SAFETY: `len` holds the capacity of `buffer` in characters
            let status = unsafe {
                RegEnumKeyExW(
                    self.0,
                    index,
                    Some(PWSTR(buffer.as_mut_ptr())),
                    &mut len,
                    None,
                    None,
                    None,
                    None,
                )
            };
            if status == ERROR_NO_MORE_ITEMS {
                break;
            }
            check("RegEnumKeyExW", status)?;

            names.push(from_wide(&buffer[..len as usize]));
        }

        Ok(names)
    }

    /// Writes a REG_DWORD value
    pub fn set_dword(&self, name: &str, value: u32) -> Result<(), PlatformError> {
        let wide_name = to_wide(name);
        let bytes = value.to_le_bytes();
        // SAFETY: `wide_name` is null terminated and `bytes` holds exactly one DWORD
        let status = unsafe {
            RegSetValueExW(
                self.0,
                PCWSTR(wide_name.as_ptr()),
                None,
                REG_DWORD,
                Some(&bytes),
            )
        };
        check("RegSetValueExW", status)
    }
}

impl Drop for RegKey {
    fn drop(&mut self) {
        // SAFETY: the handle was opened by `RegKey::open`
        let _ = unsafe { RegCloseKey(self.0) };
    }
}
