//! Looking up the default monitor name in `dpi.cfg`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the config file holding the default monitor name
pub const CONFIG_FILENAME: &str = "dpi.cfg";

/// Longest monitor name taken from a config file
pub const MAX_NAME_LEN: usize = 254;

/// Extracts the monitor name (first whitespace delimited token) from config file contents
pub fn parse_name_token(contents: &str) -> Option<String> {
    contents
        .split_whitespace()
        .next()
        .map(|token| token.chars().take(MAX_NAME_LEN).collect())
}

/// Reads the monitor name from the config file at `path`.
///
/// Returns `Ok(None)` if the file does not exist or holds no token.
pub fn read_monitor_name(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(parse_name_token(&contents)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

/// The places `dpi.cfg` is looked for, in order
pub fn search_paths(working_dir: &Path, exe_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = vec![working_dir.join(CONFIG_FILENAME)];
    if let Some(exe_dir) = exe_dir {
        paths.push(exe_dir.join(CONFIG_FILENAME));
    }
    paths
}

/// Returns the monitor name from the first `dpi.cfg` found in `paths`
pub fn locate_monitor_name(paths: &[PathBuf]) -> io::Result<Option<String>> {
    for path in paths {
        if !path.is_file() {
            log::info!("{} not found", path.display());
            continue;
        }

        log::debug!("Reading monitor name from {}", path.display());
        return read_monitor_name(path);
    }

    Ok(None)
}

/// Directory containing the running executable
pub fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}
