//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "gridedit";
const APPLICATION: &str = "gridedit";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for logs and other regenerable data.
///
/// - Linux: `$XDG_CACHE_HOME/gridedit` or `~/.cache/gridedit`
/// - macOS: `~/Library/Caches/dev.gridedit.gridedit`
/// - Windows: `C:\Users\<User>\AppData\Local\gridedit\gridedit\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the path to the log file, creating its directory if needed.
///
/// Falls back to the working directory when no cache directory is available.
pub fn log_file() -> PathBuf {
    const NAME: &str = "gridedit-cli.log";

    match cache_dir() {
        Some(dir) if fs::create_dir_all(&dir).is_ok() => dir.join(NAME),
        _ => PathBuf::from(NAME),
    }
}
