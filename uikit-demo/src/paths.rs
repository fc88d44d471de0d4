//! Platform-specific file locations.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "uikit";
const APPLICATION: &str = "uikit-demo";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Default configuration file, read when `--config` is not given.
///
/// - Linux: `$XDG_CONFIG_HOME/uikit-demo/config.toml`
/// - macOS: `~/Library/Application Support/dev.uikit.uikit-demo/config.toml`
/// - Windows: `C:\Users\<User>\AppData\Roaming\uikit\uikit-demo\config\config.toml`
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Suggested log file location, shown in `--help`.
pub fn log_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join("latest.log"))
}
