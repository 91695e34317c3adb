// SPDX-License-Identifier: MPL-2.0
//! Where the carousel keeps its files.
//!
//! Two directories are used: the config directory holds `settings.toml`
//! (user preferences), the data directory holds `state.cbor` (the last
//! opened directory).
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_CAROUSEL_DATA_DIR`, `ICED_CAROUSEL_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate, with [`APP_NAME`] appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name appended to the platform default locations.
pub const APP_NAME: &str = "IcedCarousel";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "ICED_CAROUSEL_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_CAROUSEL_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` arguments.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err()
        || CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
    {
        tracing::warn!("CLI directory overrides were already initialized");
    }
}

/// One directory kind: its CLI slot, env var and platform default.
struct DirSource {
    cli: &'static OnceLock<Option<PathBuf>>,
    env_var: &'static str,
    platform: fn() -> Option<PathBuf>,
}

const DATA: DirSource = DirSource {
    cli: &CLI_DATA_DIR,
    env_var: ENV_DATA_DIR,
    platform: dirs::data_dir,
};

const CONFIG: DirSource = DirSource {
    cli: &CLI_CONFIG_DIR,
    env_var: ENV_CONFIG_DIR,
    platform: dirs::config_dir,
};

impl DirSource {
    fn resolve(&self, override_path: Option<PathBuf>) -> Option<PathBuf> {
        if let Some(path) = override_path {
            return Some(path);
        }
        if let Some(path) = self.cli.get().and_then(Clone::clone) {
            return Some(path);
        }
        match std::env::var(self.env_var) {
            Ok(path) if !path.is_empty() => return Some(PathBuf::from(path)),
            _ => {}
        }
        (self.platform)().map(|mut path| {
            path.push(APP_NAME);
            path
        })
    }
}

/// Returns the data directory (application state, not preferences).
///
/// - Linux: `~/.local/share/IcedCarousel/`
/// - macOS: `~/Library/Application Support/IcedCarousel/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedCarousel\`
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the data directory, preferring `override_path` when given.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    DATA.resolve(override_path)
}

/// Returns the config directory (`settings.toml`).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the config directory, preferring `override_path` when given.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    CONFIG.resolve(override_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-global; serialize tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn platform_default_ends_with_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);
        std::env::remove_var(ENV_CONFIG_DIR);

        for path in [get_app_data_dir(), get_app_config_dir()].into_iter().flatten() {
            assert!(path.ends_with(APP_NAME));
        }
    }

    #[test]
    fn override_path_takes_precedence() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/config");

        let override_path = PathBuf::from("/custom/config");
        assert_eq!(
            get_app_config_dir_with_override(Some(override_path.clone())),
            Some(override_path)
        );

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn env_var_overrides_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/test/data/dir");

        assert_eq!(get_app_data_dir(), Some(PathBuf::from("/test/data/dir")));

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.ends_with(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
