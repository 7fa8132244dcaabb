// SPDX-License-Identifier: MPL-2.0
//! Location of the settings directory.
//!
//! The first available source wins:
//! 1. an explicit directory passed by the caller (tests, tooling)
//! 2. `--config-dir` on the command line, see [`init_cli_overrides`]
//! 3. the `FLASH_CUES_CONFIG_DIR` environment variable, when not empty
//! 4. `FlashCues/` under the platform config directory (`dirs`)

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name under the platform config directory.
const APP_NAME: &str = "FlashCues";

/// Environment variable naming the settings directory.
pub const ENV_CONFIG_DIR: &str = "FLASH_CUES_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` value. Only the first call has an effect.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::warn!("config directory override already initialized, ignoring");
    }
}

/// Settings directory, `explicit` taking precedence over every other source.
///
/// Returns `None` only when no source applies and the platform has no
/// config directory.
pub fn config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    let cli = CLI_CONFIG_DIR.get().cloned().flatten();
    let env = std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from);
    first_config_dir([explicit, cli, env], dirs::config_dir())
}

fn first_config_dir(
    overrides: [Option<PathBuf>; 3],
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    overrides
        .into_iter()
        .flatten()
        .find(|path| !path.as_os_str().is_empty())
        .or_else(|| platform.map(|dir| dir.join(APP_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(p: &str) -> Option<PathBuf> {
        Some(PathBuf::from(p))
    }

    #[test]
    fn explicit_directory_wins() {
        let dir = first_config_dir([path("/explicit"), path("/cli"), path("/env")], path("/home"));
        assert_eq!(dir, path("/explicit"));
    }

    #[test]
    fn cli_directory_beats_environment() {
        let dir = first_config_dir([None, path("/cli"), path("/env")], path("/home"));
        assert_eq!(dir, path("/cli"));
    }

    #[test]
    fn empty_environment_value_is_skipped() {
        let dir = first_config_dir([None, None, path("")], path("/home/.config"));
        assert_eq!(dir, path("/home/.config/FlashCues"));
    }

    #[test]
    fn no_source_yields_none() {
        assert_eq!(first_config_dir([None, None, None], None), None);
    }

    #[test]
    fn explicit_argument_is_honoured_by_config_dir() {
        let dir = config_dir(path("/custom/config/path"));
        assert_eq!(dir, path("/custom/config/path"));
    }
}
