//! Configuration loading and CLI merging

mod merge;

pub use merge::{merge_cli_with_config, CliOverrides};

use figment::providers::{Env, Format, Toml, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::Config;
use crate::error::{BundleError, Result};

/// Config files looked up in the bundle root, in order.
pub const CONFIG_FILE_NAMES: [&str; 4] =
    ["code-bundle.toml", ".code-bundle.toml", ".code-bundle.yml", ".code-bundle.yaml"];

/// Prefix for environment overrides, e.g. `CODE_BUNDLE_AUTHOR`.
pub const ENV_PREFIX: &str = "CODE_BUNDLE_";

/// Load options from a config file and the environment.
///
/// An explicit `config_path` must exist; otherwise the first of
/// [`CONFIG_FILE_NAMES`] found in `root` is used, if any. Environment
/// variables override file values.
pub fn load_config(root: &Path, config_path: Option<&Path>) -> Result<Config> {
    let file = match config_path {
        Some(path) if !path.is_file() => {
            return Err(BundleError::ConfigNotFound(path.to_path_buf()));
        }
        Some(path) => Some(path.to_path_buf()),
        None => discover_config_file(root),
    };

    let mut figment = Figment::new();
    if let Some(path) = file {
        debug!("loading config from {}", path.display());
        figment = if is_yaml(&path) {
            figment.merge(Yaml::file(path))
        } else {
            figment.merge(Toml::file(path))
        };
    }
    figment = figment.merge(Env::prefixed(ENV_PREFIX));

    figment.extract().map_err(|e| BundleError::Config(Box::new(e)))
}

fn discover_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES.iter().map(|name| root.join(name)).find(|path| path.is_file())
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("yml") || e.eq_ignore_ascii_case("yaml"))
        .unwrap_or(false)
}
