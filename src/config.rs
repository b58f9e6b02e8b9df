//! Application-level configuration loading, including the point-delta presets.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "TALLY_BACK_CONFIG_PATH";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    point_presets: Vec<i32>,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to the
    /// built-in preset set.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let app_config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        presets = ?app_config.point_presets,
                        "loaded point presets from config"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// The point deltas the operator UI should offer as buttons.
    ///
    /// Purely a presentation affordance: score adjustments accept any
    /// integer delta regardless of this set.
    pub fn point_presets(&self) -> &[i32] {
        &self.point_presets
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            point_presets: default_point_presets(),
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    point_presets: Vec<i32>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        Self {
            point_presets: value.point_presets,
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Preset set shipped with the binary.
fn default_point_presets() -> Vec<i32> {
    vec![10, 20, -10, -20]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_config_parses_presets() {
        let raw: RawConfig = serde_json::from_str(r#"{"point_presets": [5, -5]}"#).unwrap();
        let config: AppConfig = raw.into();
        assert_eq!(config.point_presets(), &[5, -5]);
    }

    #[test]
    fn default_presets_match_the_operator_buttons() {
        assert_eq!(AppConfig::default().point_presets(), &[10, 20, -10, -20]);
    }
}
