use std::env;
use std::path::{Path, PathBuf};

use ::config::{Config, ConfigError, Environment, File, FileFormat};

use super::schema::Settings;

/// Points at an explicit config file, bypassing the XDG lookup.
pub const CONFIG_PATH_VAR: &str = "CUEGEN_CONFIG_PATH";

/// Prefix of the `CUEGEN__SECTION__KEY` overrides.
const ENV_PREFIX: &str = "CUEGEN";

impl Settings {
    /// Read the config file found by [`resolve_config_path`], with environment
    /// overrides on top.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(resolve_config_path().as_deref())
    }

    /// Layer `path` (TOML, may be absent) under the `CUEGEN__` environment.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }

        let env = Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("library.extensions")
            .try_parsing(true);

        builder.add_source(env).build()?.try_deserialize()
    }

    /// Settings for this run. A config that fails to load or validate is
    /// replaced by the defaults; the run goes on either way.
    pub fn load_or_default() -> Self {
        let settings = match Self::load() {
            Ok(settings) => settings,
            Err(error) => {
                tracing::warn!(%error, "failed to load config, using defaults");
                return Self::default();
            }
        };

        match settings.validate() {
            Ok(()) => settings,
            Err(reason) => {
                tracing::warn!(%reason, "invalid config, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.template.file_name.trim().is_empty() {
            return Err("template.file_name must not be empty".into());
        }

        let usable = |ext: &String| !ext.trim().trim_start_matches('.').is_empty();
        if !self.library.extensions.iter().any(usable) {
            return Err("library.extensions must name at least one extension".into());
        }

        Ok(())
    }
}

/// `$CUEGEN_CONFIG_PATH` when set, otherwise [`default_config_path`].
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `cuegen/config.toml` under `$XDG_CONFIG_HOME`, or under `~/.config` when
/// that variable is unset or not an absolute path.
pub fn default_config_path() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(|dir| dir.is_absolute())
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|dir| dir.join("cuegen").join("config.toml"))
}
