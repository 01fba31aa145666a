//! Shared configuration loader for the quichem tools.
//!
//! `defaults/quichem.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`QuichemConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/quichem.default.toml");

/// Top-level configuration consumed by quichem applications.
#[derive(Debug, Clone, Deserialize)]
pub struct QuichemConfig {
    pub convert: ConvertConfig,
    pub inspect: InspectConfig,
}

/// Conversion defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub format: String,
    pub enclose: bool,
}

impl ConvertConfig {
    /// The extra parameters these settings amount to, for formats that take them.
    pub fn format_options(&self) -> HashMap<String, String> {
        let mut options = HashMap::new();
        if !self.enclose {
            options.insert("enclose".to_string(), "false".to_string());
        }
        options
    }
}

/// Controls inspect output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub transform: String,
    pub treeviz: TreevizConfig,
    pub json: JsonConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreevizConfig {
    pub show_defaults: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonConfig {
    pub pretty: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<QuichemConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<QuichemConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.convert.format, "mhchem");
        assert!(config.convert.enclose);
        assert_eq!(config.inspect.transform, "ast-treeviz");
        assert!(!config.inspect.treeviz.show_defaults);
        assert!(config.inspect.json.pretty);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("convert.format", "html")
            .expect("override to apply")
            .set_override("inspect.treeviz.show_defaults", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.convert.format, "html");
        assert!(config.inspect.treeviz.show_defaults);
    }

    #[test]
    fn user_file_layers_over_defaults() {
        let path = std::env::temp_dir().join(format!(
            "quichem-config-test-{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).expect("temp file");
        writeln!(file, "[convert]\nformat = \"latex\"").expect("write config");

        let config = Loader::new().with_file(&path).build().expect("config to build");
        std::fs::remove_file(&path).ok();

        assert_eq!(config.convert.format, "latex");
        assert!(config.convert.enclose);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/quichem.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.convert.format, "mhchem");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        assert!(Loader::new()
            .with_file("/nonexistent/quichem.toml")
            .build()
            .is_err());
    }

    #[test]
    fn enclose_becomes_a_format_option() {
        let config = Loader::new()
            .set_override("convert.enclose", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(
            config.convert.format_options().get("enclose").map(String::as_str),
            Some("false")
        );
        assert!(load_defaults().unwrap().convert.format_options().is_empty());
    }
}
