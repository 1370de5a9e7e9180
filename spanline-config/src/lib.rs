//! Shared configuration loader for the spanline toolchain.
//!
//! `defaults/spanline.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`SpanlineConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use spanline_view::view::{item::to_instant, ComposeSettings};

const DEFAULT_TOML: &str = include_str!("../defaults/spanline.default.toml");

/// Top-level configuration consumed by spanline applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SpanlineConfig {
    pub view: ViewConfig,
    pub fallback: FallbackConfig,
    pub viewer: ViewerConfig,
}

/// Window math knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    pub margin_ratio: f64,
    pub zoom_floor_seconds: i64,
}

/// Window used when the event set carries no dates at all.
#[derive(Debug, Clone, Deserialize)]
pub struct FallbackConfig {
    /// Date literal in notation syntax (`YYYY-MM-DD` or full datetime).
    pub reference_date: String,
    pub window_days: i64,
}

/// Terminal viewer chrome.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewerConfig {
    pub show_title_bar: bool,
    pub show_status_line: bool,
    pub lane_tint: String,
}

impl SpanlineConfig {
    /// Lower the typed configuration into the settings bag compose() takes.
    ///
    /// An unparseable `reference_date` is reported as a configuration error
    /// rather than silently replaced.
    pub fn compose_settings(&self) -> Result<ComposeSettings, ConfigError> {
        let reference = to_instant(&self.fallback.reference_date).ok_or_else(|| {
            ConfigError::Message(format!(
                "fallback.reference_date {:?} is not a date literal",
                self.fallback.reference_date
            ))
        })?;
        Ok(ComposeSettings {
            margin_ratio: self.view.margin_ratio,
            zoom_floor_secs: self.view.zoom_floor_seconds,
            fallback_reference: reference,
            fallback_window_days: self.fallback.window_days,
            lane_tint: self.viewer.lane_tint.clone(),
        })
    }
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
    pub fn build(self) -> Result<SpanlineConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SpanlineConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.view.margin_ratio, 0.2);
        assert_eq!(config.view.zoom_floor_seconds, 3600);
        assert_eq!(config.fallback.window_days, 14);
        assert!(config.viewer.show_status_line);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("view.zoom_floor_seconds", 60)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.view.zoom_floor_seconds, 60);
    }

    #[test]
    fn defaults_lower_into_compose_settings() {
        let settings = load_defaults()
            .expect("defaults to deserialize")
            .compose_settings()
            .expect("reference date to parse");
        assert_eq!(settings, ComposeSettings::default());
    }

    #[test]
    fn bad_reference_date_is_a_config_error() {
        let config = Loader::new()
            .set_override("fallback.reference_date", "whenever")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(config.compose_settings().is_err());
    }
}
