//! Configuration types for the millrace conversion pipeline.
//!
//! All types implement [`serde::Deserialize`] so a configuration can be
//! loaded from an external source (the CLI reads a TOML file).
//!
//! # Example
//!
//! ```
//! # use millrace::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(!config.conversion().strict());
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Conversion configuration section.
    #[serde(default)]
    conversion: ConversionConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified conversion settings.
    pub fn new(conversion: ConversionConfig) -> Self {
        Self { conversion }
    }

    /// Returns the conversion configuration.
    pub fn conversion(&self) -> &ConversionConfig {
        &self.conversion
    }
}

/// Behavior of the conversion run itself.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConversionConfig {
    /// When set, the first per-shape construction failure aborts the run
    /// instead of being collected as a diagnostic.
    #[serde(default)]
    strict: bool,
}

impl ConversionConfig {
    /// Creates a new [`ConversionConfig`].
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Returns whether strict mode is enabled.
    pub fn strict(&self) -> bool {
        self.strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_str("{}").expect("empty config should parse");
        assert!(!config.conversion().strict());
    }

    #[test]
    fn strict_flag_is_read_from_the_conversion_section() {
        let config: AppConfig = serde_json::from_str(r#"{"conversion": {"strict": true}}"#)
            .expect("config should parse");
        assert!(config.conversion().strict());
    }
}
