//! Settings loaded from TOML.
//!
//! - `parse_settings_toml(toml)` parses and validates a settings document
//! - `default_settings()` returns `&'static Settings` built from the embedded defaults
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::fs;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::options::ConvertOptions;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Get or initialize the embedded default settings.
pub fn default_settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("default settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub convert: ConvertOptions,
    #[serde(default)]
    pub analyzer: AnalyzerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        default_settings().clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerSettings {
    pub unknown_word_cost: i16,
    pub segment_penalty: i64,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        default_settings().analyzer.clone()
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        parse_settings_toml(&fs::read_to_string(path)?)
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_negative {
        ($section:ident . $field:ident) => {
            if s.$section.$field < 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be non-negative".to_string(),
                });
            }
        };
    }

    check_non_negative!(analyzer.unknown_word_cost);
    check_non_negative!(analyzer.segment_penalty);

    Ok(())
}
