use serde::Deserialize;

use crate::error::ConvertError;
use crate::render::{Delimiters, Mode};
use crate::script::TargetScript;

pub const DEFAULT_DELIMITER_START: &str = "(";
pub const DEFAULT_DELIMITER_END: &str = ")";

/// Options of a single conversion call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertOptions {
    pub to: TargetScript,
    pub mode: Mode,
    pub delimiter_start: String,
    pub delimiter_end: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            to: TargetScript::default(),
            mode: Mode::default(),
            delimiter_start: DEFAULT_DELIMITER_START.to_string(),
            delimiter_end: DEFAULT_DELIMITER_END.to_string(),
        }
    }
}

impl ConvertOptions {
    /// Build options from the string names used on the command line and in
    /// config files. Unknown names yield `InvalidConfiguration`.
    pub fn parse(to: &str, mode: &str) -> Result<Self, ConvertError> {
        Ok(Self {
            to: to.parse()?,
            mode: mode.parse()?,
            ..Self::default()
        })
    }

    pub fn with_to(mut self, to: TargetScript) -> Self {
        self.to = to;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_delimiters(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.delimiter_start = start.into();
        self.delimiter_end = end.into();
        self
    }

    pub fn delimiters(&self) -> Delimiters<'_> {
        Delimiters {
            start: &self.delimiter_start,
            end: &self.delimiter_end,
        }
    }
}
