//! Context-free conversion between hiragana, katakana and romaji.
//!
//! Kana shifting is done character by character so that Latin text, digits
//! and punctuation pass through untouched. Romanization (Hepburn) is
//! delegated to `wana_kana`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use wana_kana::ConvertJapanese;

use crate::error::ConvertError;
use crate::unicode::{hiragana_to_katakana, is_kana, katakana_to_hiragana};

/// Output script of a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TargetScript {
    #[default]
    Hiragana,
    Katakana,
    Romaji,
}

impl TargetScript {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetScript::Hiragana => "hiragana",
            TargetScript::Katakana => "katakana",
            TargetScript::Romaji => "romaji",
        }
    }
}

impl fmt::Display for TargetScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetScript {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hiragana" => Ok(TargetScript::Hiragana),
            "katakana" => Ok(TargetScript::Katakana),
            "romaji" => Ok(TargetScript::Romaji),
            _ => Err(ConvertError::invalid("target script", s)),
        }
    }
}

impl TryFrom<String> for TargetScript {
    type Error = ConvertError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TargetScript> for String {
    fn from(t: TargetScript) -> Self {
        t.as_str().to_string()
    }
}

pub fn to_hiragana(s: &str) -> String {
    katakana_to_hiragana(s)
}

pub fn to_katakana(s: &str) -> String {
    hiragana_to_katakana(s)
}

/// Romanize the kana in `s`. Strings without kana are returned as-is.
pub fn to_romaji(s: &str) -> String {
    if !s.chars().any(is_kana) {
        return s.to_string();
    }
    s.to_romaji()
}

/// Convert a reading into the target script.
pub fn convert_script(s: &str, target: TargetScript) -> String {
    match target {
        TargetScript::Hiragana => to_hiragana(s),
        TargetScript::Katakana => to_katakana(s),
        TargetScript::Romaji => to_romaji(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target_script() {
        assert_eq!("hiragana".parse::<TargetScript>().unwrap(), TargetScript::Hiragana);
        assert_eq!("Katakana".parse::<TargetScript>().unwrap(), TargetScript::Katakana);
        assert_eq!(" romaji ".parse::<TargetScript>().unwrap(), TargetScript::Romaji);
    }

    #[test]
    fn test_parse_unknown_target_script() {
        let err = "cyrillic".parse::<TargetScript>().unwrap_err();
        assert!(matches!(
            err,
            ConvertError::InvalidConfiguration { field: "target script", ref value } if value == "cyrillic"
        ));
    }

    #[test]
    fn test_convert_script() {
        assert_eq!(convert_script("タベル", TargetScript::Hiragana), "たべる");
        assert_eq!(convert_script("たべる", TargetScript::Katakana), "タベル");
        assert_eq!(convert_script("たべる", TargetScript::Romaji), "taberu");
        assert_eq!(convert_script("テスト", TargetScript::Romaji), "tesuto");
    }

    #[test]
    fn test_latin_passes_through() {
        for target in [TargetScript::Hiragana, TargetScript::Katakana, TargetScript::Romaji] {
            assert_eq!(convert_script("today", target), "today");
        }
    }

    #[test]
    fn test_display_roundtrip() {
        for target in [TargetScript::Hiragana, TargetScript::Katakana, TargetScript::Romaji] {
            assert_eq!(target.to_string().parse::<TargetScript>().unwrap(), target);
        }
    }
}
