use std::path::Path;
use std::sync::Arc;

use tracing::debug_span;

use crate::align::{align_tokens, Notation};
use crate::analyzer::{Analyzer, DictionaryAnalyzer};
use crate::dict::{DictError, SurfaceDictionary};
use crate::error::ConvertError;
use crate::options::ConvertOptions;
use crate::render::render;
use crate::script::TargetScript;
use crate::settings::AnalyzerSettings;
use crate::token::{normalize, Token};

/// Converts Japanese text to hiragana, katakana or romaji, or annotates it
/// with readings.
///
/// A `Transliterator` always holds a ready analyzer, so every conversion can
/// run immediately. It is cheap to clone and can be shared across threads.
#[derive(Clone)]
pub struct Transliterator {
    analyzer: Arc<dyn Analyzer>,
}

impl Transliterator {
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self { analyzer }
    }

    /// Load a dictionary (LXFD binary or `.tsv` source) and build a
    /// transliterator on top of the built-in analyzer.
    pub fn open(dict_path: &Path, settings: &AnalyzerSettings) -> Result<Self, DictError> {
        let dict = SurfaceDictionary::open(dict_path)?;
        Ok(Self::from_dictionary(dict, settings))
    }

    pub fn from_dictionary(dict: SurfaceDictionary, settings: &AnalyzerSettings) -> Self {
        let analyzer = DictionaryAnalyzer::new(Arc::new(dict), settings.clone());
        Self::new(Arc::new(analyzer))
    }

    /// Tokenize `text` and fill in missing readings.
    pub fn tokens(&self, text: &str) -> Result<Vec<Token>, ConvertError> {
        Ok(normalize(self.analyzer.tokenize(text)?))
    }

    /// Notation runs of `text` in document order.
    pub fn notations(&self, text: &str) -> Result<Vec<Notation>, ConvertError> {
        Ok(align_tokens(&self.tokens(text)?))
    }

    pub fn convert(&self, text: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
        self.convert_to(text, options, options.to)
    }

    /// `convert` with the target script fixed to hiragana; `options.to` is ignored.
    pub fn to_hiragana(&self, text: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
        self.convert_to(text, options, TargetScript::Hiragana)
    }

    /// `convert` with the target script fixed to katakana; `options.to` is ignored.
    pub fn to_katakana(&self, text: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
        self.convert_to(text, options, TargetScript::Katakana)
    }

    /// `convert` with the target script fixed to romaji; `options.to` is ignored.
    pub fn to_romaji(&self, text: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
        self.convert_to(text, options, TargetScript::Romaji)
    }

    fn convert_to(
        &self,
        text: &str,
        options: &ConvertOptions,
        to: TargetScript,
    ) -> Result<String, ConvertError> {
        let _span = debug_span!("convert", %to, mode = %options.mode).entered();
        let tokens = self.tokens(text)?;
        Ok(render(&tokens, to, options.mode, options.delimiters()))
    }
}
