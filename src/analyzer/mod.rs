//! Morphological analysis: splitting text into morphemes with readings.
//!
//! `Analyzer` is the seam for any tokenizer. `DictionaryAnalyzer` is the
//! built-in implementation: a lattice over the input built from a
//! surface-keyed dictionary, solved with a minimum-cost Viterbi pass.

mod lattice;
mod viterbi;

pub use lattice::{build_lattice, Lattice, LatticeNode};
pub use viterbi::best_path;

use std::sync::Arc;

use tracing::debug_span;

use crate::dict::Dictionary;
use crate::settings::AnalyzerSettings;
use crate::token::Morpheme;

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct AnalyzerError(pub String);

/// Splits text into morphemes in document order.
///
/// Implementations are shared across threads and must be reentrant: the
/// concatenated surfaces of the result must equal the input text.
pub trait Analyzer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<Morpheme>, AnalyzerError>;
}

pub struct DictionaryAnalyzer {
    dict: Arc<dyn Dictionary>,
    settings: AnalyzerSettings,
}

impl DictionaryAnalyzer {
    pub fn new(dict: Arc<dyn Dictionary>, settings: AnalyzerSettings) -> Self {
        Self { dict, settings }
    }

    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }
}

impl Analyzer for DictionaryAnalyzer {
    fn tokenize(&self, text: &str) -> Result<Vec<Morpheme>, AnalyzerError> {
        let _span = debug_span!("tokenize", len = text.len()).entered();
        if text.is_empty() {
            return Ok(Vec::new());
        }
        let lattice = build_lattice(self.dict.as_ref(), text, self.settings.unknown_word_cost);
        best_path(&lattice, self.settings.segment_penalty)
            .map(|nodes| {
                nodes
                    .into_iter()
                    .map(|node| Morpheme {
                        surface: node.surface.clone(),
                        reading: node.reading.clone(),
                    })
                    .collect()
            })
            .ok_or_else(|| AnalyzerError(format!("no segmentation covers {text:?}")))
    }
}
