//! Japanese transliteration with per-kanji reading alignment.
//!
//! Text is split into morphemes by an [`Analyzer`], each token's reading is
//! aligned to its kanji runs ([`align`]), and the result is rendered as
//! hiragana, katakana or romaji, either replacing the text or annotating it
//! with bracketed readings or `<ruby>` markup.
//!
//! ```no_run
//! use std::path::Path;
//! use lex_furigana::{ConvertOptions, Mode, Transliterator};
//! use lex_furigana::settings::AnalyzerSettings;
//!
//! let t = Transliterator::open(Path::new("words.tsv"), &AnalyzerSettings::default())?;
//! let opts = ConvertOptions::default().with_mode(Mode::Furigana);
//! println!("{}", t.convert("食べる", &opts)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod align;
pub mod analyzer;
pub mod dict;
pub mod error;
pub mod explain;
pub mod options;
pub mod render;
pub mod script;
pub mod settings;
mod testutil;
pub mod token;
pub mod trace_init;
pub mod transliterator;
pub mod unicode;

pub use align::{Notation, RunKind};
pub use analyzer::{Analyzer, AnalyzerError, DictionaryAnalyzer};
pub use error::ConvertError;
pub use options::ConvertOptions;
pub use render::{Delimiters, Mode};
pub use script::TargetScript;
pub use token::{Morpheme, Token};
pub use trace_init::init_tracing;
pub use transliterator::Transliterator;
