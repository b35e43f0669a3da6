//! Turning tokens and notation runs into output text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug_span;

use crate::align::{align_token, align_tokens, Notation, RunKind};
use crate::error::ConvertError;
use crate::script::{convert_script, to_hiragana, to_romaji, TargetScript};
use crate::token::Token;
use crate::unicode::{classify_string, has_kanji, has_katakana, StringComposition};

/// Output encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Mode {
    /// Readings replace the text, concatenated without separator.
    #[default]
    Inline,
    /// Readings replace the text, one space between tokens.
    Spaced,
    /// Kanji runs followed by their bracketed reading.
    Okurigana,
    /// Kanji runs wrapped in `<ruby>` markup.
    Furigana,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Inline => "inline",
            Mode::Spaced => "spaced",
            Mode::Okurigana => "okurigana",
            Mode::Furigana => "furigana",
        }
    }

    /// Whether the mode annotates kanji runs rather than replacing tokens.
    pub fn is_annotating(self) -> bool {
        matches!(self, Mode::Okurigana | Mode::Furigana)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inline" | "normal" => Ok(Mode::Inline),
            "spaced" => Ok(Mode::Spaced),
            "okurigana" => Ok(Mode::Okurigana),
            "furigana" => Ok(Mode::Furigana),
            _ => Err(ConvertError::invalid("mode", s)),
        }
    }
}

impl TryFrom<String> for Mode {
    type Error = ConvertError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Mode> for String {
    fn from(m: Mode) -> Self {
        m.as_str().to_string()
    }
}

/// Brackets around every annotation in okurigana and furigana output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters<'a> {
    pub start: &'a str,
    pub end: &'a str,
}

impl Default for Delimiters<'_> {
    fn default() -> Self {
        Self {
            start: "(",
            end: ")",
        }
    }
}

/// Reading of one token for inline output.
///
/// Hiragana output keeps tokens without kanji as written, and keeps the
/// katakana of mixed kanji/katakana tokens. Katakana and romaji output
/// always use the analyzer's reading.
fn inline_reading(token: &Token, to: TargetScript) -> String {
    match to {
        TargetScript::Hiragana => {
            if !has_kanji(&token.surface) {
                token.surface.clone()
            } else if has_katakana(&token.surface) {
                align_token(token)
                    .iter()
                    .map(|n| match &n.kind {
                        RunKind::Annotatable { reading } => reading.as_str(),
                        RunKind::Plain => n.text.as_str(),
                    })
                    .collect()
            } else {
                to_hiragana(&token.reading)
            }
        }
        TargetScript::Katakana | TargetScript::Romaji => convert_script(&token.reading, to),
    }
}

/// Inline / spaced rendering: each token is replaced by its reading.
pub fn render_inline(tokens: &[Token], to: TargetScript, separator: &str) -> String {
    tokens
        .iter()
        .map(|t| inline_reading(t, to))
        .collect::<Vec<_>>()
        .join(separator)
}

/// `食(た)べる`: each annotatable run is followed by its bracketed reading.
pub fn render_okurigana(notations: &[Notation], to: TargetScript, delims: Delimiters<'_>) -> String {
    let mut out = String::new();
    for n in notations {
        out.push_str(&n.text);
        if let RunKind::Annotatable { reading } = &n.kind {
            out.push_str(delims.start);
            out.push_str(&convert_script(reading, to));
            out.push_str(delims.end);
        }
    }
    out
}

fn push_ruby_text(out: &mut String, rt: &str, delims: Delimiters<'_>) {
    out.push_str("<rp>");
    out.push_str(delims.start);
    out.push_str("</rp><rt>");
    out.push_str(rt);
    out.push_str("</rt><rp>");
    out.push_str(delims.end);
    out.push_str("</rp>");
}

/// Ruby markup with one `<ruby>` element per annotatable run.
pub fn render_furigana(notations: &[Notation], to: TargetScript, delims: Delimiters<'_>) -> String {
    let mut out = String::new();
    for n in notations {
        match &n.kind {
            RunKind::Plain => out.push_str(&n.text),
            RunKind::Annotatable { reading } => {
                out.push_str("<ruby>");
                out.push_str(&n.text);
                push_ruby_text(&mut out, &convert_script(reading, to), delims);
                out.push_str("</ruby>");
            }
        }
    }
    out
}

/// Romaji ruby markup: one `<ruby>` element per token, every run of the
/// token carrying its romanized reading. Tokens with neither kanji nor kana
/// are emitted verbatim.
pub fn render_romaji_furigana(tokens: &[Token], delims: Delimiters<'_>) -> String {
    let mut out = String::new();
    for token in tokens {
        if classify_string(&token.surface) == StringComposition::Other {
            out.push_str(&token.surface);
            continue;
        }
        out.push_str("<ruby>");
        for n in align_token(token) {
            out.push_str(&n.text);
            push_ruby_text(&mut out, &to_romaji(&n.reading()), delims);
        }
        out.push_str("</ruby>");
    }
    out
}

/// Render normalized tokens in the given script and mode.
pub fn render(tokens: &[Token], to: TargetScript, mode: Mode, delims: Delimiters<'_>) -> String {
    let _span = debug_span!("render", %to, %mode, token_count = tokens.len()).entered();
    if !mode.is_annotating() {
        let separator = if mode == Mode::Spaced { " " } else { "" };
        return render_inline(tokens, to, separator);
    }
    if mode == Mode::Furigana && to == TargetScript::Romaji {
        return render_romaji_furigana(tokens, delims);
    }

    // Annotating modes work on notation runs.
    let notations = align_tokens(tokens);
    match mode {
        Mode::Furigana => render_furigana(&notations, to, delims),
        _ => render_okurigana(&notations, to, delims),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taberu() -> Vec<Token> {
        vec![Token::new("食べる", "タベル")]
    }

    fn sentence() -> Vec<Token> {
        vec![
            Token::new("私", "ワタシ"),
            Token::new("は", "ハ"),
            Token::new("テスト", "テスト"),
            Token::new("を", "ヲ"),
            Token::new("食べる", "タベル"),
        ]
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("inline".parse::<Mode>().unwrap(), Mode::Inline);
        assert_eq!("normal".parse::<Mode>().unwrap(), Mode::Inline);
        assert_eq!("Spaced".parse::<Mode>().unwrap(), Mode::Spaced);
        assert_eq!("okurigana".parse::<Mode>().unwrap(), Mode::Okurigana);
        assert_eq!("FURIGANA".parse::<Mode>().unwrap(), Mode::Furigana);
    }

    #[test]
    fn test_parse_unknown_mode() {
        let err = "ruby".parse::<Mode>().unwrap_err();
        assert!(matches!(
            err,
            ConvertError::InvalidConfiguration { field: "mode", ref value } if value == "ruby"
        ));
    }

    #[test]
    fn test_inline_hiragana() {
        let out = render(&taberu(), TargetScript::Hiragana, Mode::Inline, Delimiters::default());
        assert_eq!(out, "たべる");
    }

    #[test]
    fn test_inline_hiragana_keeps_non_kanji_tokens() {
        let out = render(&sentence(), TargetScript::Hiragana, Mode::Inline, Delimiters::default());
        assert_eq!(out, "わたしはテストをたべる");
    }

    #[test]
    fn test_inline_hiragana_keeps_katakana_in_mixed_token() {
        let tokens = vec![Token::new("ドイツ語", "ドイツゴ")];
        let out = render(&tokens, TargetScript::Hiragana, Mode::Inline, Delimiters::default());
        assert_eq!(out, "ドイツご");
    }

    #[test]
    fn test_inline_hiragana_mixed_token_fallback_uses_reading() {
        // the katakana anchor does not occur in the reading
        let tokens = vec![Token::new("ドイツ語", "ノム")];
        let out = render(&tokens, TargetScript::Hiragana, Mode::Inline, Delimiters::default());
        assert_eq!(out, "のむ");
    }

    #[test]
    fn test_spaced_hiragana() {
        let tokens = vec![Token::new("食べる", "タベル"), Token::new("today", "today")];
        let out = render(&tokens, TargetScript::Hiragana, Mode::Spaced, Delimiters::default());
        assert_eq!(out, "たべる today");
    }

    #[test]
    fn test_is_annotating() {
        assert!(!Mode::Inline.is_annotating());
        assert!(!Mode::Spaced.is_annotating());
        assert!(Mode::Okurigana.is_annotating());
        assert!(Mode::Furigana.is_annotating());
    }

    #[test]
    fn test_inline_katakana_uses_reading() {
        let out = render(&sentence(), TargetScript::Katakana, Mode::Inline, Delimiters::default());
        assert_eq!(out, "ワタシハテストヲタベル");
    }

    #[test]
    fn test_spaced_romaji() {
        let tokens = vec![Token::new("私", "ワタシ"), Token::new("テスト", "テスト")];
        let out = render(&tokens, TargetScript::Romaji, Mode::Spaced, Delimiters::default());
        assert_eq!(out, "watashi tesuto");
    }

    #[test]
    fn test_okurigana_hiragana() {
        let out = render(&taberu(), TargetScript::Hiragana, Mode::Okurigana, Delimiters::default());
        assert_eq!(out, "食(た)べる");
    }

    #[test]
    fn test_okurigana_custom_delimiters() {
        let delims = Delimiters {
            start: "[",
            end: "]",
        };
        let out = render(&taberu(), TargetScript::Katakana, Mode::Okurigana, delims);
        assert_eq!(out, "食[タ]べる");
    }

    #[test]
    fn test_okurigana_romaji() {
        let out = render(&taberu(), TargetScript::Romaji, Mode::Okurigana, Delimiters::default());
        assert_eq!(out, "食(ta)べる");
    }

    #[test]
    fn test_furigana_hiragana() {
        let out = render(&taberu(), TargetScript::Hiragana, Mode::Furigana, Delimiters::default());
        assert_eq!(out, "<ruby>食<rp>(</rp><rt>た</rt><rp>)</rp></ruby>べる");
    }

    #[test]
    fn test_furigana_katakana() {
        let tokens = vec![Token::new("漢字", "カンジ")];
        let out = render(&tokens, TargetScript::Katakana, Mode::Furigana, Delimiters::default());
        assert_eq!(out, "<ruby>漢字<rp>(</rp><rt>カンジ</rt><rp>)</rp></ruby>");
    }

    #[test]
    fn test_furigana_romaji_wraps_whole_token() {
        let out = render(&taberu(), TargetScript::Romaji, Mode::Furigana, Delimiters::default());
        assert_eq!(
            out,
            "<ruby>食<rp>(</rp><rt>ta</rt><rp>)</rp>べる<rp>(</rp><rt>beru</rt><rp>)</rp></ruby>"
        );
    }

    #[test]
    fn test_furigana_romaji_one_ruby_per_token() {
        let tokens = vec![
            Token::new("私", "ワタシ"),
            Token::new("は", "ハ"),
            Token::new("、", "、"),
        ];
        let out = render(&tokens, TargetScript::Romaji, Mode::Furigana, Delimiters::default());
        assert_eq!(
            out,
            "<ruby>私<rp>(</rp><rt>watashi</rt><rp>)</rp></ruby>\
             <ruby>は<rp>(</rp><rt>ha</rt><rp>)</rp></ruby>、"
        );
    }

    #[test]
    fn test_furigana_romaji_katakana_per_character() {
        // pure kana tokens are annotated one character at a time, so the
        // sokuon has no romanization of its own
        let tokens = vec![Token::new("チケット", "チケット")];
        let out = render(&tokens, TargetScript::Romaji, Mode::Furigana, Delimiters::default());
        assert!(out.starts_with("<ruby>チ<rp>(</rp><rt>chi</rt><rp>)</rp>"));
        assert!(out.contains("ッ<rp>(</rp><rt></rt><rp>)</rp>"));
        assert!(out.ends_with("ト<rp>(</rp><rt>to</rt><rp>)</rp></ruby>"));
    }

    #[test]
    fn test_latin_unchanged_in_every_mode() {
        let tokens = vec![Token::new("today", "today")];
        for to in [TargetScript::Hiragana, TargetScript::Katakana, TargetScript::Romaji] {
            for mode in [Mode::Inline, Mode::Spaced, Mode::Okurigana, Mode::Furigana] {
                assert_eq!(
                    render(&tokens, to, mode, Delimiters::default()),
                    "today",
                    "{to} / {mode}"
                );
            }
        }
    }

    #[test]
    fn test_empty_tokens() {
        for mode in [Mode::Inline, Mode::Spaced, Mode::Okurigana, Mode::Furigana] {
            assert_eq!(render(&[], TargetScript::Hiragana, mode, Delimiters::default()), "");
        }
    }
}
