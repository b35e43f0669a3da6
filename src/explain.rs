//! Diagnostic view of the pipeline: tokens, their composition and the
//! aligned notation runs.

use serde::Serialize;

use crate::align::{align_token, Notation, RunKind};
use crate::token::Token;
use crate::unicode::{classify_string, StringComposition};

#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub text: String,
    pub tokens: Vec<ExplainToken>,
}

#[derive(Debug, Serialize)]
pub struct ExplainToken {
    pub surface: String,
    pub reading: String,
    pub composition: StringComposition,
    pub notations: Vec<Notation>,
}

impl ExplainResult {
    /// Whether any mixed token fell back to a whole-token annotation.
    pub fn has_fallback(&self) -> bool {
        self.tokens.iter().any(ExplainToken::is_fallback)
    }
}

impl ExplainToken {
    pub fn is_fallback(&self) -> bool {
        self.composition == StringComposition::Mixed
            && self.notations.len() == 1
            && self.notations[0].is_annotatable()
    }
}

pub fn explain(text: &str, tokens: &[Token]) -> ExplainResult {
    ExplainResult {
        text: text.to_string(),
        tokens: tokens
            .iter()
            .map(|t| ExplainToken {
                surface: t.surface.clone(),
                reading: t.reading.clone(),
                composition: classify_string(&t.surface),
                notations: align_token(t),
            })
            .collect(),
    }
}

/// Format an ExplainResult as human-readable text.
pub fn format_text(result: &ExplainResult) -> String {
    use unicode_width::UnicodeWidthStr;
    let mut out = String::new();

    out.push_str(&format!(
        "=== Tokens for \"{}\" ({} tokens) ===\n",
        result.text,
        result.tokens.len(),
    ));

    for (i, token) in result.tokens.iter().enumerate() {
        let label = if token.surface != token.reading {
            format!("{}({})", token.surface, token.reading)
        } else {
            token.surface.clone()
        };
        let pad_width = 20;
        let display_width = UnicodeWidthStr::width(label.as_str());
        let padded = if display_width < pad_width {
            format!("{}{}", label, " ".repeat(pad_width - display_width))
        } else {
            label
        };
        let runs: Vec<String> = token
            .notations
            .iter()
            .map(|n| match &n.kind {
                RunKind::Annotatable { reading } => format!("[{}:{}]", n.text, reading),
                RunKind::Plain => n.text.clone(),
            })
            .collect();
        let composition = format!("{:?}", token.composition);
        out.push_str(&format!(
            "  tok[{}]: {} {:<10} {}{}\n",
            i,
            padded,
            composition,
            runs.join(" "),
            if token.is_fallback() { "  (fallback)" } else { "" },
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> Vec<Token> {
        vec![
            Token::new("食べる", "たべる"),
            Token::new("と", "と"),
            Token::new("飲む", "のみ"),
        ]
    }

    #[test]
    fn test_explain_basic() {
        let result = explain("食べると飲む", &tokens());
        assert_eq!(result.tokens.len(), 3);
        assert_eq!(result.tokens[0].composition, StringComposition::Mixed);
        assert_eq!(result.tokens[0].notations[0], Notation::annotated("食", "た"));
        assert_eq!(result.tokens[1].composition, StringComposition::PureKana);
    }

    #[test]
    fn test_fallback_detected() {
        let result = explain("食べると飲む", &tokens());
        assert!(!result.tokens[0].is_fallback());
        assert!(result.tokens[2].is_fallback());
        assert!(result.has_fallback());
    }

    #[test]
    fn test_format_text() {
        let text = format_text(&explain("食べると飲む", &tokens()));
        assert!(text.starts_with("=== Tokens for \"食べると飲む\" (3 tokens) ===\n"));
        assert!(text.contains("[食:た] べる"));
        assert!(text.contains("(fallback)"));
    }

    #[test]
    fn test_json() {
        let json = serde_json::to_value(explain("と", &[Token::new("と", "と")])).unwrap();
        assert_eq!(json["tokens"][0]["composition"], "pure_kana");
        assert_eq!(json["tokens"][0]["notations"][0]["kind"], "plain");
    }
}
