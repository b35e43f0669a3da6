use serde::Serialize;

/// A morpheme as produced by an analyzer. `reading` is `None` (or empty)
/// when the analyzer knows no pronunciation for the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    pub surface: String,
    pub reading: Option<String>,
}

impl Morpheme {
    pub fn new(surface: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            reading: Some(reading.into()),
        }
    }

    pub fn unknown(surface: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            reading: None,
        }
    }
}

/// A normalized token: the reading is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub surface: String,
    pub reading: String,
}

impl Token {
    pub fn new(surface: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            reading: reading.into(),
        }
    }
}

impl From<Morpheme> for Token {
    fn from(m: Morpheme) -> Self {
        let reading = match m.reading {
            Some(r) if !r.is_empty() => r,
            _ => m.surface.clone(),
        };
        Token {
            surface: m.surface,
            reading,
        }
    }
}

/// Fill in missing readings with the surface form.
pub fn normalize(morphemes: Vec<Morpheme>) -> Vec<Token> {
    morphemes.into_iter().map(Token::from).collect()
}
