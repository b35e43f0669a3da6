//! Character-level Unicode classification for Japanese text.

use serde::Serialize;

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes the prolonged
/// sound mark ー (U+30FC).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// CJK Unified Ideographs (up to U+9FCF), Compatibility Ideographs and
/// Extension A. Supplementary-plane ideographs are deliberately not covered.
pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FCF}').contains(&c)
        || ('\u{F900}'..='\u{FAFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
}

/// Romanized Latin text: ASCII letters plus the macron vowels used by Hepburn.
pub fn is_romaji(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, 'ā' | 'ī' | 'ū' | 'ē' | 'ō' | 'Ā' | 'Ī' | 'Ū' | 'Ē' | 'Ō')
}

/// Script class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Kanji,
    Hiragana,
    Katakana,
    Other,
}

impl CharClass {
    pub fn is_kana(self) -> bool {
        matches!(self, CharClass::Hiragana | CharClass::Katakana)
    }
}

pub fn classify_char(c: char) -> CharClass {
    if is_kanji(c) {
        CharClass::Kanji
    } else if is_hiragana(c) {
        CharClass::Hiragana
    } else if is_katakana(c) {
        CharClass::Katakana
    } else {
        CharClass::Other
    }
}

/// True iff any character of `s` belongs to `class`.
pub fn has_class(s: &str, class: CharClass) -> bool {
    s.chars().any(|c| classify_char(c) == class)
}

pub fn has_kanji(s: &str) -> bool {
    has_class(s, CharClass::Kanji)
}

pub fn has_katakana(s: &str) -> bool {
    has_class(s, CharClass::Katakana)
}

/// Composition of a whole surface form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StringComposition {
    /// Kanji and no kana (other characters may be present).
    PureKanji,
    /// Both kanji and kana.
    Mixed,
    /// Kana and no kanji.
    PureKana,
    /// Neither kanji nor kana, including the empty string.
    Other,
}

pub fn classify_string(s: &str) -> StringComposition {
    let mut kanji = false;
    let mut kana = false;
    for c in s.chars() {
        let class = classify_char(c);
        if class == CharClass::Kanji {
            kanji = true;
        } else if class.is_kana() {
            kana = true;
        }
        if kanji && kana {
            return StringComposition::Mixed;
        }
    }
    match (kanji, kana) {
        (true, _) => StringComposition::PureKanji,
        (false, true) => StringComposition::PureKana,
        (false, false) => StringComposition::Other,
    }
}

/// Offset between a hiragana code point and its katakana counterpart.
const KANA_OFFSET: u32 = 0x60;

/// ぁ..ゖ and the iteration marks ゝゞ have katakana counterparts at +0x60.
fn has_katakana_pair(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c) || ('\u{309D}'..='\u{309E}').contains(&c)
}

fn has_hiragana_pair(c: char) -> bool {
    ('\u{30A1}'..='\u{30F6}').contains(&c) || ('\u{30FD}'..='\u{30FE}').contains(&c)
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, kanji, etc.) are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if has_katakana_pair(c) {
                char::from_u32(c as u32 + KANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Convert a katakana string to hiragana.
/// Characters without a hiragana counterpart (ー, ヷ, ASCII, etc.) are passed through.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if has_hiragana_pair(c) {
                char::from_u32(c as u32 - KANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Check if a string is a valid hiragana reading.
///
/// Accepts hiragana characters (U+3040..U+309F) and the prolonged sound mark
/// ー (U+30FC, technically katakana) which commonly appears in readings like
/// "らーめん".
pub fn is_hiragana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || c == 'ー')
}
