//! Property-based tests for the notation alignment engine.
//!
//! Generates random surfaces over a small kanji/kana/Latin alphabet and
//! verifies the structural invariants of `align_token`.

use proptest::prelude::*;

use lex_furigana::align::{align_token, Notation};
use lex_furigana::script::to_hiragana;
use lex_furigana::unicode::{classify_string, is_kanji, StringComposition};
use lex_furigana::Token;

fn arb_char() -> impl Strategy<Value = char> {
    prop_oneof![
        3 => prop::sample::select(vec!['食', '日', '本', '生', '取', '扱']),
        3 => prop::sample::select(vec!['べ', 'る', 'き', 'お', 'り', 'い']),
        1 => prop::sample::select(vec!['テ', 'ス', 'ー']),
        1 => prop::sample::select(vec!['a', '3', '、']),
    ]
}

fn arb_surface() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_char(), 1..10).prop_map(|cs| cs.into_iter().collect())
}

fn arb_hiragana(max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['か', 'な', 'べ', 'る', 'い', 'き']), 0..max)
        .prop_map(|cs| cs.into_iter().collect())
}

/// A surface and a reading built so the alignment pattern is satisfiable:
/// every maximal kanji run reads as a non-empty hiragana string.
fn arb_consistent_token() -> impl Strategy<Value = Token> {
    arb_surface().prop_flat_map(|surface| {
        let kanji_runs = count_kanji_runs(&surface);
        prop::collection::vec(
            prop::collection::vec(prop::sample::select(vec!['か', 'な', 'じ']), 1..4),
            kanji_runs,
        )
        .prop_map(move |readings| {
            let mut readings = readings.into_iter();
            let mut reading = String::new();
            let mut in_kanji = false;
            for c in surface.chars() {
                if is_kanji(c) {
                    if !in_kanji {
                        if let Some(r) = readings.next() {
                            reading.extend(r);
                        }
                    }
                    in_kanji = true;
                } else {
                    reading.push(c);
                    in_kanji = false;
                }
            }
            Token::new(surface.clone(), reading)
        })
    })
}

fn count_kanji_runs(s: &str) -> usize {
    let mut count = 0;
    let mut prev = false;
    for c in s.chars() {
        let k = is_kanji(c);
        if k && !prev {
            count += 1;
        }
        prev = k;
    }
    count
}

fn joined_text(notations: &[Notation]) -> String {
    notations.iter().map(|n| n.text.as_str()).collect()
}

fn is_fallback(token: &Token, notations: &[Notation]) -> bool {
    notations.len() == 1 && notations[0].is_annotatable() && notations[0].text == token.surface
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn runs_reproduce_surface(surface in arb_surface(), reading in arb_hiragana(12)) {
        let token = Token::new(surface.clone(), reading);
        let notations = align_token(&token);
        prop_assert_eq!(joined_text(&notations), surface);
    }

    #[test]
    fn runs_are_non_empty(surface in arb_surface(), reading in arb_hiragana(12)) {
        let notations = align_token(&Token::new(surface, reading));
        prop_assert!(notations.iter().all(|n| !n.text.is_empty()));
    }

    #[test]
    fn classification_is_deterministic(surface in arb_surface()) {
        let first = classify_string(&surface);
        prop_assert_eq!(first, classify_string(&surface));
    }

    #[test]
    fn arbitrary_readings_never_panic(surface in arb_surface(), reading in arb_hiragana(4)) {
        let token = Token::new(surface, reading);
        let notations = align_token(&token);
        if classify_string(&token.surface) == StringComposition::Mixed {
            let matched = notations.len() > 1;
            prop_assert!(matched || is_fallback(&token, &notations));
        }
    }

    #[test]
    fn matched_annotations_are_maximal_kanji_runs(token in arb_consistent_token()) {
        prop_assume!(classify_string(&token.surface) == StringComposition::Mixed);
        let notations = align_token(&token);
        prop_assert!(!is_fallback(&token, &notations));
        for (i, n) in notations.iter().enumerate() {
            if n.is_annotatable() {
                prop_assert!(n.text.chars().all(is_kanji));
                if i > 0 {
                    prop_assert!(!notations[i - 1].text.chars().any(is_kanji));
                }
                if i + 1 < notations.len() {
                    prop_assert!(!notations[i + 1].text.chars().any(is_kanji));
                }
            }
        }
    }

    #[test]
    fn matched_readings_reproduce_token_reading(token in arb_consistent_token()) {
        prop_assume!(classify_string(&token.surface) == StringComposition::Mixed);
        let notations = align_token(&token);
        let joined: String = notations.iter().map(|n| n.reading().into_owned()).collect();
        prop_assert_eq!(joined, to_hiragana(&token.reading));
    }
}
