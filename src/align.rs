//! Kanji-to-reading alignment.
//!
//! A token's surface is split into maximal kanji runs and the non-kanji runs
//! between them. The non-kanji runs (kana-normalized) become literal anchors,
//! each kanji run becomes a wildcard, and the resulting pattern is matched
//! against the whole hiragana reading. Wildcards capture one or more
//! characters and prefer the shortest capture that still lets the rest of
//! the pattern match.

use std::borrow::Cow;
use std::ops::Range;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::script::to_hiragana;
use crate::token::Token;
use crate::unicode::{classify_string, is_kanji, StringComposition};

/// How a run of surface text is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunKind {
    /// The run carries its own reading, shown as an annotation.
    Annotatable { reading: String },
    /// The run is rendered as-is.
    Plain,
}

/// A run of surface text together with how it should be annotated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notation {
    pub text: String,
    #[serde(flatten)]
    pub kind: RunKind,
}

impl Notation {
    pub fn annotated(text: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: RunKind::Annotatable {
                reading: reading.into(),
            },
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: RunKind::Plain,
        }
    }

    pub fn is_annotatable(&self) -> bool {
        matches!(self.kind, RunKind::Annotatable { .. })
    }

    /// Hiragana reading of the run. Plain runs read as their own
    /// kana-normalized text.
    pub fn reading(&self) -> Cow<'_, str> {
        match &self.kind {
            RunKind::Annotatable { reading } => Cow::Borrowed(reading),
            RunKind::Plain => Cow::Owned(to_hiragana(&self.text)),
        }
    }
}

/// A maximal stretch of the surface that is either all kanji or all non-kanji.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Run<'a> {
    pub text: &'a str,
    pub kanji: bool,
}

/// Split `surface` into maximal runs, starting a new run exactly where the
/// kanji / non-kanji class changes.
pub(crate) fn partition(surface: &str) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (i, c) in surface.char_indices() {
        let kanji = is_kanji(c);
        match current {
            Some(prev) if prev == kanji => {}
            Some(prev) => {
                runs.push(Run {
                    text: &surface[start..i],
                    kanji: prev,
                });
                start = i;
                current = Some(kanji);
            }
            None => current = Some(kanji),
        }
    }
    if let Some(kanji) = current {
        runs.push(Run {
            text: &surface[start..],
            kanji,
        });
    }
    runs
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Wildcard,
    Literal(Vec<char>),
}

fn build_pattern(runs: &[Run<'_>]) -> Vec<Segment> {
    runs.iter()
        .map(|run| {
            if run.kanji {
                Segment::Wildcard
            } else {
                Segment::Literal(to_hiragana(run.text).chars().collect())
            }
        })
        .collect()
}

/// Backtracking matcher over a wildcard/literal sequence, anchored at both
/// ends of the reading. `failed` memoizes (segment, position) states already
/// known not to lead to a match.
struct Matcher<'a> {
    segments: &'a [Segment],
    reading: &'a [char],
    captures: Vec<Range<usize>>,
    failed: Vec<bool>,
}

impl<'a> Matcher<'a> {
    fn new(segments: &'a [Segment], reading: &'a [char]) -> Self {
        Self {
            segments,
            reading,
            captures: Vec::new(),
            failed: vec![false; (segments.len() + 1) * (reading.len() + 1)],
        }
    }

    fn run(mut self) -> Option<Vec<Range<usize>>> {
        if self.step(0, 0) {
            Some(self.captures)
        } else {
            None
        }
    }

    fn step(&mut self, seg: usize, pos: usize) -> bool {
        let segments = self.segments;
        let reading = self.reading;
        if seg == segments.len() {
            return pos == reading.len();
        }
        let key = seg * (reading.len() + 1) + pos;
        if self.failed[key] {
            return false;
        }

        let matched = match &segments[seg] {
            Segment::Literal(lit) => {
                reading[pos..].starts_with(lit) && self.step(seg + 1, pos + lit.len())
            }
            Segment::Wildcard => {
                let mut matched = false;
                for end in pos + 1..=reading.len() {
                    self.captures.push(pos..end);
                    if self.step(seg + 1, end) {
                        matched = true;
                        break;
                    }
                    self.captures.pop();
                }
                matched
            }
        };

        if !matched {
            self.failed[key] = true;
        }
        matched
    }
}

/// Align a mixed kanji/kana surface against its reading. Returns `None`
/// when the anchors and kanji runs cannot be reconciled with the reading.
fn align_mixed(surface: &str, reading: &str) -> Option<Vec<Notation>> {
    let runs = partition(surface);
    let segments = build_pattern(&runs);
    let reading: Vec<char> = to_hiragana(reading).chars().collect();
    let captures = Matcher::new(&segments, &reading).run()?;

    let mut captures = captures.into_iter();
    let mut notations = Vec::with_capacity(runs.len());
    for run in &runs {
        if run.kanji {
            let range = captures.next()?;
            let captured: String = reading[range].iter().collect();
            notations.push(Notation::annotated(run.text, captured));
        } else {
            notations.push(Notation::plain(run.text));
        }
    }
    Some(notations)
}

fn plain_chars(surface: &str) -> Vec<Notation> {
    surface
        .chars()
        .map(|c| Notation::plain(c.to_string()))
        .collect()
}

/// Produce the notation runs of one normalized token. The concatenated
/// `text` of the result always equals `token.surface`.
pub fn align_token(token: &Token) -> Vec<Notation> {
    match classify_string(&token.surface) {
        StringComposition::PureKanji => vec![Notation::annotated(
            token.surface.as_str(),
            to_hiragana(&token.reading),
        )],
        StringComposition::PureKana | StringComposition::Other => plain_chars(&token.surface),
        StringComposition::Mixed => {
            align_mixed(&token.surface, &token.reading).unwrap_or_else(|| {
                debug!(
                    surface = %token.surface,
                    reading = %token.reading,
                    "alignment mismatch, annotating whole token"
                );
                vec![Notation::annotated(
                    token.surface.as_str(),
                    to_hiragana(&token.reading),
                )]
            })
        }
    }
}

/// Align every token and flatten the runs in document order.
pub fn align_tokens(tokens: &[Token]) -> Vec<Notation> {
    let _span = debug_span!("align_tokens", token_count = tokens.len()).entered();
    tokens.iter().flat_map(align_token).collect()
}
