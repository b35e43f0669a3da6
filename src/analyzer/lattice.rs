use tracing::{debug, debug_span};

use crate::dict::Dictionary;
use crate::unicode::is_katakana;

/// A node in the analysis lattice.
#[derive(Debug, Clone)]
pub struct LatticeNode {
    /// Start position (char index, inclusive)
    pub start: usize,
    /// End position (char index, exclusive)
    pub end: usize,
    /// Surface substring of the input
    pub surface: String,
    /// Reading from the dictionary; `None` for unknown words
    pub reading: Option<String>,
    /// Word cost (lower = more preferred)
    pub cost: i16,
}

/// The lattice: all candidate segmentations of the input text.
pub struct Lattice {
    /// The original input
    pub input: String,
    /// All nodes in the lattice
    pub nodes: Vec<LatticeNode>,
    /// nodes_by_start[i] = indices of nodes that start at position i
    pub nodes_by_start: Vec<Vec<usize>>,
    /// Number of characters in input
    pub char_count: usize,
}

/// Characters that an unknown word may group together: runs of ASCII
/// letters/digits or of katakana are kept as one word.
fn unknown_group(c: char) -> Option<u8> {
    if c.is_ascii_alphanumeric() {
        Some(0)
    } else if is_katakana(c) {
        Some(1)
    } else {
        None
    }
}

/// Build a lattice over `text` using dictionary prefix lookups.
///
/// Every position gets a 1-char unknown node unless a dictionary entry
/// covers exactly that character, which guarantees connectivity. A maximal
/// run of groupable characters additionally gets one unknown node spanning
/// the whole run.
pub fn build_lattice(dict: &dyn Dictionary, text: &str, unknown_word_cost: i16) -> Lattice {
    let chars: Vec<char> = text.chars().collect();
    let char_count = chars.len();
    let _span = debug_span!("build_lattice", char_count).entered();
    let byte_offsets: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let mut nodes: Vec<LatticeNode> = Vec::new();
    let mut nodes_by_start: Vec<Vec<usize>> = vec![Vec::new(); char_count];

    let mut push = |nodes: &mut Vec<LatticeNode>, node: LatticeNode| {
        nodes_by_start[node.start].push(nodes.len());
        nodes.push(node);
    };

    for start in 0..char_count {
        let mut has_single_char_match = false;

        let suffix = &text[byte_offsets[start]..];
        for result in dict.common_prefix_search(suffix) {
            let end = start + result.surface.chars().count();
            if end == start + 1 {
                has_single_char_match = true;
            }
            for entry in result.entries {
                push(
                    &mut nodes,
                    LatticeNode {
                        start,
                        end,
                        surface: result.surface.to_string(),
                        reading: Some(entry.reading.clone()),
                        cost: entry.cost,
                    },
                );
            }
        }

        if !has_single_char_match {
            push(
                &mut nodes,
                LatticeNode {
                    start,
                    end: start + 1,
                    surface: text[byte_offsets[start]..byte_offsets[start + 1]].to_string(),
                    reading: None,
                    cost: unknown_word_cost,
                },
            );
        }

        // Only the start of a run gets the grouped node.
        let group = unknown_group(chars[start]);
        let run_start = group.is_some() && (start == 0 || unknown_group(chars[start - 1]) != group);
        if run_start {
            let mut end = start + 1;
            while end < char_count && unknown_group(chars[end]) == group {
                end += 1;
            }
            if end - start > 1 {
                push(
                    &mut nodes,
                    LatticeNode {
                        start,
                        end,
                        surface: text[byte_offsets[start]..byte_offsets[end]].to_string(),
                        reading: None,
                        cost: unknown_word_cost,
                    },
                );
            }
        }
    }

    debug!(node_count = nodes.len());
    Lattice {
        input: text.to_string(),
        nodes,
        nodes_by_start,
        char_count,
    }
}
