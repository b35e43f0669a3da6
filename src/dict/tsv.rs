use super::{DictEntry, DictError};
use crate::script::to_hiragana;
use crate::unicode::is_hiragana_reading;

/// Cost given to entries whose source line has no cost column.
pub const DEFAULT_COST: i16 = 5000;

/// Parse a TSV dictionary source.
///
/// Line format: `surface\treading[\tcost]`. Readings may be hiragana or
/// katakana and are stored as hiragana. Blank lines and lines starting with
/// `#` are ignored.
pub fn parse_tsv(text: &str) -> Result<Vec<(String, Vec<DictEntry>)>, DictError> {
    let mut entries = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 2 || fields.len() > 3 {
            return Err(DictError::Parse {
                line: line_no,
                reason: format!("expected 2 or 3 tab-separated fields, got {}", fields.len()),
            });
        }

        let surface = fields[0];
        if surface.is_empty() {
            return Err(DictError::Parse {
                line: line_no,
                reason: "empty surface".to_string(),
            });
        }

        let reading = to_hiragana(fields[1]);
        if !is_hiragana_reading(&reading) {
            return Err(DictError::Parse {
                line: line_no,
                reason: format!("reading {:?} is not kana", fields[1]),
            });
        }

        let cost = match fields.get(2) {
            Some(raw) => raw.trim().parse::<i16>().map_err(|e| DictError::Parse {
                line: line_no,
                reason: format!("invalid cost {raw:?}: {e}"),
            })?,
            None => DEFAULT_COST,
        };

        entries.push((surface.to_string(), vec![DictEntry { reading, cost }]));
    }

    Ok(entries)
}
