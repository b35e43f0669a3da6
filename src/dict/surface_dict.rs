use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{parse_tsv, DictEntry, DictError, Dictionary, SearchResult};

const MAGIC: &[u8; 4] = b"LXFD";
const VERSION: u8 = 1;
const HEADER_SIZE: usize = 5; // 4 bytes magic + 1 byte version

#[derive(Serialize, Deserialize)]
struct SurfaceData {
    entries: BTreeMap<String, Vec<DictEntry>>,
}

pub struct SurfaceDictionary {
    data: SurfaceData,
    /// Length in chars of the longest surface; bounds prefix search.
    max_surface_chars: usize,
}

impl SurfaceDictionary {
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Vec<DictEntry>)>) -> Self {
        let mut map: BTreeMap<String, Vec<DictEntry>> = BTreeMap::new();
        for (surface, candidates) in entries {
            if surface.is_empty() {
                continue;
            }
            map.entry(surface).or_default().extend(candidates);
        }
        Self::from_data(SurfaceData { entries: map })
    }

    fn from_data(mut data: SurfaceData) -> Self {
        for candidates in data.entries.values_mut() {
            candidates.sort_by_key(|e| e.cost);
        }
        let max_surface_chars = data
            .entries
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0);
        Self {
            data,
            max_surface_chars,
        }
    }

    /// Build from TSV source text (`surface<TAB>reading[<TAB>cost]`).
    pub fn from_tsv(text: &str) -> Result<Self, DictError> {
        Ok(Self::from_entries(parse_tsv(text)?))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        let mut buf = Vec::new();
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        let encoded = bincode::serialize(&self.data).map_err(DictError::Serialize)?;
        buf.extend_from_slice(&encoded);
        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, DictError> {
        if data.len() < HEADER_SIZE {
            return Err(DictError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(DictError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(DictError::UnsupportedVersion(data[4]));
        }
        let surface_data: SurfaceData =
            bincode::deserialize(&data[HEADER_SIZE..]).map_err(DictError::Deserialize)?;
        Ok(Self::from_data(surface_data))
    }

    /// Open a compiled LXFD file, or a TSV source when the path ends in `.tsv`.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let dict = if path.extension().is_some_and(|ext| ext == "tsv") {
            Self::from_tsv(&fs::read_to_string(path)?)?
        } else {
            Self::from_bytes(&fs::read(path)?)?
        };
        let (surfaces, entries) = dict.stats();
        debug!(path = %path.display(), surfaces, entries, "dictionary loaded");
        Ok(dict)
    }

    pub fn save(&self, path: &Path) -> Result<(), DictError> {
        fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    /// Returns (surface_count, entry_count).
    pub fn stats(&self) -> (usize, usize) {
        let entries = self.data.entries.values().map(Vec::len).sum();
        (self.data.entries.len(), entries)
    }
}

impl Dictionary for SurfaceDictionary {
    fn lookup(&self, surface: &str) -> Option<&[DictEntry]> {
        self.data.entries.get(surface).map(|v| v.as_slice())
    }

    fn common_prefix_search(&self, query: &str) -> Vec<SearchResult<'_>> {
        query
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .take(self.max_surface_chars)
            .filter_map(|end| self.data.entries.get_key_value(&query[..end]))
            .map(|(surface, entries)| SearchResult {
                surface: surface.as_str(),
                entries: entries.as_slice(),
            })
            .collect()
    }
}
