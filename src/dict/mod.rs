//! Surface-keyed pronunciation dictionary.
//!
//! `SurfaceDictionary` maps surface forms to their readings and costs. It is
//! built from a TSV source and stored on disk in the LXFD binary format.

mod entry;
mod surface_dict;
mod tsv;

pub use entry::DictEntry;
pub use surface_dict::SurfaceDictionary;
pub use tsv::parse_tsv;

use std::io;

/// Error type for dictionary sources and binary I/O.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected LXFD)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

pub struct SearchResult<'a> {
    pub surface: &'a str,
    pub entries: &'a [DictEntry],
}

pub trait Dictionary: Send + Sync {
    /// Entries for an exact surface, sorted by ascending cost.
    fn lookup(&self, surface: &str) -> Option<&[DictEntry]>;

    /// Every dictionary surface that is a prefix of `query`, shortest first.
    fn common_prefix_search(&self, query: &str) -> Vec<SearchResult<'_>>;
}
