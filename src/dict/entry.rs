use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    /// Hiragana reading of the surface
    pub reading: String,
    /// Word cost (lower = more preferred)
    pub cost: i16,
}
