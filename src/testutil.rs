#![cfg(test)]

use crate::dict::{DictEntry, SurfaceDictionary};

fn entry(reading: &str, cost: i16) -> DictEntry {
    DictEntry {
        reading: reading.to_string(),
        cost,
    }
}

/// Shared test dictionary for analyzer and transliterator tests.
pub fn test_dict() -> SurfaceDictionary {
    SurfaceDictionary::from_entries(vec![
        ("私".to_string(), vec![entry("わたし", 3000)]),
        ("は".to_string(), vec![entry("は", 2000)]),
        ("を".to_string(), vec![entry("を", 2000)]),
        ("の".to_string(), vec![entry("の", 2000)]),
        ("日".to_string(), vec![entry("にち", 4000), entry("ひ", 4200)]),
        ("本".to_string(), vec![entry("ほん", 4000)]),
        ("日本".to_string(), vec![entry("にほん", 3000)]),
        ("日本語".to_string(), vec![entry("にほんご", 2800)]),
        ("語".to_string(), vec![entry("ご", 4500)]),
        ("今日".to_string(), vec![entry("きょう", 3000), entry("こんにち", 5000)]),
        ("月".to_string(), vec![entry("がつ", 4000), entry("つき", 4100)]),
        ("話す".to_string(), vec![entry("はなす", 3000)]),
        ("食べる".to_string(), vec![entry("たべる", 3000)]),
        ("漢字".to_string(), vec![entry("かんじ", 3000)]),
        ("取り扱い".to_string(), vec![entry("とりあつかい", 3500)]),
        ("お茶".to_string(), vec![entry("おちゃ", 3000)]),
        ("ドイツ語".to_string(), vec![entry("どいつご", 3000)]),
    ])
}
