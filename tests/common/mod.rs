#![allow(dead_code)]

extern crate serde;
extern crate serde_json;
extern crate rmp_serde;

use locate_ith::RaggedMatches;

pub fn test_serde<T>(value: T)
    where T: ::std::fmt::Debug + serde::Serialize + serde::de::DeserializeOwned + PartialEq
 {
    let json = serde_json::to_string(&value).unwrap();
    let value2 = serde_json::from_str(&json).unwrap();
    assert_eq!(value, value2);

    let msgpack = rmp_serde::to_vec(&value).unwrap();
    let value3 = rmp_serde::from_slice(&msgpack).unwrap();
    assert_eq!(value, value3);
}

/// Builds a collection with one table per slice of `(start, end)` pairs.
pub fn ragged(tables: &[&[(i32, i32)]]) -> RaggedMatches {
    let mut ragged = RaggedMatches::new();
    for pairs in tables {
        ragged.push_pairs(pairs.iter().cloned());
    }
    ragged
}

/// Builds a collection whose elements have the given match counts.
/// Match `k` (1-based) of element `j` is `(100 * j + k, 100 * j + k + 1)`.
pub fn ragged_with_counts(counts: &[usize]) -> RaggedMatches {
    let mut ragged = RaggedMatches::new();
    for (j, &m) in counts.iter().enumerate() {
        let base = 100 * j as i32;
        ragged.push_pairs((1..m as i32 + 1).map(|k| (base + k, base + k + 1)));
    }
    ragged
}
