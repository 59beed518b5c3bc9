//! Resolution of signed, 1-based match indices to concrete positions.
//!
//! A positive index `i` counts from the first match and clamps to the
//! last one: `min(i, m)`. A negative index counts from the last match
//! (`-1` is the last) and clamps to the first one:
//! `max(m - (|i| - 1), 1)`. Zero and missing indices are rejected.
//!
//! Every resolved position lies in `[1, max(1, m)]`. When `m = 0`
//! the position is 1 even though there is nothing to read; gathering
//! handles that case.

use Error;
use std::cmp::{max, min};

/// A requested match index: one index shared by every element, or
/// one index per element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Index {
    Uniform(Option<i32>),
    PerElement(Vec<Option<i32>>),
}

impl Index {
    /// Resolves the index against each element's match count.
    pub fn resolve(&self, counts: &[usize]) -> Result<Vec<usize>, Error> {
        match *self {
            Index::Uniform(i) => resolve_uniform(i, counts),
            Index::PerElement(ref indices) => resolve_many(indices, counts),
        }
    }
}

impl From<i32> for Index {
    fn from(i: i32) -> Self {
        Index::Uniform(Some(i))
    }
}

impl From<Option<i32>> for Index {
    fn from(i: Option<i32>) -> Self {
        Index::Uniform(i)
    }
}

impl From<Vec<i32>> for Index {
    fn from(indices: Vec<i32>) -> Self {
        Index::PerElement(indices.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<i32>>> for Index {
    fn from(indices: Vec<Option<i32>>) -> Self {
        Index::PerElement(indices)
    }
}

/// Resolves index `i` against `m` matches and returns a 1-based position.
pub fn resolve(i: Option<i32>, m: usize) -> Result<usize, Error> {
    let i = validate(i)?;
    Ok(resolve_valid(i, m))
}

/// Resolves one index per element. `indices` and `counts` must have
/// the same length, and every index must be nonzero and present.
pub fn resolve_many(indices: &[Option<i32>], counts: &[usize]) -> Result<Vec<usize>, Error> {
    trace!("resolving {} per-element indices", indices.len());
    if indices.len() != counts.len() {
        debug!("rejected {} indices for {} elements", indices.len(), counts.len());
        return Err(Error::LengthMismatch{expected: counts.len(), found: indices.len()})
    }

    indices.iter().zip(counts).enumerate().map(|(j, (&i, &m))| {
        match validate(i) {
            Ok(i) => Ok(resolve_valid(i, m)),
            Err(err) => {
                debug!("rejected index {:?} for element {}", i, j);
                Err(err)
            }
        }
    }).collect()
}

/// Resolves the same index against every element's match count.
pub fn resolve_uniform(i: Option<i32>, counts: &[usize]) -> Result<Vec<usize>, Error> {
    trace!("resolving index {:?} for {} elements", i, counts.len());
    let i = validate(i)?;
    Ok(counts.iter().map(|&m| resolve_valid(i, m)).collect())
}

fn validate(i: Option<i32>) -> Result<i64, Error> {
    match i {
        None | Some(0) => Err(Error::InvalidArgument),
        Some(i) => Ok(i as i64),
    }
}

// `i` is nonzero
fn resolve_valid(i: i64, m: usize) -> usize {
    let m = m as i64;
    let position = if i > 0 {
        min(i, m)
    } else {
        m - (i.abs() - 1)
    };
    max(position, 1) as usize
}
