//! Per-element match tables stored in one flat arena.
//!
//! Each element's table holds `m` matches as `2m` cells laid out
//! column-major: the `m` start offsets first, then the `m` end
//! offsets. The arena keeps every table back to back in a single
//! buffer and records where each table ends.

use Error;
use serde::{Serialize, Serializer, Deserialize, Deserializer};
use serde::ser::SerializeSeq;
use serde::de::{self, Visitor, SeqAccess};
use std::fmt;

/// A ragged collection of match tables, one per input element.
#[derive(Debug, Clone, PartialEq)]
pub struct RaggedMatches {
    cells:  Vec<Option<i32>>,
    bounds: Vec<usize>,
}

/// A borrowed view of one element's match table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchTable<'a> {
    cells: &'a [Option<i32>],
}

pub struct Iter<'a> {
    ragged: &'a RaggedMatches,
    next:   usize,
}

impl RaggedMatches {
    /// Constructs an empty collection.
    pub fn new() -> Self {
        RaggedMatches{cells: vec![], bounds: vec![0]}
    }

    /// Constructs an empty collection with room for `elements`
    /// tables holding `cells` offsets in total.
    pub fn with_capacity(elements: usize, cells: usize) -> Self {
        let mut bounds = Vec::with_capacity(elements + 1);
        bounds.push(0);
        RaggedMatches{cells: Vec::with_capacity(cells), bounds}
    }

    /// Builds a collection from a sequence of flat, column-major tables.
    pub fn from_tables<I, T>(tables: I) -> Result<Self, Error>
        where I: IntoIterator<Item=T>,
              T: AsRef<[Option<i32>]>,
    {
        let mut ragged = RaggedMatches::new();
        for table in tables {
            ragged.push_table(table.as_ref())?;
        }
        Ok(ragged)
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.bounds.len() - 1
    }

    /// Returns true if the collection has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a flat table of `m` starts followed by `m` ends.
    /// Fails without modifying the collection if the table has
    /// odd length.
    pub fn push_table(&mut self, table: &[Option<i32>]) -> Result<(), Error> {
        try_assert!(table.len() % 2 == 0, Error::OddTableLength{element: self.len(), len: table.len()});
        self.cells.extend_from_slice(table);
        self.bounds.push(self.cells.len());
        Ok(())
    }

    /// Appends a table built from complete `(start, end)` pairs.
    pub fn push_pairs<I>(&mut self, pairs: I) where I: IntoIterator<Item=(i32, i32)> {
        let pairs: Vec<(i32, i32)> = pairs.into_iter().collect();
        self.cells.extend(pairs.iter().map(|&(start, _)| Some(start)));
        self.cells.extend(pairs.iter().map(|&(_, end)| Some(end)));
        self.bounds.push(self.cells.len());
    }

    /// Appends a table with zero matches.
    pub fn push_empty(&mut self) {
        self.bounds.push(self.cells.len());
    }

    /// Returns the table of element `j`, or None if `j` is out of bounds.
    pub fn table(&self, j: usize) -> Option<MatchTable> {
        if j >= self.len() { return None }
        let cells = &self.cells[self.bounds[j]..self.bounds[j+1]];
        Some(MatchTable{cells})
    }

    /// Returns an iterator over the element tables in order.
    pub fn iter(&self) -> Iter {
        Iter{ragged: self, next: 0}
    }

    /// Returns the number of matches in each element's table.
    pub fn count_matches(&self) -> Vec<usize> {
        self.bounds.windows(2).map(|w| (w[1] - w[0]) / 2).collect()
    }
}

impl Default for RaggedMatches {
    fn default() -> Self {
        RaggedMatches::new()
    }
}

/// Returns the number of matches in each element's table.
pub fn count_matches(ragged: &RaggedMatches) -> Vec<usize> {
    ragged.count_matches()
}

impl<'a> MatchTable<'a> {
    /// Returns the number of matches.
    pub fn len(&self) -> usize {
        self.cells.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the start offsets.
    pub fn starts(&self) -> &'a [Option<i32>] {
        &self.cells[..self.len()]
    }

    /// Returns the end offsets.
    pub fn ends(&self) -> &'a [Option<i32>] {
        &self.cells[self.len()..]
    }

    /// Returns the flat column-major cells.
    pub fn as_slice(&self) -> &'a [Option<i32>] {
        self.cells
    }

    /// Returns the `(start, end)` pair at a 1-based position, or
    /// None if the position is 0 or past the last match.
    pub fn get(&self, position: usize) -> Option<(Option<i32>, Option<i32>)> {
        let m = self.len();
        if position == 0 || position > m { return None }
        Some((self.cells[position - 1], self.cells[position - 1 + m]))
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = MatchTable<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let table = self.ragged.table(self.next)?;
        self.next += 1;
        Some(table)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ragged.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a RaggedMatches {
    type Item = MatchTable<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

// Serialized as a sequence of flat tables so that the
// boundary vector never has to be trusted on the way in.

impl Serialize for RaggedMatches {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for table in self.iter() {
            seq.serialize_element(table.as_slice())?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for RaggedMatches {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RaggedVisitor;

        impl<'de> Visitor<'de> for RaggedVisitor {
            type Value = RaggedMatches;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of even-length match tables")
            }

            fn visit_seq<V>(self, mut visitor: V) -> Result<Self::Value, V::Error> where V: SeqAccess<'de> {
                let mut ragged = RaggedMatches::with_capacity(visitor.size_hint().unwrap_or(0), 0);
                while let Some(table) = visitor.next_element::<Vec<Option<i32>>>()? {
                    ragged.push_table(&table).map_err(de::Error::custom)?;
                }
                Ok(ragged)
            }
        }

        deserializer.deserialize_seq(RaggedVisitor)
    }
}
