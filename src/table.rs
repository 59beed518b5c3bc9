//! The dense `n x 2` table of gathered `(start, end)` pairs.

use serde::{Deserialize, Deserializer};
use serde::de;

/// A dense table with one row per element and two columns: the
/// start offset and the end offset of the selected match. Cells are
/// stored column-major (all starts, then all ends). A `None` cell is
/// a missing offset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputTable {
    nrow: usize,
    data: Vec<Option<i32>>,
}

#[derive(Deserialize)]
struct RawTable {
    nrow: usize,
    data: Vec<Option<i32>>,
}

pub struct Rows<'a> {
    table: &'a OutputTable,
    next:  usize,
}

impl OutputTable {
    /// Constructs a table of `nrow` rows with every cell missing.
    pub(crate) fn missing(nrow: usize) -> Self {
        OutputTable{nrow, data: vec![None; nrow * 2]}
    }

    /// Constructs a table from `(start, end)` rows.
    pub fn from_rows<I>(rows: I) -> Self where I: IntoIterator<Item=(Option<i32>, Option<i32>)> {
        let rows: Vec<_> = rows.into_iter().collect();
        let mut table = OutputTable::missing(rows.len());
        for (j, (start, end)) in rows.into_iter().enumerate() {
            table.set_row(j, start, end);
        }
        table
    }

    pub(crate) fn set_row(&mut self, j: usize, start: Option<i32>, end: Option<i32>) {
        self.data[j] = start;
        self.data[j + self.nrow] = end;
    }

    /// Returns the number of rows.
    pub fn nrow(&self) -> usize {
        self.nrow
    }

    /// Returns the number of columns, which is always 2.
    pub fn ncol(&self) -> usize {
        2
    }

    /// Returns `(nrow, ncol)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.nrow, 2)
    }

    pub fn is_empty(&self) -> bool {
        self.nrow == 0
    }

    /// Returns the `(start, end)` pair in row `j`, or None if `j` is
    /// out of bounds.
    pub fn row(&self, j: usize) -> Option<(Option<i32>, Option<i32>)> {
        if j >= self.nrow { return None }
        Some((self.data[j], self.data[j + self.nrow]))
    }

    /// Returns an iterator over the rows.
    pub fn rows(&self) -> Rows {
        Rows{table: self, next: 0}
    }

    /// Returns the start column.
    pub fn starts(&self) -> &[Option<i32>] {
        &self.data[..self.nrow]
    }

    /// Returns the end column.
    pub fn ends(&self) -> &[Option<i32>] {
        &self.data[self.nrow..]
    }

    /// Returns the cells in column-major order.
    pub fn as_slice(&self) -> &[Option<i32>] {
        &self.data
    }

    /// Consumes the table and returns its column-major cells.
    pub fn into_vec(self) -> Vec<Option<i32>> {
        self.data
    }
}

impl<'a> Iterator for Rows<'a> {
    type Item = (Option<i32>, Option<i32>);

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.table.row(self.next)?;
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.table.nrow - self.next;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Rows<'a> {}

// The cell count is checked so that row and column
// accessors never index past the data.
impl<'de> Deserialize<'de> for OutputTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RawTable{nrow, data} = RawTable::deserialize(deserializer)?;
        if nrow.checked_mul(2) != Some(data.len()) {
            return Err(de::Error::custom(format!("expected {} cells for {} rows, found {}", nrow.saturating_mul(2), nrow, data.len())))
        }
        Ok(OutputTable{nrow, data})
    }
}
