//! Gathers the `(start, end)` pair at each element's resolved
//! position into an `OutputTable`.
//!
//! Gathering runs in one pass over the elements and allocates only
//! the output table. It never reads outside an element's table: a
//! position of 0 or past the last match is an `IndexOutOfRange`
//! error, and an element with no matches is handled according to
//! `Options::on_empty`.

use {Error, OnEmpty, Options, OutputTable, RaggedMatches};

/// Gathers with the default options, so elements without matches
/// produce `(None, None)` rows.
pub fn gather(ragged: &RaggedMatches, resolved: &[usize]) -> Result<OutputTable, Error> {
    gather_with(ragged, resolved, &Options::default())
}

/// Gathers the pair at `resolved[j]` (1-based) from each element `j`.
pub fn gather_with(ragged: &RaggedMatches, resolved: &[usize], options: &Options) -> Result<OutputTable, Error> {
    trace!("gathering {} rows", ragged.len());
    if resolved.len() != ragged.len() {
        debug!("rejected {} positions for {} elements", resolved.len(), ragged.len());
        return Err(Error::LengthMismatch{expected: ragged.len(), found: resolved.len()})
    }

    let mut out = OutputTable::missing(ragged.len());
    for (j, (table, &position)) in ragged.iter().zip(resolved).enumerate() {
        if table.is_empty() && options.on_empty == OnEmpty::Missing {
            continue
        }

        match table.get(position) {
            Some((start, end)) => out.set_row(j, start, end),
            None => {
                debug!("position {} out of range for element {} with {} matches", position, j, table.len());
                return Err(Error::IndexOutOfRange{element: j, position, count: table.len()})
            }
        }
    }
    Ok(out)
}
