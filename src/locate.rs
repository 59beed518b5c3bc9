//! Selects the i-th match of every element in one call.

use {Error, Index, Options, OutputTable, RaggedMatches};
use gather::gather_with;

/// Counts each element's matches, resolves `index` against the
/// counts, and gathers the selected pairs. Resolution errors are
/// returned before anything is gathered.
pub fn locate_ith(ragged: &RaggedMatches, index: &Index, options: &Options) -> Result<OutputTable, Error> {
    trace!("locating index {:?} in {} elements", index, ragged.len());
    let counts = ragged.count_matches();
    let resolved = index.resolve(&counts)?;
    gather_with(ragged, &resolved, options)
}
