//! # locate_ith
//!
//! Selects the *i*-th match out of every element's list of matches.
//!
//! String search routines that find *all* matches return, for each
//! input string, a table of `(start, end)` offset pairs. Callers often
//! want only one of them: "the second match", or "the last match" via
//! a negative index. This crate turns a signed, 1-based request into a
//! concrete position for every element and gathers the selected pairs
//! into a dense `n x 2` table.
//!
//! * **[RaggedMatches](ragged/struct.RaggedMatches.html):** every element's match table in one flat arena
//! * **[Index](index/enum.Index.html):** a uniform or per-element request
//! * **[OutputTable](table/struct.OutputTable.html):** the gathered `(start, end)` rows
//! * **[Options](options/struct.Options.html):** what to do with elements that have no matches
//!
//! ## Example
//!
//! ```rust
//! extern crate locate_ith;
//! use locate_ith::{locate_ith, Index, Options, RaggedMatches};
//!
//! fn main() {
//!     let mut ragged = RaggedMatches::new();
//!     ragged.push_pairs(vec![(1, 3), (5, 7), (9, 11)]);
//!     ragged.push_pairs(vec![(2, 4)]);
//!
//!     // -1 selects the last match of every element.
//!     let table = locate_ith(&ragged, &Index::from(-1i32), &Options::default()).unwrap();
//!     assert_eq!(table.row(0), Some((Some(9), Some(11))));
//!     assert_eq!(table.row(1), Some((Some(2), Some(4))));
//! }
//! ```
//!
//! ## Index rules
//!
//! Indices are 1-based and must be nonzero. A positive index counts
//! from the first match and clamps to the last one; a negative index
//! counts from the last match (`-1` is the last) and clamps to the
//! first one. A missing index (`None`) is rejected just like zero.
//!
//! ## Elements without matches
//!
//! An element whose table holds zero matches still resolves to
//! position 1, but there is nothing to read there. By default the
//! gathered row is `(None, None)`; set
//! [`OnEmpty::Fail`](options/enum.OnEmpty.html) to get an
//! `IndexOutOfRange` error instead.
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0 (https://www.apache.org/licenses/LICENSE-2.0)
//! * MIT license (https://opensource.org/licenses/MIT)
//!
//! at your option.

#[macro_use] extern crate failure;
#[macro_use] extern crate log;
extern crate serde;
#[macro_use] extern crate serde_derive;
extern crate serde_json;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
extern crate rand;

#[macro_use] mod macros;

pub mod gather;
pub mod index;
pub mod locate;
pub mod options;
pub mod ragged;
pub mod table;

mod error;

pub use error::{Error, Result};

pub use gather::{gather, gather_with};
pub use index::{Index, resolve, resolve_many, resolve_uniform};
pub use locate::locate_ith;
pub use options::{OnEmpty, Options};
pub use ragged::{MatchTable, RaggedMatches, count_matches};
pub use table::OutputTable;
