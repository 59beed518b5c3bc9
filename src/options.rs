//! Gather configuration.
//!
//! Options are plain serde structs so they can be loaded from the
//! caller's configuration:
//!
//! ```rust
//! extern crate locate_ith;
//! use locate_ith::{Options, OnEmpty};
//!
//! fn main() {
//!     let options = Options::from_json(r#"{"on_empty": "fail"}"#).unwrap();
//!     assert_eq!(options.on_empty, OnEmpty::Fail);
//! }
//! ```

use Error;
use serde_json;

/// What to do when gathering from an element with zero matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnEmpty {
    /// Emit a `(None, None)` row.
    Missing,
    /// Fail with `Error::IndexOutOfRange`.
    Fail,
}

/// Options for `gather_with` and `locate_ith`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub on_empty: OnEmpty,
}

impl Default for OnEmpty {
    fn default() -> Self {
        OnEmpty::Missing
    }
}

impl Options {
    pub fn new(on_empty: OnEmpty) -> Self {
        Options{on_empty}
    }

    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}
