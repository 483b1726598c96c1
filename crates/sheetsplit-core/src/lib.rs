//! Split a single-sheet tabular document into one sheet per distinct value
//! of a designated column.
//!
//! The core operation is [`split_by_column`]: a single linear pass over the
//! rows of the one input sheet, routing each surviving row into an output
//! sheet named after the (optionally trimmed) text of the chosen column.
//! Rows whose key matches a suppression pattern are dropped from all output.
//!
//! File formats are deliberately out of scope here; see the `sheetsplit-io`
//! crate for the xlsx collaborators.

pub mod document;
pub mod error;
pub mod filter;
pub mod split;
pub mod value;

pub use document::{Document, Row, Sheet};
pub use error::{CoerceError, DocumentError, SplitError};
pub use filter::{Contains, KeyPattern, default_patterns};
pub use split::{SplitOptions, split_by_column};
pub use value::CellValue;
