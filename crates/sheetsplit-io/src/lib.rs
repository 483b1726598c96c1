//! xlsx load/save for `sheetsplit` documents.
//!
//! The partitioner itself is format-agnostic; this crate supplies the two
//! external collaborators it expects: decoding an xlsx workbook into a
//! [`sheetsplit_core::Document`] and persisting a document back to disk.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::IoError;
pub use reader::read_xlsx;
pub use writer::write_xlsx;
