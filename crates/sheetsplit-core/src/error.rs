use thiserror::Error;

/// A cell value that cannot be rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cell holds error value {code} with no textual form")]
pub struct CoerceError {
    pub code: String,
}

/// Failures constructing the in-memory document model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("a sheet named {0:?} already exists")]
    DuplicateSheetName(String),
}

/// Fatal partitioning failures. Any of these aborts the whole operation;
/// no partial output document is ever returned.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The source must contain exactly one sheet.
    #[error("input document must contain exactly one sheet, found {0}")]
    NotSingleSheet(usize),

    /// Raised only when `short_row_is_error` is set; otherwise short rows
    /// are skipped silently.
    #[error("not enough cells in row {row}: have {have}, need {need}")]
    ShortRow { row: usize, have: usize, need: usize },

    /// Cell-to-text conversion failed. Always fatal: this signals a
    /// malformed source document, not a per-row condition.
    #[error("coercing cell to text at row {row}, column {col}")]
    Coerce {
        row: usize,
        col: usize,
        #[source]
        source: CoerceError,
    },

    #[error("adding sheet {name:?} to output document")]
    CreateSheet {
        name: String,
        #[source]
        source: DocumentError,
    },
}
