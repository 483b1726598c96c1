use std::fmt::{self, Display};

use crate::error::CoerceError;

/// A typed cell value as read from a tabular source.
///
/// This is the vocabulary type the partitioner consumes; the output side
/// only ever produces [`CellValue::Text`]. Dates arrive from spreadsheet
/// backends as their serial `Number` form.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Number(f64),
    Boolean(bool),
    /// A spreadsheet error code such as `#DIV/0!` or `#REF!`.
    Error(String),
}

impl CellValue {
    /// Render the cell as text.
    ///
    /// Every data-bearing variant has a textual form. `Empty` renders as
    /// the empty string, so an empty-but-present cell yields a normal
    /// (empty-string) group key rather than a structural error. An `Error`
    /// cell has no faithful textual value and fails coercion.
    pub fn to_text(&self) -> Result<String, CoerceError> {
        match self {
            CellValue::Empty => Ok(String::new()),
            CellValue::Text(s) => Ok(s.clone()),
            CellValue::Int(i) => Ok(i.to_string()),
            CellValue::Number(n) => Ok(n.to_string()),
            CellValue::Boolean(b) => Ok(if *b { "TRUE" } else { "FALSE" }.to_string()),
            CellValue::Error(code) => Err(CoerceError { code: code.clone() }),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Error(code) => write!(f, "{code}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}
