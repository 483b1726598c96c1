use crate::error::DocumentError;
use crate::value::CellValue;

/// An ordered sequence of cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<CellValue>,
}

impl Row {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    /// Build a row of plain text cells.
    pub fn from_text<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells
                .into_iter()
                .map(|s| CellValue::Text(s.into()))
                .collect(),
        }
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A named, ordered sequence of rows. Names are unique per [`Document`].
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    rows: Vec<Row>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// An ordered collection of sheets.
///
/// Sheet order is insertion order; name lookup is linear, which is fine for
/// the sheet counts this crate deals in (callers that route many rows keep
/// their own name→index map, as the partitioner does).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    sheets: Vec<Sheet>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Append a new empty sheet and return its index.
    ///
    /// Name-validity rules of any on-disk format are the format writer's
    /// concern; the in-memory model only enforces uniqueness.
    pub fn add_sheet(&mut self, name: impl Into<String>) -> Result<usize, DocumentError> {
        let name = name.into();
        if self.sheets.iter().any(|s| s.name() == name) {
            return Err(DocumentError::DuplicateSheetName(name));
        }
        self.sheets.push(Sheet::new(name));
        Ok(self.sheets.len() - 1)
    }

    /// Append a pre-built sheet and return its index. Used by format
    /// readers that assemble sheets row by row before attaching them.
    pub fn push_sheet(&mut self, sheet: Sheet) -> Result<usize, DocumentError> {
        if self.sheets.iter().any(|s| s.name() == sheet.name()) {
            return Err(DocumentError::DuplicateSheetName(sheet.name().to_string()));
        }
        self.sheets.push(sheet);
        Ok(self.sheets.len() - 1)
    }

    pub(crate) fn sheet_at_mut(&mut self, index: usize) -> &mut Sheet {
        &mut self.sheets[index]
    }
}
