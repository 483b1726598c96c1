use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use sheetsplit_core::{CellValue, Document, Row, Sheet};

use crate::error::IoError;

/// Load every sheet of an xlsx workbook into a [`Document`].
///
/// The partitioner enforces its own single-sheet precondition; the reader
/// faithfully reports whatever the file contains. Cell values keep their
/// spreadsheet typing; date cells arrive as serial numbers.
pub fn read_xlsx<P: AsRef<Path>>(path: P) -> Result<Document, IoError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let names = workbook.sheet_names();
    tracing::debug!(sheets = names.len(), "opened xlsx workbook");

    let mut doc = Document::new();
    for name in names {
        let range = workbook.worksheet_range(&name)?;
        let mut sheet = Sheet::new(&name);
        for row in range.rows() {
            let mut cells: Vec<CellValue> = row.iter().map(convert_value).collect();
            // calamine pads rows out to the sheet's rectangular width;
            // dropping trailing empties restores the real row lengths so
            // the short-row policy can observe them.
            while cells.last().is_some_and(|c| c.is_empty()) {
                cells.pop();
            }
            sheet.push_row(Row::new(cells));
        }
        tracing::debug!(sheet = %name, rows = sheet.row_count(), "read sheet");
        doc.push_sheet(sheet)?;
    }
    Ok(doc)
}

fn convert_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Int(*i),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Error(error_code(e)),
        // Keep the serial form; the partitioner only needs a textual value.
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

fn error_code(e: &calamine::CellErrorType) -> String {
    use calamine::CellErrorType;
    match e {
        CellErrorType::Div0 => "#DIV/0!",
        CellErrorType::NA => "#N/A",
        CellErrorType::Name => "#NAME?",
        CellErrorType::Null => "#NULL!",
        CellErrorType::Num => "#NUM!",
        CellErrorType::Ref => "#REF!",
        CellErrorType::Value => "#VALUE!",
        _ => "#VALUE!",
    }
    .to_string()
}
