use std::path::Path;

use rust_xlsxwriter::Workbook;
use sheetsplit_core::{CellValue, Document};

use crate::error::IoError;

/// Persist a [`Document`] as an xlsx workbook at `path`.
///
/// Sheet-name validity (empty names, names over 31 characters, reserved
/// characters) is enforced by the xlsx library and surfaces as
/// [`IoError::Write`].
pub fn write_xlsx<P: AsRef<Path>>(doc: &Document, path: P) -> Result<(), IoError> {
    let mut workbook = Workbook::new();

    for sheet in doc.sheets() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name())?;
        for (row_idx, row) in sheet.rows().iter().enumerate() {
            let row_num = u32::try_from(row_idx)
                .map_err(|_| IoError::CellOutOfRange(sheet.name().to_string()))?;
            for (col_idx, cell) in row.cells().iter().enumerate() {
                let col_num = u16::try_from(col_idx)
                    .map_err(|_| IoError::CellOutOfRange(sheet.name().to_string()))?;
                match cell {
                    CellValue::Empty => {}
                    CellValue::Text(s) => {
                        worksheet.write_string(row_num, col_num, s.as_str())?;
                    }
                    CellValue::Int(i) => {
                        worksheet.write_number(row_num, col_num, *i as f64)?;
                    }
                    CellValue::Number(n) => {
                        worksheet.write_number(row_num, col_num, *n)?;
                    }
                    CellValue::Boolean(b) => {
                        worksheet.write_boolean(row_num, col_num, *b)?;
                    }
                    // Persist the error code as its display text.
                    CellValue::Error(code) => {
                        worksheet.write_string(row_num, col_num, code.as_str())?;
                    }
                }
            }
        }
    }

    // An xlsx file must contain at least one worksheet.
    if doc.sheets().is_empty() {
        workbook.add_worksheet();
    }

    tracing::debug!(sheets = doc.sheet_count(), "saving xlsx workbook");
    workbook.save(path.as_ref())?;
    Ok(())
}
