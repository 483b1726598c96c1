use rustc_hash::FxHashMap;

use crate::document::{Document, Row};
use crate::error::SplitError;
use crate::filter::KeyPattern;
use crate::value::CellValue;

/// Behavioral flags and suppression rules for [`split_by_column`].
#[derive(Debug, Default)]
pub struct SplitOptions {
    /// When set, a row with fewer than `column + 1` cells aborts the whole
    /// operation; otherwise such rows are silently skipped.
    pub short_row_is_error: bool,
    /// When set, leading/trailing whitespace is stripped from the group
    /// key before it names or selects an output sheet. Suppression
    /// patterns still see the untrimmed value.
    pub trim_keys: bool,
    /// Ordered suppression rules; a row whose untrimmed key matches any of
    /// them is dropped from all output.
    pub patterns: Vec<Box<dyn KeyPattern>>,
}

/// Partition the single sheet of `source` into one output sheet per
/// distinct group key, where a row's group key is the text of its cell at
/// `column` (zero-based).
///
/// Surviving rows are written as plain text cells, in source order, each to
/// exactly one output sheet; output sheets appear in key first-appearance
/// order. The operation is all-or-nothing: any fatal error returns `Err`
/// with no partial document, and `source` is never mutated.
pub fn split_by_column(
    source: &Document,
    column: usize,
    opts: &SplitOptions,
) -> Result<Document, SplitError> {
    let sheet = match source.sheets() {
        [only] => only,
        sheets => return Err(SplitError::NotSingleSheet(sheets.len())),
    };

    let mut out = Document::new();
    // Per-call key → output sheet index; append-only.
    let mut by_key: FxHashMap<String, usize> = FxHashMap::default();

    'rows: for (row_idx, row) in sheet.rows().iter().enumerate() {
        // Short rows (including empty ones) either abort or skip, per config.
        if row.len() < column + 1 {
            if opts.short_row_is_error {
                return Err(SplitError::ShortRow {
                    row: row_idx,
                    have: row.len(),
                    need: column + 1,
                });
            }
            continue;
        }

        // The designated cell is present; an empty cell is a normal
        // empty-string key, not a short row.
        let raw_key = row.cells()[column]
            .to_text()
            .map_err(|source| SplitError::Coerce {
                row: row_idx,
                col: column,
                source,
            })?;

        // Suppression runs against the untrimmed key, before trimming or
        // sheet selection, so it wins regardless of the other flags.
        for pattern in &opts.patterns {
            if pattern.is_match(&raw_key) {
                continue 'rows;
            }
        }

        let key = if opts.trim_keys {
            raw_key.trim().to_string()
        } else {
            raw_key
        };

        let sheet_idx = match by_key.get(&key) {
            Some(&idx) => idx,
            None => {
                let idx = out
                    .add_sheet(key.clone())
                    .map_err(|source| SplitError::CreateSheet {
                        name: key.clone(),
                        source,
                    })?;
                by_key.insert(key, idx);
                idx
            }
        };

        let mut text_cells = Vec::with_capacity(row.len());
        for (col_idx, cell) in row.cells().iter().enumerate() {
            let text = cell.to_text().map_err(|source| SplitError::Coerce {
                row: row_idx,
                col: col_idx,
                source,
            })?;
            text_cells.push(CellValue::Text(text));
        }
        out.sheet_at_mut(sheet_idx).push_row(Row::new(text_cells));
    }

    Ok(out)
}
