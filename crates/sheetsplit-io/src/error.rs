use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("reading xlsx workbook")]
    Read(#[from] calamine::XlsxError),

    /// Covers write failures including sheet names the xlsx format
    /// rejects (empty, over 31 characters, reserved characters).
    #[error("writing xlsx workbook")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    #[error("duplicate sheet name in source workbook")]
    Document(#[from] sheetsplit_core::DocumentError),

    #[error("sheet {0:?} has a cell address outside the supported range")]
    CellOutOfRange(String),
}
