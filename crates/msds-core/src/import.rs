use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use serde::Serialize;

use crate::error::MsdsError;
use crate::model::{Attachment, TypeCode};

/// A row that was skipped or looked suspicious during import.
#[derive(Debug, Clone, Serialize)]
pub struct ImportWarning {
    /// 1-based spreadsheet row number.
    pub row: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportedAttachments {
    pub attachments: Vec<Attachment>,
    pub warnings: Vec<ImportWarning>,
}

/// Read attachment definitions from the first worksheet of an xlsx file.
///
/// Row 1 is a header; data rows hold `aid`, `title`, `type`, `file_loc` in
/// columns A-D. Rows without an id or title are skipped. Rows with an
/// unknown type are kept but reported.
pub fn import_attachments_xlsx(bytes: &[u8]) -> Result<ImportedAttachments, MsdsError> {
    let cursor = Cursor::new(bytes);
    let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
        .map_err(|e| MsdsError::Import(format!("failed to open xlsx: {e}")))?;

    let sheet = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| MsdsError::Import("workbook has no worksheets".into()))?
        .map_err(|e| MsdsError::Import(format!("failed to read first worksheet: {e}")))?;

    let mut imported = ImportedAttachments::default();
    for (index, row) in sheet.rows().enumerate().skip(1) {
        let row_number = index + 1;
        match attachment_from_row(row) {
            Ok(attachment) => {
                if attachment.kind().is_none() {
                    imported.warnings.push(ImportWarning {
                        row: row_number,
                        reason: format!(
                            "'{}' has unknown type '{}'",
                            attachment.title, attachment.type_code
                        ),
                    });
                }
                imported.attachments.push(attachment);
            }
            Err(reason) => {
                tracing::debug!(row = row_number, %reason, "skipping xlsx row");
                imported.warnings.push(ImportWarning {
                    row: row_number,
                    reason,
                });
            }
        }
    }

    if imported.attachments.is_empty() {
        return Err(MsdsError::Import("no attachment rows found in xlsx".into()));
    }

    tracing::info!(
        count = imported.attachments.len(),
        warnings = imported.warnings.len(),
        "imported attachments from xlsx"
    );
    Ok(imported)
}

fn attachment_from_row(row: &[Data]) -> Result<Attachment, String> {
    let aid = row
        .first()
        .and_then(cell_as_string)
        .ok_or_else(|| "missing aid".to_string())?;
    let title = row
        .get(1)
        .and_then(cell_as_string)
        .ok_or_else(|| format!("attachment {aid} has no title"))?;

    Ok(Attachment {
        aid,
        title,
        type_code: row.get(2).map(cell_as_type_code).unwrap_or_default(),
        file_loc: row.get(3).and_then(cell_as_string),
    })
}

fn cell_as_string(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        Data::Empty => None,
        _ => Some(format!("{cell}")),
    }
}

fn cell_as_type_code(cell: &Data) -> TypeCode {
    match cell {
        Data::Int(i) => TypeCode::Int(*i),
        Data::Float(f) if f.fract() == 0.0 => TypeCode::Int(*f as i64),
        Data::String(s) => TypeCode::Text(s.trim().to_string()),
        _ => TypeCode::default(),
    }
}
