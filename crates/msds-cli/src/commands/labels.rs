use msds_core::error::MsdsError;
use msds_core::model::AttachmentKind;
use msds_core::source::JsonDumpSource;
use std::path::Path;

use crate::output;

pub fn run(records: &Path, kind: &str, output_format: &str) -> Result<(), MsdsError> {
    let kind = AttachmentKind::from_str_loose(kind).ok_or_else(|| {
        MsdsError::InvalidArgument(format!(
            "unknown label kind '{kind}' (expected warning, equipment or location)"
        ))
    })?;

    let source = JsonDumpSource::open(records)?;
    let labels = msds_core::catalog_labels(&source, kind)?;

    match output_format {
        "json" => output::json::print(&labels)?,
        _ => output::table::print_labels(kind, &labels),
    }

    Ok(())
}
