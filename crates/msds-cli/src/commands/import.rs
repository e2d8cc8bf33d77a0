use msds_core::error::MsdsError;
use msds_core::import::import_attachments_xlsx;
use std::path::{Path, PathBuf};

use crate::output;

pub fn run(input_file: &Path, output_file: Option<PathBuf>) -> Result<(), MsdsError> {
    let bytes = std::fs::read(input_file)?;
    let imported = import_attachments_xlsx(&bytes)?;

    match output_file {
        Some(path) => {
            let json = serde_json::to_string_pretty(&imported.attachments)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Imported {} attachment(s), written to {}",
                imported.attachments.len(),
                path.display()
            );
            for w in &imported.warnings {
                eprintln!("  warning: row {}: {}", w.row, w.reason);
            }
        }
        None => {
            output::table::print_imported(&imported);
        }
    }

    Ok(())
}
