use msds_core::config::Config;
use msds_core::error::MsdsError;
use msds_core::source::JsonDumpSource;
use std::path::Path;

use crate::output;

pub fn run(records: &Path, mid: &str, output_format: &str, config: &Config) -> Result<(), MsdsError> {
    let source = JsonDumpSource::open(records)?;
    let profile = msds_core::profile_record(&source, mid, config)?;

    match output_format {
        "json" => output::json::print(&profile)?,
        _ => output::table::print_profile(&profile),
    }

    Ok(())
}
