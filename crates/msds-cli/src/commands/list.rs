use msds_core::catalog::PageRequest;
use msds_core::config::Config;
use msds_core::error::MsdsError;
use msds_core::source::JsonDumpSource;
use std::path::Path;

use crate::output;

pub fn run(
    records: &Path,
    query: &str,
    page: usize,
    per_page: Option<usize>,
    output_format: &str,
    config: &Config,
) -> Result<(), MsdsError> {
    let source = JsonDumpSource::open(records)?;
    let request = PageRequest {
        page,
        per_page: per_page.unwrap_or(config.display.per_page),
    };
    tracing::debug!(query, page = request.page, per_page = request.per_page, "listing records");
    let result = msds_core::list_records(&source, query, request)?;

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::table::print_page(&result, query),
    }

    Ok(())
}
