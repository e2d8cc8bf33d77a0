pub mod catalog;
pub mod classify;
pub mod config;
pub mod error;
pub mod import;
pub mod links;
pub mod model;
pub mod profile;
pub mod source;

use catalog::{CatalogLabel, CatalogRow, Page, PageRequest};
use config::Config;
use error::MsdsError;
use model::AttachmentKind;
use profile::MsdsProfile;
use source::RecordSource;

/// Main API entry point: fetch one record from a source and build its profile.
pub fn profile_record(
    source: &dyn RecordSource,
    mid: &str,
    config: &Config,
) -> Result<MsdsProfile, MsdsError> {
    let record = source.record(mid)?;
    tracing::debug!(
        mid,
        source = source.source_name(),
        attachments = record.attachments.len(),
        "building profile"
    );
    Ok(profile::build_profile(&record, config))
}

/// Search a source and return one page of catalog rows.
pub fn list_records(
    source: &dyn RecordSource,
    keyword: &str,
    request: PageRequest,
) -> Result<Page<CatalogRow>, MsdsError> {
    let records = source.records()?;
    Ok(catalog::list_page(&records, keyword, request))
}

/// Distinct attachment titles of one kind across every record in a source.
pub fn catalog_labels(
    source: &dyn RecordSource,
    kind: AttachmentKind,
) -> Result<Vec<CatalogLabel>, MsdsError> {
    let records = source.records()?;
    Ok(catalog::collect_labels(&records, kind))
}
