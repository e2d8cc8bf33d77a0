use crate::model::{Attachment, AttachmentKind, TypeCode};
use serde::Serialize;

/// Attachments split by kind, in their original relative order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AttachmentBuckets<'a> {
    pub protective: Vec<&'a Attachment>,
    pub locations: Vec<&'a Attachment>,
    pub warnings: Vec<&'a Attachment>,
    /// Attachments whose type code is outside the known set.
    pub dropped: usize,
}

impl<'a> AttachmentBuckets<'a> {
    pub fn get(&self, kind: AttachmentKind) -> &[&'a Attachment] {
        match kind {
            AttachmentKind::ProtectiveEquipment => &self.protective,
            AttachmentKind::UsageLocation => &self.locations,
            AttachmentKind::WarningLabel => &self.warnings,
        }
    }

    pub fn classified_len(&self) -> usize {
        self.protective.len() + self.locations.len() + self.warnings.len()
    }
}

/// Attachments of one kind, preserving order.
pub fn attachments_of(attachments: &[Attachment], kind: AttachmentKind) -> Vec<&Attachment> {
    attachments
        .iter()
        .filter(|a| a.kind() == Some(kind))
        .collect()
}

/// Attachments whose type normalizes to the same code as `code`.
///
/// A target code outside the known set always yields an empty result, even if
/// some attachments carry that same unknown code.
pub fn attachments_with_code<'a>(attachments: &'a [Attachment], code: &TypeCode) -> Vec<&'a Attachment> {
    match code.kind() {
        Some(kind) => attachments_of(attachments, kind),
        None => Vec::new(),
    }
}

/// Split attachments into the three buckets in a single pass.
pub fn partition(attachments: &[Attachment]) -> AttachmentBuckets<'_> {
    let mut buckets = AttachmentBuckets::default();
    for attachment in attachments {
        match attachment.kind() {
            Some(AttachmentKind::ProtectiveEquipment) => buckets.protective.push(attachment),
            Some(AttachmentKind::UsageLocation) => buckets.locations.push(attachment),
            Some(AttachmentKind::WarningLabel) => buckets.warnings.push(attachment),
            None => {
                tracing::debug!(
                    aid = %attachment.aid,
                    type_code = %attachment.type_code,
                    "attachment type outside known set"
                );
                buckets.dropped += 1;
            }
        }
    }
    buckets
}

pub fn titles<'a>(bucket: &[&'a Attachment]) -> Vec<&'a str> {
    bucket.iter().map(|a| a.title.as_str()).collect()
}
