use crate::classify::attachments::{attachments_of, partition};
use crate::classify::description::{describe, Domain};
use crate::classify::hazard::WarningCategory;
use crate::classify::regulation::regulations_for;
use crate::model::{AttachmentKind, MsdsRecord};
use serde::Serialize;
use std::collections::HashSet;

pub const DEFAULT_PER_PAGE: usize = 12;
pub const MAX_PER_PAGE: usize = 100;

/// Records whose title, usage or mid contains `keyword` (case-insensitive),
/// sorted by mid. A blank keyword matches everything.
pub fn search<'a>(records: &'a [MsdsRecord], keyword: &str) -> Vec<&'a MsdsRecord> {
    let needle = keyword.trim().to_lowercase();
    let mut hits: Vec<&MsdsRecord> = records
        .iter()
        .filter(|r| {
            needle.is_empty()
                || r.title.to_lowercase().contains(&needle)
                || r.mid.to_lowercase().contains(&needle)
                || r
                    .usage
                    .as_deref()
                    .map(|u| u.to_lowercase().contains(&needle))
                    .unwrap_or(false)
        })
        .collect();
    hits.sort_by(|a, b| a.mid.cmp(&b.mid));
    hits
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub per_page: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// Clamp to `page >= 1` and `1 <= per_page <= 100`.
    pub fn normalized(self) -> PageRequest {
        PageRequest {
            page: self.page.max(1),
            per_page: self.per_page.clamp(1, MAX_PER_PAGE),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
    pub items: Vec<T>,
}

pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let request = request.normalized();
    let total = items.len();
    let total_pages = total.div_ceil(request.per_page);
    let start = (request.page - 1).saturating_mul(request.per_page);
    let page_items = items
        .iter()
        .skip(start)
        .take(request.per_page)
        .cloned()
        .collect();

    Page {
        page: request.page,
        per_page: request.per_page,
        total,
        total_pages,
        items: page_items,
    }
}

/// Attachment counts shown in the admin list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttachmentCounts {
    pub warnings: usize,
    pub protective: usize,
    pub locations: usize,
    pub total: usize,
}

impl AttachmentCounts {
    pub fn of(record: &MsdsRecord) -> Self {
        let buckets = partition(&record.attachments);
        AttachmentCounts {
            warnings: buckets.warnings.len(),
            protective: buckets.protective.len(),
            locations: buckets.locations.len(),
            total: record.attachments.len(),
        }
    }
}

/// One line of the catalog table.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogRow {
    pub mid: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    pub is_osh: bool,
    pub is_chr: bool,
    pub has_pdf: bool,
    pub counts: AttachmentCounts,
    pub regulations: String,
}

impl CatalogRow {
    pub fn of(record: &MsdsRecord) -> Self {
        CatalogRow {
            mid: record.mid.clone(),
            title: record.title.clone(),
            usage: record.usage_text().map(str::to_string),
            is_osh: record.is_osh.is_set(),
            is_chr: record.is_chr.is_set(),
            has_pdf: record.has_pdf(),
            counts: AttachmentCounts::of(record),
            regulations: regulations_for(record).joined(", "),
        }
    }
}

/// Search, then paginate, then summarize each record on the page.
pub fn list_page(records: &[MsdsRecord], keyword: &str, request: PageRequest) -> Page<CatalogRow> {
    let hits = search(records, keyword);
    let page = paginate(&hits, request);
    Page {
        page: page.page,
        per_page: page.per_page,
        total: page.total,
        total_pages: page.total_pages,
        items: page.items.into_iter().map(CatalogRow::of).collect(),
    }
}

/// A distinct attachment title across the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogLabel {
    pub title: String,
    pub aid: String,
    /// Record the first occurrence was found on.
    pub mid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_loc: Option<String>,
    pub has_image: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<WarningCategory>,
}

/// Collect every distinct attachment title of `kind`, first occurrence wins.
pub fn collect_labels(records: &[MsdsRecord], kind: AttachmentKind) -> Vec<CatalogLabel> {
    let domain = match kind {
        AttachmentKind::ProtectiveEquipment => Some(Domain::Equipment),
        AttachmentKind::WarningLabel => Some(Domain::Warning),
        AttachmentKind::UsageLocation => None,
    };

    let mut seen = HashSet::new();
    let mut labels = Vec::new();
    for record in records {
        for attachment in attachments_of(&record.attachments, kind) {
            if !seen.insert(attachment.title.clone()) {
                continue;
            }
            labels.push(CatalogLabel {
                title: attachment.title.clone(),
                aid: attachment.aid.clone(),
                mid: record.mid.clone(),
                file_loc: attachment.file_loc.clone(),
                has_image: attachment.has_image(),
                description: domain.map(|d| describe(&attachment.title, d)),
                category: (kind == AttachmentKind::WarningLabel)
                    .then(|| WarningCategory::estimate(&attachment.title)),
            });
        }
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::parse_records;

    fn records() -> Vec<MsdsRecord> {
        parse_records(
            r#"[
                { "mid": "M0003", "title": "톨루엔", "usage": "도장 공정", "is_osh": "1",
                  "attachments": [
                    { "aid": "1", "title": "인화성, 물반응성, 자기반응성, 자연발화성, 가지발열성, 유기과산화물", "type": 2, "file_loc": "images/symbols/a.png" },
                    { "aid": "2", "title": "방독마스크", "type": 0 }
                  ] },
                { "mid": "M0001", "title": "염산", "usage": "폐기물 처리", "is_chr": 1,
                  "attachments": [
                    { "aid": "3", "title": "급성독성", "type": "2" },
                    { "aid": "4", "title": "보안경", "type": "0", "file_loc": "None" },
                    { "aid": "5", "title": "실험실", "type": "1" }
                  ] },
                { "mid": "M0002", "title": "Acetone", "usage": null,
                  "attachments": [
                    { "aid": "6", "title": "급성독성", "type": 2 }
                  ] }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn search_matches_title_usage_and_mid() {
        fn mids(hits: Vec<&MsdsRecord>) -> Vec<String> {
            hits.iter().map(|r| r.mid.clone()).collect()
        }
        let all = records();
        assert_eq!(mids(search(&all, "")), vec!["M0001", "M0002", "M0003"]);
        assert_eq!(mids(search(&all, "염산")), vec!["M0001"]);
        assert_eq!(mids(search(&all, "공정")), vec!["M0003"]);
        assert_eq!(mids(search(&all, "acetone")), vec!["M0002"]);
        assert_eq!(mids(search(&all, "m0003")), vec!["M0003"]);
        assert!(search(&all, "없는물질").is_empty());
    }

    #[test]
    fn pagination_clamps_inputs() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, PageRequest { page: 0, per_page: 0 });
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 1);
        assert_eq!(page.total_pages, 25);
        assert_eq!(page.items, vec![1]);

        let page = paginate(&items, PageRequest { page: 3, per_page: 10 });
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.total_pages, 3);

        let page = paginate(&items, PageRequest { page: 9, per_page: 500 });
        assert_eq!(page.per_page, 100);
        assert!(page.items.is_empty());

        let empty: Vec<u32> = Vec::new();
        assert_eq!(paginate(&empty, PageRequest::default()).total_pages, 0);
    }

    #[test]
    fn list_page_rows() {
        let all = records();
        let page = list_page(&all, "", PageRequest { page: 1, per_page: 2 });
        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 2);

        let first = &page.items[0];
        assert_eq!(first.mid, "M0001");
        assert!(first.is_chr);
        assert!(!first.is_osh);
        assert_eq!(
            first.counts,
            AttachmentCounts { warnings: 1, protective: 1, locations: 1, total: 3 }
        );
        assert_eq!(first.regulations, "화학물질관리법, 폐기물관리법");
    }

    #[test]
    fn labels_are_unique_by_title() {
        let all = records();
        let warnings = collect_labels(&all, AttachmentKind::WarningLabel);
        let titles: Vec<&str> = warnings.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "인화성, 물반응성, 자기반응성, 자연발화성, 가지발열성, 유기과산화물",
                "급성독성"
            ]
        );
        assert_eq!(warnings[1].mid, "M0001");
        assert_eq!(warnings[1].category, Some(WarningCategory::Health));
        assert_eq!(warnings[0].category, Some(WarningCategory::Physical));
        assert!(warnings[0].has_image);

        let equipment = collect_labels(&all, AttachmentKind::ProtectiveEquipment);
        assert_eq!(equipment.len(), 2);
        assert_eq!(
            equipment[1].description.as_deref(),
            Some("눈을 보호하는 안전보호구")
        );
        assert!(!equipment[1].has_image);
        assert!(equipment[1].category.is_none());

        let locations = collect_labels(&all, AttachmentKind::UsageLocation);
        assert_eq!(locations.len(), 1);
        assert!(locations[0].description.is_none());
    }
}
