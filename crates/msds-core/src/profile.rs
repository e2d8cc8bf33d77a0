use crate::classify::attachments::{partition, titles};
use crate::classify::description::{describe, Domain};
use crate::classify::regulation::{regulations_for, RegulationSet};
use crate::config::Config;
use crate::links;
use crate::model::{Attachment, MsdsRecord};
use serde::Serialize;

/// Category shown when a record has no usage text.
pub const DEFAULT_CATEGORY: &str = "기타";
/// Placeholder for an empty attachment group.
pub const NO_INFO: &str = "정보 없음";

/// A warning label or piece of equipment ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct LabelView {
    pub aid: String,
    pub title: String,
    /// Tooltip text from the description table, or the title itself.
    pub description: String,
    /// Set only when the attachment has an image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PdfLinks {
    pub view_url: String,
    pub download_url: String,
}

/// Everything a card or detail view shows for one record.
#[derive(Debug, Clone, Serialize)]
pub struct MsdsProfile {
    pub mid: String,
    pub title: String,
    /// Usage text, or "기타" when there is none.
    pub category: String,
    pub has_pdf: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf: Option<PdfLinks>,
    pub warnings: Vec<LabelView>,
    pub equipment: Vec<LabelView>,
    pub locations: Vec<String>,
    /// Short form of `locations`, e.g. "실험실, 창고 +1개 더".
    pub location_summary: String,
    pub regulations: RegulationSet,
    /// QR code target.
    pub detail_url: String,
    /// Rendered QR code for `detail_url`.
    pub qr_image_url: String,
    /// Attachments skipped because their type code is unknown.
    pub dropped_attachments: usize,
}

fn label_view(config: &Config, mid: &str, attachment: &Attachment, domain: Domain) -> LabelView {
    LabelView {
        aid: attachment.aid.clone(),
        title: attachment.title.clone(),
        description: describe(&attachment.title, domain),
        image_url: attachment
            .has_image()
            .then(|| links::attachment_image_url(config, mid, &attachment.aid)),
    }
}

/// Summarize location titles: the first `preview` names, then "+N개 더".
pub fn summarize_locations(locations: &[&str], preview: usize) -> String {
    if locations.is_empty() {
        return NO_INFO.to_string();
    }
    let shown = locations.len().min(preview.max(1));
    let mut summary = locations[..shown].join(", ");
    if locations.len() > shown {
        summary.push_str(&format!(" +{}개 더", locations.len() - shown));
    }
    summary
}

/// Category label for a record: its usage, or "기타".
pub fn category(record: &MsdsRecord) -> String {
    record
        .usage_text()
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
}

/// Build the display profile of a record.
pub fn build_profile(record: &MsdsRecord, config: &Config) -> MsdsProfile {
    let buckets = partition(&record.attachments);
    let location_titles = titles(&buckets.locations);

    let has_pdf = record.has_pdf();
    let pdf = has_pdf.then(|| PdfLinks {
        view_url: links::pdf_view_url(config, &record.mid),
        download_url: links::pdf_download_url(config, &record.mid),
    });

    MsdsProfile {
        mid: record.mid.clone(),
        title: record.title.clone(),
        category: category(record),
        has_pdf,
        pdf,
        warnings: buckets
            .warnings
            .iter()
            .map(|a| label_view(config, &record.mid, a, Domain::Warning))
            .collect(),
        equipment: buckets
            .protective
            .iter()
            .map(|a| label_view(config, &record.mid, a, Domain::Equipment))
            .collect(),
        location_summary: summarize_locations(
            &location_titles,
            config.display.location_preview,
        ),
        locations: location_titles.iter().map(|t| t.to_string()).collect(),
        regulations: regulations_for(record),
        detail_url: links::detail_url(config, &record.mid),
        qr_image_url: links::qr_image_url(config, &record.mid),
        dropped_attachments: buckets.dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_summary_variants() {
        assert_eq!(summarize_locations(&[], 2), "정보 없음");
        assert_eq!(summarize_locations(&["실험실"], 2), "실험실");
        assert_eq!(summarize_locations(&["실험실", "창고"], 2), "실험실, 창고");
        assert_eq!(
            summarize_locations(&["실험실", "창고", "공정실", "옥외"], 2),
            "실험실, 창고 +2개 더"
        );
    }

    #[test]
    fn zero_preview_still_shows_one() {
        assert_eq!(summarize_locations(&["a", "b"], 0), "a +1개 더");
    }

    #[test]
    fn profile_of_record() {
        let record: MsdsRecord = serde_json::from_str(
            r#"{
                "mid": "M0007",
                "title": "수산화나트륨",
                "usage": "대기오염 방지시설",
                "is_osh": 1,
                "is_chr": 1,
                "file_loc": "pdfs/7.pdf",
                "attachments": [
                    { "aid": "1", "title": "금속부식성, 피부부식성, 심한 눈 손상성", "type": 2, "file_loc": "images/symbols/corrosive.png" },
                    { "aid": "2", "title": "안전장갑", "type": "0", "file_loc": "None" },
                    { "aid": "3", "title": "방지시설", "type": 1 },
                    { "aid": "4", "title": "???", "type": 3 }
                ]
            }"#,
        )
        .unwrap();

        let profile = build_profile(&record, &Config::default());
        assert_eq!(profile.category, "대기오염 방지시설");
        assert!(profile.has_pdf);
        assert_eq!(
            profile.pdf.as_ref().unwrap().view_url,
            "http://localhost:5001/api/msds/M0007/download"
        );
        assert_eq!(profile.warnings.len(), 1);
        assert_eq!(
            profile.warnings[0].description,
            "금속, 피부, 눈에 심각한 부식을 일으킬 수 있음"
        );
        assert_eq!(
            profile.warnings[0].image_url.as_deref(),
            Some("http://localhost:5001/api/msds/M0007/attachment/1")
        );
        assert_eq!(profile.equipment[0].description, "손을 보호하는 보호구");
        assert!(profile.equipment[0].image_url.is_none());
        assert_eq!(profile.locations, vec!["방지시설"]);
        assert_eq!(
            profile.regulations.names(),
            vec!["화학물질관리법", "산업안전보건법", "대기환경보전법"]
        );
        assert_eq!(profile.detail_url, "http://localhost:3000/msds/M0007");
        assert!(profile
            .qr_image_url
            .ends_with("&data=http%3A%2F%2Flocalhost%3A3000%2Fmsds%2FM0007"));
        assert_eq!(profile.dropped_attachments, 1);
    }

    #[test]
    fn bare_record_profile() {
        let record: MsdsRecord =
            serde_json::from_str(r#"{ "mid": "M1", "title": "물", "usage": "  " }"#).unwrap();
        let profile = build_profile(&record, &Config::default());
        assert_eq!(profile.category, "기타");
        assert!(!profile.has_pdf);
        assert!(profile.pdf.is_none());
        assert!(profile.warnings.is_empty());
        assert_eq!(profile.location_summary, "정보 없음");
        assert_eq!(profile.regulations.names(), vec!["화학물질관리법"]);
    }
}
