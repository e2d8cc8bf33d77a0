use crate::error::MsdsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which description table a title is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Equipment,
    Warning,
}

impl Domain {
    pub fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Domain::Equipment => EQUIPMENT_DESCRIPTIONS,
            Domain::Warning => WARNING_DESCRIPTIONS,
        }
    }
}

impl FromStr for Domain {
    type Err = MsdsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "equipment" => Ok(Domain::Equipment),
            "warning" => Ok(Domain::Warning),
            other => Err(MsdsError::InvalidArgument(format!(
                "unknown description domain '{other}' (expected 'equipment' or 'warning')"
            ))),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Equipment => write!(f, "equipment"),
            Domain::Warning => write!(f, "warning"),
        }
    }
}

// Order matters: substring fallback takes the first key contained in the title.
const EQUIPMENT_DESCRIPTIONS: &[(&str, &str)] = &[
    ("방독마스크", "유해가스나 증기를 차단하는 호흡보호구"),
    ("방진마스크", "먼지나 분진을 차단하는 호흡보호구"),
    ("보안경", "눈을 보호하는 안전보호구"),
    ("보호복", "전신을 보호하는 보호복"),
    ("송기마스크", "외부에서 깨끗한 공기를 공급하는 호흡보호구"),
    ("안전장갑", "손을 보호하는 보호구"),
    ("용접용보안면", "용접 작업 시 얼굴을 보호하는 보호구"),
];

const WARNING_DESCRIPTIONS: &[(&str, &str)] = &[
    ("경고", "일반적인 주의사항"),
    ("고압가스", "압축된 가스로 압력에 의해 폭발할 수 있음"),
    ("급성독성", "단기간 노출 시 심각한 건강상 해를 줄 수 있음"),
    (
        "금속부식성, 피부부식성, 심한 눈 손상성",
        "금속, 피부, 눈에 심각한 부식을 일으킬 수 있음",
    ),
    ("산화성", "다른 물질과 반응하여 산화를 촉진할 수 있음"),
    ("수생환경유해성", "수생 생물과 환경에 유해한 영향을 줄 수 있음"),
    (
        "인화성, 물반응성, 자기반응성, 자연발화성, 가지발열성, 유기과산화물",
        "화재 위험이 높고 물과 반응하거나 자연발화할 수 있음",
    ),
    (
        "폭발성, 자기반응성, 유기과산화물",
        "폭발 위험이 높고 불안정한 물질",
    ),
    (
        "호흡기과민성, 발암성, 생식세포변이원성, 생식독성, 특정표적장기독성",
        "호흡기 알레르기, 암 유발, 유전자 변이, 생식 기능 저하 등을 일으킬 수 있음",
    ),
];

/// Look up the description for `title` without falling back to the title.
///
/// Exact match wins over substring containment; among substring matches the
/// first key in table order wins.
pub fn lookup(title: &str, domain: Domain) -> Option<&'static str> {
    let table = domain.table();
    table
        .iter()
        .find(|(key, _)| *key == title)
        .or_else(|| table.iter().find(|(key, _)| title.contains(key)))
        .map(|(_, desc)| *desc)
}

/// Human-readable description of an equipment or warning title.
///
/// Unknown titles are echoed back unchanged.
pub fn describe(title: &str, domain: Domain) -> String {
    lookup(title, domain)
        .map(str::to_string)
        .unwrap_or_else(|| title.to_string())
}

/// Like [`describe`], with the domain given as a tag such as `"warning"`.
pub fn describe_tagged(title: &str, tag: &str) -> Result<String, MsdsError> {
    let domain: Domain = tag.parse()?;
    Ok(describe(title, domain))
}
