use crate::model::{Flag, MsdsRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker in the usage text that brings in the air quality act.
pub const AIR_MARKER: &str = "대기";
/// Marker in the usage text that brings in the waste management act.
pub const WASTE_MARKER: &str = "폐기물";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regulation {
    /// 화학물질관리법, applies to every record.
    ChemicalsControl,
    /// 산업안전보건법
    OccupationalSafety,
    /// 대기환경보전법
    AirQuality,
    /// 폐기물관리법
    WasteManagement,
}

impl Regulation {
    pub fn name(self) -> &'static str {
        match self {
            Regulation::ChemicalsControl => "화학물질관리법",
            Regulation::OccupationalSafety => "산업안전보건법",
            Regulation::AirQuality => "대기환경보전법",
            Regulation::WasteManagement => "폐기물관리법",
        }
    }
}

impl fmt::Display for Regulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered, duplicate-free list of regulations. The baseline is always first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "Vec<String>")]
pub struct RegulationSet {
    items: Vec<Regulation>,
}

impl RegulationSet {
    fn baseline() -> Self {
        RegulationSet {
            items: vec![Regulation::ChemicalsControl],
        }
    }

    fn push(&mut self, regulation: Regulation) {
        if !self.items.contains(&regulation) {
            self.items.push(regulation);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Regulation> + '_ {
        self.items.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; the baseline is never removed.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, regulation: Regulation) -> bool {
        self.items.contains(&regulation)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.items.iter().map(|r| r.name()).collect()
    }

    pub fn joined(&self, sep: &str) -> String {
        self.names().join(sep)
    }
}

impl From<RegulationSet> for Vec<String> {
    fn from(set: RegulationSet) -> Self {
        set.items.iter().map(|r| r.name().to_string()).collect()
    }
}

/// Derive the regulations that apply to a record.
///
/// `is_chr` never adds an entry of its own: the baseline already stands for
/// the chemicals control act that the flag refers to.
pub fn derive_regulations(is_osh: &Flag, _is_chr: &Flag, usage: Option<&str>) -> RegulationSet {
    let mut set = RegulationSet::baseline();

    if is_osh.is_set() {
        set.push(Regulation::OccupationalSafety);
    }

    if let Some(usage) = usage {
        if usage.contains(AIR_MARKER) {
            set.push(Regulation::AirQuality);
        }
        if usage.contains(WASTE_MARKER) {
            set.push(Regulation::WasteManagement);
        }
    }

    set
}

pub fn regulations_for(record: &MsdsRecord) -> RegulationSet {
    derive_regulations(&record.is_osh, &record.is_chr, record.usage.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osh_without_markers() {
        let set = derive_regulations(&Flag::from("1"), &Flag::from("0"), Some("폐수처리"));
        assert_eq!(set.names(), vec!["화학물질관리법", "산업안전보건법"]);
    }

    #[test]
    fn waste_marker_only() {
        let set = derive_regulations(&Flag::from(0), &Flag::from(0), Some("폐기물 운반용"));
        assert_eq!(set.names(), vec!["화학물질관리법", "폐기물관리법"]);
    }

    #[test]
    fn all_conditions_in_fixed_order() {
        let set = derive_regulations(&Flag::from(1), &Flag::from(1), Some("대기 배출 폐기물 처리"));
        assert_eq!(
            set.names(),
            vec!["화학물질관리법", "산업안전보건법", "대기환경보전법", "폐기물관리법"]
        );
        assert_eq!(
            set.joined(", "),
            "화학물질관리법, 산업안전보건법, 대기환경보전법, 폐기물관리법"
        );
    }

    #[test]
    fn boolean_and_padded_osh_flags_are_unset() {
        for osh in [Flag::from(true), Flag::from(" 1 "), Flag::from("01"), Flag::from(2)] {
            let set = derive_regulations(&osh, &Flag::from(0), Some("x"));
            assert_eq!(set.names(), vec!["화학물질관리법"]);
        }
    }

    #[test]
    fn chr_flag_adds_nothing() {
        let with_chr = derive_regulations(&Flag::from("0"), &Flag::from("1"), None);
        let without = derive_regulations(&Flag::from("0"), &Flag::from("0"), None);
        assert_eq!(with_chr, without);
        assert_eq!(with_chr.names(), vec!["화학물질관리법"]);
    }

    #[test]
    fn baseline_first_and_idempotent() {
        let flags = [Flag::from("1"), Flag::from(0), Flag::from(true), Flag::from(" 1 "), Flag::from("x")];
        let usages = [None, Some(""), Some("대기"), Some("폐기물대기")];
        for osh in &flags {
            for usage in usages {
                let a = derive_regulations(osh, &Flag::default(), usage);
                let b = derive_regulations(osh, &Flag::default(), usage);
                assert!(!a.is_empty());
                assert_eq!(a.iter().next(), Some(Regulation::ChemicalsControl));
                assert_eq!(a, b);
                let mut names = a.names();
                names.sort();
                names.dedup();
                assert_eq!(names.len(), a.len());
            }
        }
    }

    #[test]
    fn serializes_as_names() {
        let set = derive_regulations(&Flag::from(1), &Flag::default(), None);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["화학물질관리법","산업안전보건법"]"#);
    }
}
