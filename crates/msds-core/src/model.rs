use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// The closed set of attachment categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    ProtectiveEquipment,
    UsageLocation,
    WarningLabel,
}

impl AttachmentKind {
    pub const ALL: [AttachmentKind; 3] = [
        AttachmentKind::ProtectiveEquipment,
        AttachmentKind::UsageLocation,
        AttachmentKind::WarningLabel,
    ];

    /// Wire code used by the backend (`0`, `1`, `2`).
    pub fn code(self) -> i64 {
        match self {
            AttachmentKind::ProtectiveEquipment => 0,
            AttachmentKind::UsageLocation => 1,
            AttachmentKind::WarningLabel => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<AttachmentKind> {
        match code {
            0 => Some(AttachmentKind::ProtectiveEquipment),
            1 => Some(AttachmentKind::UsageLocation),
            2 => Some(AttachmentKind::WarningLabel),
            _ => None,
        }
    }

    /// Accepts a wire code or a short English name ("equipment", "location", "warning").
    pub fn from_str_loose(s: &str) -> Option<AttachmentKind> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "0" | "equipment" | "protective" | "protective_equipment" => {
                Some(AttachmentKind::ProtectiveEquipment)
            }
            "1" | "location" | "usage_location" => Some(AttachmentKind::UsageLocation),
            "2" | "warning" | "warning_label" => Some(AttachmentKind::WarningLabel),
            _ => None,
        }
    }
}

impl fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachmentKind::ProtectiveEquipment => write!(f, "보호 장구"),
            AttachmentKind::UsageLocation => write!(f, "사용 장소"),
            AttachmentKind::WarningLabel => write!(f, "경고 표지"),
        }
    }
}

/// Attachment type code as it arrived on the wire.
///
/// Some endpoints serialize the code as a number, others as a string, so the
/// raw form is kept and normalized on comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeCode {
    Int(i64),
    Text(String),
    Other(Value),
}

impl Default for TypeCode {
    fn default() -> Self {
        TypeCode::Other(Value::Null)
    }
}

impl TypeCode {
    /// Integer value of the code, if it has one.
    pub fn normalized(&self) -> Option<i64> {
        match self {
            TypeCode::Int(n) => Some(*n),
            TypeCode::Text(s) => {
                let s = s.trim();
                s.parse().ok().or_else(|| s.parse::<f64>().ok().and_then(integral))
            }
            TypeCode::Other(Value::Number(n)) => n.as_f64().and_then(integral),
            TypeCode::Other(_) => None,
        }
    }

    pub fn kind(&self) -> Option<AttachmentKind> {
        self.normalized().and_then(AttachmentKind::from_code)
    }

    /// True when both codes normalize to the same integer.
    pub fn matches(&self, other: &TypeCode) -> bool {
        match (self.normalized(), other.normalized()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

fn integral(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0).then_some(f as i64)
}

impl From<AttachmentKind> for TypeCode {
    fn from(kind: AttachmentKind) -> Self {
        TypeCode::Int(kind.code())
    }
}

impl From<i64> for TypeCode {
    fn from(code: i64) -> Self {
        TypeCode::Int(code)
    }
}

impl From<&str> for TypeCode {
    fn from(code: &str) -> Self {
        TypeCode::Text(code.to_string())
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeCode::Int(n) => write!(f, "{n}"),
            TypeCode::Text(s) => write!(f, "{s}"),
            TypeCode::Other(v) => write!(f, "{v}"),
        }
    }
}

/// Boolean-like compliance flag (`"0"`/`"1"`, `0`/`1`, or a JSON boolean).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Int(i64),
    Text(String),
    Other(Value),
}

impl Default for Flag {
    fn default() -> Self {
        Flag::Int(0)
    }
}

impl Flag {
    /// Only the exact string `"1"` and the integer `1` are set. Booleans,
    /// padded strings and every other value are unset.
    pub fn is_set(&self) -> bool {
        match self {
            Flag::Int(n) => *n == 1,
            Flag::Text(s) => s == "1",
            Flag::Bool(_) | Flag::Other(_) => false,
        }
    }
}

impl From<bool> for Flag {
    fn from(b: bool) -> Self {
        Flag::Bool(b)
    }
}

impl From<i64> for Flag {
    fn from(n: i64) -> Self {
        Flag::Int(n)
    }
}

impl From<&str> for Flag {
    fn from(s: &str) -> Self {
        Flag::Text(s.to_string())
    }
}

/// A file attached to an MSDS record: a pictogram, an equipment icon or a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(deserialize_with = "de_id")]
    pub aid: String,
    #[serde(default, deserialize_with = "de_text")]
    pub title: String,
    #[serde(rename = "type", default)]
    pub type_code: TypeCode,
    #[serde(default)]
    pub file_loc: Option<String>,
}

impl Attachment {
    pub fn kind(&self) -> Option<AttachmentKind> {
        self.type_code.kind()
    }

    /// False when `file_loc` is absent, blank, or the `"None"` sentinel.
    pub fn has_image(&self) -> bool {
        match self.file_loc.as_deref().map(str::trim) {
            Some(loc) => !loc.is_empty() && loc != "None",
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MsdsRecord {
    #[serde(deserialize_with = "de_id")]
    pub mid: String,
    #[serde(default, deserialize_with = "de_text")]
    pub title: String,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub usage: Option<String>,
    #[serde(default)]
    pub is_osh: Flag,
    #[serde(default)]
    pub is_chr: Flag,
    /// Storage path of the primary PDF.
    #[serde(default)]
    pub file_loc: Option<String>,
    #[serde(default, deserialize_with = "lenient_attachments")]
    pub attachments: Vec<Attachment>,
}

impl MsdsRecord {
    /// Usage text, or `None` when missing or blank.
    pub fn usage_text(&self) -> Option<&str> {
        self.usage.as_deref().filter(|u| !u.trim().is_empty())
    }

    pub fn has_pdf(&self) -> bool {
        self.file_loc
            .as_deref()
            .map(|loc| !loc.trim().is_empty())
            .unwrap_or(false)
    }
}

fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

fn de_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Null becomes `None`. Non-string values are ignored rather than failing the record.
fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Null => None,
        other => {
            tracing::warn!(value = %other, "text field is not a string, treating as absent");
            None
        }
    })
}

/// Missing, null or non-array attachment fields become an empty list.
fn lenient_attachments<'de, D>(deserializer: D) -> Result<Vec<Attachment>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            tracing::warn!(value = %other, "attachments field is not a list, treating as empty");
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, item)| match serde_json::from_value::<Attachment>(item) {
                Ok(attachment) => Some(attachment),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping malformed attachment");
                    None
                }
            },
        )
        .collect())
}
