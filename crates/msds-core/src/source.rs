use crate::error::MsdsError;
use crate::model::MsdsRecord;
use serde_json::Value;
use std::path::Path;

/// Trait for anything that can hand out MSDS record snapshots.
pub trait RecordSource: Send + Sync {
    /// All records, in source order.
    fn records(&self) -> Result<Vec<MsdsRecord>, MsdsError>;

    /// A single record by `mid`.
    fn record(&self, mid: &str) -> Result<MsdsRecord, MsdsError> {
        self.records()?
            .into_iter()
            .find(|r| r.mid == mid)
            .ok_or_else(|| MsdsError::RecordNotFound { mid: mid.to_string() })
    }

    /// Name of this source (for diagnostics).
    fn source_name(&self) -> &str;
}

/// Records saved from the REST API as JSON.
///
/// Accepts a bare array of records, a list/search response with an `items`
/// array, an update response with a `data` object, or a single detail object.
#[derive(Debug, Clone)]
pub struct JsonDumpSource {
    name: String,
    records: Vec<MsdsRecord>,
}

impl JsonDumpSource {
    pub fn open(path: &Path) -> Result<Self, MsdsError> {
        let content = std::fs::read_to_string(path).map_err(|e| MsdsError::RecordsLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let records = parse_records(&content).map_err(|e| MsdsError::RecordsLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        tracing::info!(path = %path.display(), count = records.len(), "loaded MSDS records");
        Ok(JsonDumpSource {
            name: path.display().to_string(),
            records,
        })
    }

    pub fn from_records(records: Vec<MsdsRecord>) -> Self {
        JsonDumpSource {
            name: "memory".into(),
            records,
        }
    }
}

impl RecordSource for JsonDumpSource {
    fn records(&self) -> Result<Vec<MsdsRecord>, MsdsError> {
        Ok(self.records.clone())
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

/// Parse records out of any of the JSON shapes the backend returns.
pub fn parse_records(json: &str) -> Result<Vec<MsdsRecord>, MsdsError> {
    let value: Value = serde_json::from_str(json)?;
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            if let Some(Value::Array(items)) = map.remove("items") {
                items
            } else if let Some(data @ Value::Object(_)) = map.remove("data") {
                vec![data]
            } else if map.contains_key("mid") {
                vec![Value::Object(map)]
            } else {
                return Err(MsdsError::UnsupportedDocument(
                    "expected an array, an object with 'items', or a record with 'mid'".into(),
                ));
            }
        }
        other => {
            return Err(MsdsError::UnsupportedDocument(format!(
                "expected an array or object, got {}",
                json_kind(&other)
            )))
        }
    };

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, item)| match serde_json::from_value::<MsdsRecord>(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping malformed MSDS record");
                    None
                }
            },
        )
        .collect())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
