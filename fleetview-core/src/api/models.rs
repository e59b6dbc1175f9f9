use serde::Deserialize;
use serde_json::Value;
use time::OffsetDateTime;

const PLATE_FIELD: &str = "NR_PLACA";

/// One vehicle-acquisition row as returned by the API.
///
/// The row is kept opaque; only the plate is interpreted, as the row key.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Acquisition(Value);

impl Acquisition {
    pub fn new(value: Value) -> Self {
        Acquisition(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn plate(&self) -> Option<&str> {
        self.0.get(PLATE_FIELD).and_then(Value::as_str)
    }

    /// Stable key for rendering: the plate, or the row position when missing
    pub fn key(&self, index: usize) -> String {
        match self.plate() {
            Some(plate) => plate.to_string(),
            None => format!("#{}", index),
        }
    }

    /// Field names in payload order. Non-object rows have none.
    pub fn field_names(&self) -> Vec<&str> {
        match &self.0 {
            Value::Object(map) => map.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Display text of a single field; empty when absent or null
    pub fn field_text(&self, name: &str) -> String {
        match self.0.get(name) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Column headers for a page of rows, taken from the first row's field order
pub fn column_names(rows: &[Acquisition]) -> Vec<String> {
    rows.first()
        .map(|row| row.field_names().into_iter().map(str::to_string).collect())
        .unwrap_or_default()
}

/// The full collection from one successful fetch
#[derive(Debug, Clone)]
pub struct AcquisitionList {
    pub items: Vec<Acquisition>,
    pub fetched_at: OffsetDateTime,
}

impl AcquisitionList {
    pub fn new(items: Vec<Acquisition>) -> Self {
        Self {
            items,
            fetched_at: OffsetDateTime::now_utc(),
        }
    }
}
