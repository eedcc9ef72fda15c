use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{self, Display};

/// The content of a single cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellData {
    #[serde(default)]
    pub content: Value,
}

impl CellData {
    pub fn new(content: impl Into<Value>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Display for CellData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.content {
            Value::Null => Ok(()),
            Value::String(s) => f.write_str(s),
            v => write!(f, "{v}"),
        }
    }
}

impl From<Value> for CellData {
    fn from(content: Value) -> Self {
        Self { content }
    }
}

impl From<&str> for CellData {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for CellData {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

impl From<i64> for CellData {
    fn from(content: i64) -> Self {
        Self::new(content)
    }
}

impl From<f64> for CellData {
    fn from(content: f64) -> Self {
        Self::new(content)
    }
}

impl From<bool> for CellData {
    fn from(content: bool) -> Self {
        Self::new(content)
    }
}

/// One data row. The shape is up to the caller and is never validated; fields
/// keep the order in which they were inserted or parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn cells(&self) -> Vec<CellData> {
        self.0.values().cloned().map(CellData::from).collect()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
