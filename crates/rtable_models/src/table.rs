use crate::{ClassName, Column, Record};
use anyhow::{Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::Path;
use tracing::debug;

/// Everything needed to render a table. All fields are optional on input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    #[serde(default)]
    pub columns: Vec<Column>,

    #[serde(default)]
    pub data: Vec<Record>,

    #[serde(default, alias = "class_name")]
    pub class_name: ClassName,
}

impl TableConfig {
    pub fn load(path: &Path) -> Result<Self> {
        debug!("loading table definition from: {}", path.display());
        let content = read_to_string(path)
            .map_err(|e| anyhow!("unable to read {}: {e}", path.display()))?;
        let is_json = path
            .extension()
            .and_then(|x| x.to_str())
            .is_some_and(|x| x.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };
        debug!(
            "loaded table with {} columns and {} records",
            config.columns.len(),
            config.data.len()
        );
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).map_err(|e| anyhow!(e))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| anyhow!(e))
    }

    /// Indices of the records whose field count differs from the column count.
    pub fn mismatched_rows(&self) -> Vec<usize> {
        mismatched_rows(&self.columns, &self.data)
    }

    pub fn ensure_consistent(&self) -> Result<()> {
        let rows = self.mismatched_rows();
        if !rows.is_empty() {
            let rows = rows
                .iter()
                .map(|x| x.to_string())
                .reduce(|acc, n| acc + ", " + &n)
                .unwrap_or_default();
            bail!(
                "records [{rows}] do not have {} fields, one per column",
                self.columns.len()
            );
        }
        Ok(())
    }
}

/// A table without columns has no width to check against, so it never reports
/// a mismatch.
pub fn mismatched_rows(columns: &[Column], data: &[Record]) -> Vec<usize> {
    if columns.is_empty() {
        return Vec::new();
    }
    data.iter()
        .enumerate()
        .filter(|(_, record)| record.len() != columns.len())
        .map(|(i, _)| i)
        .collect()
}
