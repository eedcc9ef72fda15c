pub mod definitions;

use anyhow::{Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Text,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Text => write!(f, "text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "text" => Ok(Self::Text),
            _ => bail!("unknown output format: {s}, expected one of html, text"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtableConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub document: bool,

    #[serde(default = "RtableConfig::default_title")]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl Default for RtableConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            document: false,
            title: Self::default_title(),
            class_name: None,
        }
    }
}

impl RtableConfig {
    fn default_title() -> String {
        definitions::TOOL_DEFAULT_TITLE.to_owned()
    }

    pub fn path() -> Result<PathBuf> {
        let mut path = std::env::current_dir()?;
        path.push(definitions::TOOL_DIR);
        path.push(format!("{}.yaml", definitions::TOOL_DEFAULT_CONFIG));
        Ok(path)
    }

    /// Loads `.rtable/config.yaml` from the current directory, falling back to
    /// the defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.is_file() {
            debug!("no config file found at: {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("loading config file from: {}", path.display());
        let content = read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(content).map_err(|e| anyhow!(e))
    }

    pub fn debug_info(&self) {
        debug!("loaded configuration");
        debug!("format: {}", self.format);
        debug!("document: {}", self.document);
        debug!("title: {}", self.title);
        debug!("class_name: {:?}", self.class_name);
    }
}
