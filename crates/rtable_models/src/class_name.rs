use rtable_config::definitions::DEFAULT_TABLE_CLASS;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Base class name shared by a table and everything rendered inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassName(String);

impl ClassName {
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }

    pub fn base(&self) -> &str {
        &self.0
    }

    pub fn suffixed(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.0)
    }
}

impl Default for ClassName {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_CLASS)
    }
}

impl Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassName {
    fn from(base: &str) -> Self {
        Self::new(base)
    }
}

impl From<String> for ClassName {
    fn from(base: String) -> Self {
        Self(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_is_table() {
        assert_eq!(ClassName::default().base(), "table");
        assert_eq!(ClassName::default().suffixed("__row"), "table__row");
    }

    #[test]
    fn suffix_is_appended_to_base() {
        assert_eq!(ClassName::from("my-table").suffixed("__cell"), "my-table__cell");
    }
}
