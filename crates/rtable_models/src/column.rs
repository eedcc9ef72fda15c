use crate::SortDirection;
use serde::{Deserialize, Serialize};

/// One header cell. `sorted` is `None` for an unsorted column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorted: Option<SortDirection>,
}

impl Column {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sorted: None,
        }
    }

    pub fn sorted(mut self, direction: SortDirection) -> Self {
        self.sorted = Some(direction);
        self
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted.is_some()
    }
}

impl From<&str> for Column {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}
