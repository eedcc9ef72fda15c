use crate::Column;
use anyhow::{Result, bail};
use rtable_config::definitions::{SORTED_ASC_CLASS, SORTED_DESC_CLASS};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Marker class distinguishing the two directions in rendered markup.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Asc => SORTED_ASC_CLASS,
            Self::Desc => SORTED_DESC_CLASS,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            _ => bail!("unknown sort direction: {s}, expected ASC or DESC"),
        }
    }
}

/// Returns the columns as they look after the header at `index` was
/// activated: that column cycles `unsorted -> ASC -> DESC -> ASC` and every
/// other column is left unsorted. An out of range index clears every column.
pub fn sort_columns(columns: &[Column], index: usize) -> Vec<Column> {
    columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let sorted = if i == index {
                Some(column.sorted.map_or(SortDirection::Asc, SortDirection::toggle))
            } else {
                None
            };
            Column {
                title: column.title.clone(),
                sorted,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_serializes_to_upper_case_names() {
        assert_eq!(serde_json::to_string(&SortDirection::Asc).unwrap(), "\"ASC\"");
        assert_eq!(serde_json::to_string(&SortDirection::Desc).unwrap(), "\"DESC\"");
        let parsed: SortDirection = serde_json::from_str("\"DESC\"").unwrap();
        assert_eq!(parsed, SortDirection::Desc);
    }

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!("Desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!("up".parse::<SortDirection>().is_err());
    }

    #[test]
    fn direction_classes_are_distinct() {
        assert_eq!(SortDirection::Asc.class(), "sorted-asc");
        assert_eq!(SortDirection::Desc.class(), "sorted-desc");
        assert_eq!(SortDirection::Asc.toggle(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggle(), SortDirection::Asc);
    }

    #[test]
    fn sorting_an_unsorted_column_starts_ascending_and_clears_others() {
        let columns = vec![
            Column::new("Name").sorted(SortDirection::Desc),
            Column::new("Age"),
        ];
        let sorted = sort_columns(&columns, 1);

        assert_eq!(sorted[0].sorted, None);
        assert_eq!(sorted[1].sorted, Some(SortDirection::Asc));
    }

    #[test]
    fn sorting_the_sorted_column_toggles_its_direction() {
        let columns = vec![Column::new("Name").sorted(SortDirection::Asc)];
        let once = sort_columns(&columns, 0);
        assert_eq!(once[0].sorted, Some(SortDirection::Desc));

        let twice = sort_columns(&once, 0);
        assert_eq!(twice[0].sorted, Some(SortDirection::Asc));
    }

    #[test]
    fn sorting_with_an_out_of_range_index_clears_everything() {
        let columns = vec![Column::new("Name").sorted(SortDirection::Asc)];
        let sorted = sort_columns(&columns, 3);
        assert_eq!(sorted, vec![Column::new("Name")]);
    }

    #[test]
    fn sorting_one_of_two_columns_with_the_same_title_leaves_the_other_unsorted() {
        let columns = vec![Column::new("Name"), Column::new("Name"), Column::new("Age")];
        let sorted = sort_columns(&columns, 1);

        assert_eq!(sorted[0].sorted, None);
        assert_eq!(sorted[1].sorted, Some(SortDirection::Asc));
        assert_eq!(sorted[2].sorted, None);
    }
}
