pub const VERSION: &str = "0.1.0";
pub const TOOL_DIR: &str = ".rtable";
pub const TOOL_DEFAULT_CONFIG: &str = "config";
pub const TOOL_DEFAULT_TITLE: &str = "rtable";

pub const DEFAULT_TABLE_CLASS: &str = "table";
pub const HEAD_SUFFIX: &str = "__head";
pub const HEADER_SUFFIX: &str = "__header";
pub const BODY_SUFFIX: &str = "__body";
pub const ROW_SUFFIX: &str = "__row";
pub const CELL_SUFFIX: &str = "__cell";

pub const SORTER_CLASS: &str = "sorter";
pub const SORTED_ASC_CLASS: &str = "sorted-asc";
pub const SORTED_DESC_CLASS: &str = "sorted-desc";
