mod class_name;
mod column;
mod record;
mod sort;
mod table;

pub use class_name::*;
pub use column::*;
pub use record::*;
pub use sort::*;
pub use table::*;
