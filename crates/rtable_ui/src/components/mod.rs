pub mod body;
pub mod head;
pub mod table;
