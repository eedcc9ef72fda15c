use rtable_models::{Column, TableConfig};
use tabled::{builder::Builder, settings::Style};

fn header(column: &Column) -> String {
    match column.sorted {
        Some(direction) => format!("{} {}", column.title, direction.arrow()),
        None => column.title.clone(),
    }
}

/// Renders the table for a terminal. Sorted columns carry an arrow next to
/// their title.
pub fn text_table(config: &TableConfig) -> String {
    let mut builder = Builder::default();

    if !config.columns.is_empty() {
        builder.push_record(config.columns.iter().map(header));
    }

    for record in &config.data {
        builder.push_record(record.cells().iter().map(|c| c.to_string()));
    }

    builder.build().with(Style::modern()).to_string()
}
