use crate::text::text_table;
use anyhow::Result;
use rtable_config::OutputFormat;
use rtable_models::TableConfig;
use rtable_ui::{render_document, render_table};
use std::fs::write;
use std::path::Path;
use tracing::{debug, info};

pub fn render(config: &TableConfig, format: OutputFormat, document: bool, title: &str) -> String {
    debug!("rendering table as {format}, document: {document}");
    match format {
        OutputFormat::Html if document => render_document(config, title),
        OutputFormat::Html => render_table(config),
        OutputFormat::Text => text_table(config),
    }
}

pub fn emit(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            write(path, content)?;
            info!("table written to {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtable_ui::sample_table;

    #[test]
    fn html_output_is_a_table_fragment_unless_document_is_requested() {
        let config = sample_table();
        let fragment = render(&config, OutputFormat::Html, false, "rtable");
        assert!(fragment.contains("<table"));
        assert!(!fragment.contains("<!DOCTYPE html>"));

        let document = render(&config, OutputFormat::Html, true, "rtable");
        assert!(document.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn text_output_ignores_document_flag() {
        let text = render(&sample_table(), OutputFormat::Text, true, "rtable");
        assert!(text.contains("First column"));
        assert!(!text.contains("<"));
    }
}
