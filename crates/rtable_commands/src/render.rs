use crate::{command::RtableCommand, output};
use anyhow::Result;
use clap::Args;
use rtable_config::{OutputFormat, RtableConfig};
use rtable_models::{ClassName, TableConfig};
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Args)]
#[command(about = "Renders a yaml or json table definition as html or as a text table")]
pub struct RenderCommand {
    #[arg(help = "The path to the table definition file")]
    file: PathBuf,

    #[arg(short = 'f', long = "format", help = "The output format, html or text")]
    format: Option<OutputFormat>,

    #[arg(
        short = 'c',
        long = "class-name",
        help = "The base class name of the rendered table"
    )]
    class_name: Option<String>,

    #[arg(short = 'o', long = "output", help = "Write the output to a file")]
    output: Option<PathBuf>,

    #[arg(
        short = 'd',
        long = "document",
        help = "Wrap the html table in a complete document"
    )]
    document: bool,

    #[arg(
        long = "strict",
        help = "Fail when a record does not have one field per column"
    )]
    strict: bool,
}

impl RenderCommand {
    fn table(&self, config: &RtableConfig) -> Result<TableConfig> {
        let mut table = TableConfig::load(&self.file)?;

        if let Some(class_name) = self.class_name.as_ref().or(config.class_name.as_ref()) {
            debug!("overriding table class name with {class_name}");
            table.class_name = ClassName::new(class_name.as_str());
        }

        if self.strict {
            table.ensure_consistent()?;
        } else {
            let mismatched = table.mismatched_rows();
            if !mismatched.is_empty() {
                warn!("records {mismatched:?} do not have one field per column");
            }
        }

        Ok(table)
    }
}

impl RtableCommand for RenderCommand {
    fn exec(self) -> Result<()> {
        let config = RtableConfig::load()?;
        config.debug_info();

        let table = self.table(&config)?;
        let format = self.format.unwrap_or(config.format);
        let document = self.document || config.document;
        let content = output::render(&table, format, document, &config.title);
        output::emit(&content, self.output.as_deref())
    }
}
