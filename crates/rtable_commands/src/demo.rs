use crate::{command::RtableCommand, output};
use anyhow::Result;
use clap::Args;
use rtable_config::{OutputFormat, RtableConfig};
use rtable_ui::sample_table;
use tracing::debug;

#[derive(Args)]
#[command(about = "Renders the sample table")]
pub struct DemoCommand {
    #[arg(short = 'f', long = "format", help = "The output format, html or text")]
    format: Option<OutputFormat>,

    #[arg(
        short = 'd',
        long = "document",
        help = "Wrap the html table in a complete document"
    )]
    document: bool,
}

impl RtableCommand for DemoCommand {
    fn exec(self) -> Result<()> {
        let config = RtableConfig::load()?;
        let format = self.format.unwrap_or(config.format);
        debug!("running demo subcommand with --format {format}");
        let content = output::render(
            &sample_table(),
            format,
            self.document || config.document,
            &config.title,
        );
        output::emit(&content, None)
    }
}
