use crate::command::RtableCommand;
use crate::config::ConfigCommand;
use crate::demo::DemoCommand;
use crate::render::RenderCommand;
use anyhow::Result;
use clap::{Parser, Subcommand};
use rtable_config::definitions::VERSION;
use tracing_subscriber::filter::LevelFilter;

#[derive(Subcommand)]
enum Commands {
    Render(RenderCommand),
    Demo(DemoCommand),
    Config(ConfigCommand),
}

#[derive(Parser)]
#[command(name = "rtable", version = VERSION, about = "Renders tables with sortable headers")]
#[command(propagate_version = true)]
pub struct Cli {
    #[arg(short = 'v', long = "verbose", help = "Sets the level of verbosity")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn tracing_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        }
    }

    fn tracing(&self) {
        tracing_subscriber::fmt()
            .with_max_level(self.tracing_level())
            .with_writer(std::io::stderr)
            .init()
    }
}

impl RtableCommand for Cli {
    fn exec(self) -> Result<()> {
        self.tracing();

        match self.command {
            Commands::Render(render) => render.exec(),
            Commands::Demo(demo) => demo.exec(),
            Commands::Config(config) => config.exec(),
        }
    }
}
