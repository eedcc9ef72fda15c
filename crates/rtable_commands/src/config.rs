use crate::command::RtableCommand;
use anyhow::Result;
use clap::Args;
use rtable_config::RtableConfig;

#[derive(Args)]
#[command(about = "Prints the effective configuration")]
pub struct ConfigCommand;

impl RtableCommand for ConfigCommand {
    fn exec(self) -> Result<()> {
        let config = RtableConfig::load()?;
        print!("{}", serde_yaml_ng::to_string(&config)?);
        Ok(())
    }
}
