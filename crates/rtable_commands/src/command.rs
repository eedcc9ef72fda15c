use anyhow::Result;

pub trait RtableCommand {
    fn exec(self) -> Result<()>;
}
