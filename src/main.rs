use clap::Parser;
use rtable_commands::{Cli, RtableCommand};

fn main() {
    if let Err(e) = Cli::parse().exec() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
