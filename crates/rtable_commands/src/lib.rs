pub mod cli;
pub mod command;
mod config;
mod demo;
mod output;
mod render;
mod text;

pub use cli::*;
pub use command::*;
