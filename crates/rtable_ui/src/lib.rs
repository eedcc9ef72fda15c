#[cfg(all(feature = "csr", feature = "ssr"))]
compile_error!("features `csr` and `ssr` are exclusive, build with `default-features = false, features = [\"csr\"]` for the browser");

pub mod app;
pub mod class_name;
pub mod components;
#[cfg(test)]
mod markup;
#[cfg(feature = "ssr")]
mod render;

pub use app::{App, sample_table, sort_by_position};
pub use components::{
    body::{Body, Cell, Row},
    head::{Head, Sorter, default_sorter},
    table::Table,
};
#[cfg(feature = "ssr")]
pub use render::*;
