//! Static rendering. Output comes from the leptos server renderer, so elements
//! carry hydration markers (`data-hk` attributes and `<!--hk=...-->` comments)
//! and dynamic class values may be padded with a leading space. Browsers ignore
//! both; consumers matching on markup should compare class tokens.

use crate::components::table::Table;
use leptos::{ssr::render_to_string, *};
use rtable_models::TableConfig;

pub fn render_table(config: &TableConfig) -> String {
    let config = config.clone();
    render_to_string(move || {
        view! { <Table columns=config.columns data=config.data class_name=config.class_name/> }
    })
    .to_string()
}

/// Renders the table inside a standalone html document titled `title`.
pub fn render_document(config: &TableConfig, title: &str) -> String {
    let config = config.clone();
    let title = title.to_owned();
    let document = render_to_string(move || {
        view! {
            <html>
                <head>
                    <meta charset="utf-8"/>
                    <title>{title}</title>
                </head>
                <body>
                    <Table columns=config.columns data=config.data class_name=config.class_name/>
                </body>
            </html>
        }
    });
    format!("<!DOCTYPE html>\n{document}\n")
}
