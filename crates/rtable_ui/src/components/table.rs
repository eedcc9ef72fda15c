use crate::components::{
    body::Body,
    head::{Head, default_sorter},
};
use leptos::{leptos_dom::logging, *};
use rtable_models::{ClassName, Column, Record, SortDirection, mismatched_rows};

/// A table with a header built from `columns` and one row per record of
/// `data`. `class_name` is the base class handed to every part of the table.
#[component]
pub fn Table(
    #[prop(optional)] columns: Vec<Column>,
    #[prop(optional)] data: Vec<Record>,
    #[prop(optional, into)] class_name: ClassName,
    #[prop(optional, into)] sorter: Option<Callback<SortDirection, View>>,
    #[prop(optional, into)] on_sort: Option<Callback<Column>>,
    #[prop(optional, into)] on_sort_at: Option<Callback<usize>>,
) -> impl IntoView {
    let mismatched = mismatched_rows(&columns, &data);
    if !mismatched.is_empty() {
        logging::console_warn(&format!(
            "{} of {} records do not have {} fields, rendering them as they are",
            mismatched.len(),
            data.len(),
            columns.len()
        ));
    }

    let sorter = sorter.unwrap_or_else(default_sorter);
    let on_sort = on_sort.unwrap_or_else(|| Callback::new(|_: Column| {}));
    let on_sort_at = on_sort_at.unwrap_or_else(|| Callback::new(|_: usize| {}));
    let class = class_name.base().to_owned();
    let head_class = class_name.clone();

    view! {
        <table class=class>
            <Head
                columns=columns
                sorter=sorter
                on_sort=on_sort
                on_sort_at=on_sort_at
                class_name=head_class
            />
            <Body data=data class_name=class_name/>
        </table>
    }
}
