use crate::class_name::with_class_name;
use leptos::*;
use rtable_config::definitions::{HEAD_SUFFIX, HEADER_SUFFIX, SORTER_CLASS};
use rtable_models::{ClassName, Column, SortDirection};

#[component]
pub fn Sorter(direction: SortDirection) -> impl IntoView {
    let class = format!("{SORTER_CLASS} {}", direction.class());
    view! { <span class=class>{direction.arrow()}</span> }
}

pub fn default_sorter() -> Callback<SortDirection, View> {
    Callback::new(|direction: SortDirection| view! { <Sorter direction=direction/> }.into_view())
}

/// Notifies the callbacks of a clicked header and returns how many were called.
pub(crate) fn activate(
    on_sort: Option<&Callback<Column>>,
    on_sort_at: Option<&Callback<usize>>,
    index: usize,
    column: &Column,
) -> usize {
    let mut notified = 0;
    if let Some(on_sort) = on_sort {
        on_sort.call(column.clone());
        notified += 1;
    }
    if let Some(on_sort_at) = on_sort_at {
        on_sort_at.call(index);
        notified += 1;
    }
    notified
}

/// Header row of a table. `sorter` renders the indicator of sorted columns,
/// `on_sort` receives the column whose header was clicked and `on_sort_at` its
/// position, which tells apart columns that compare equal.
#[component]
pub fn Head(
    #[prop(optional)] columns: Vec<Column>,
    #[prop(optional, into)] sorter: Option<Callback<SortDirection, View>>,
    #[prop(optional, into)] on_sort: Option<Callback<Column>>,
    #[prop(optional, into)] on_sort_at: Option<Callback<usize>>,
    #[prop(optional, into)] class_name: ClassName,
) -> impl IntoView {
    let sorter = sorter.unwrap_or_else(default_sorter);
    let header_class = with_class_name(HEADER_SUFFIX, |class| class)(&class_name);

    let headers = columns
        .into_iter()
        .enumerate()
        .map(|(index, column)| {
            let class = header_class.clone();
            let title = column.title.clone();
            let indicator = column.sorted.map(|direction| sorter.call(direction));
            let on_sort = on_sort.clone();
            let on_sort_at = on_sort_at.clone();
            view! {
                <th
                    class=class
                    on:click=move |_: ev::MouseEvent| {
                        activate(on_sort.as_ref(), on_sort_at.as_ref(), index, &column);
                    }
                >
                    {title}
                    {indicator}
                </th>
            }
            .into_view()
        })
        .collect::<View>();

    with_class_name(HEAD_SUFFIX, move |class| {
        view! {
            <thead class=class>
                <tr>{headers}</tr>
            </thead>
        }
    })(&class_name)
}
