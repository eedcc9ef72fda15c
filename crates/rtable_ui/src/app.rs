use crate::components::table::Table;
use leptos::{leptos_dom::logging, *};
use rtable_models::{ClassName, Column, Record, TableConfig, sort_columns};

pub fn sample_table() -> TableConfig {
    TableConfig {
        columns: vec![
            Column::new("First column"),
            Column::new("Second one"),
            Column::new("Last column"),
        ],
        data: vec![
            Record::new().with("id", 0).with("name", "John").with("age", 12),
            Record::new().with("id", 1).with("name", "Janet").with("age", 23),
            Record::new().with("id", 2).with("name", "Jack").with("age", 14),
        ],
        class_name: ClassName::new("my-table"),
    }
}

/// Sorts `columns` by the header at the reported position.
pub fn sort_by_position(columns: RwSignal<Vec<Column>>) -> Callback<usize> {
    Callback::new(move |index: usize| {
        columns.update(|columns| *columns = sort_columns(columns, index));
    })
}

/// Demo page rendering the sample table. The page owns the sort state, the
/// table only reports which header was clicked.
#[component]
pub fn App() -> impl IntoView {
    let TableConfig {
        columns,
        data,
        class_name,
    } = sample_table();
    let columns = create_rw_signal(columns);

    let on_sort = Callback::new(move |clicked: Column| {
        logging::console_log(&format!("sorting by {}", clicked.title));
    });
    let on_sort_at = sort_by_position(columns);

    view! {
        <div class="App">
            {move || {
                let current = columns.get();
                let data = data.clone();
                let class_name = class_name.clone();
                let (on_sort, on_sort_at) = (on_sort.clone(), on_sort_at.clone());
                view! {
                    <Table
                        columns=current
                        data=data
                        class_name=class_name
                        on_sort=on_sort
                        on_sort_at=on_sort_at
                    />
                }
            }}
        </div>
    }
}
