use crate::class_name::with_class_name;
use leptos::*;
use rtable_config::definitions::{BODY_SUFFIX, CELL_SUFFIX, ROW_SUFFIX};
use rtable_models::{CellData, ClassName, Record};

#[component]
pub fn Body(
    #[prop(optional)] data: Vec<Record>,
    #[prop(optional, into)] class_name: ClassName,
) -> impl IntoView {
    let rows = data
        .iter()
        .map(|record| {
            let cells = record.cells();
            let class_name = class_name.clone();
            view! { <Row cells=cells class_name=class_name/> }.into_view()
        })
        .collect::<View>();

    with_class_name(BODY_SUFFIX, move |class| {
        view! { <tbody class=class>{rows}</tbody> }
    })(&class_name)
}

/// One `<tr>` with exactly one cell per entry of `cells`.
#[component]
pub fn Row(
    #[prop(optional)] cells: Vec<CellData>,
    #[prop(optional, into)] class_name: ClassName,
) -> impl IntoView {
    let cells = cells
        .into_iter()
        .map(|content| {
            let class_name = class_name.clone();
            view! { <Cell content=content class_name=class_name/> }.into_view()
        })
        .collect::<View>();

    with_class_name(ROW_SUFFIX, move |class| view! { <tr class=class>{cells}</tr> })(&class_name)
}

#[component]
pub fn Cell(
    #[prop(optional, into)] content: CellData,
    #[prop(optional, into)] class_name: ClassName,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let text = content.to_string();
    let children = children.map(|children| children());

    with_class_name(CELL_SUFFIX, move |class| {
        view! {
            <td class=class>
                {text}
                {children}
            </td>
        }
    })(&class_name)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::markup::has_class;
    use leptos::ssr::render_to_string;

    fn records() -> Vec<Record> {
        vec![
            Record::new().with("id", 0).with("name", "John").with("age", 12),
            Record::new().with("id", 1).with("name", "Janet").with("age", 23),
            Record::new().with("id", 2).with("name", "Jack").with("age", 14),
        ]
    }

    #[test]
    fn body_renders_one_row_per_record_in_order() {
        let data = records();
        let html = render_to_string(move || view! { <Body data=data/> }).to_string();

        assert!(html.contains("<tbody"));
        assert_eq!(html.matches("</tr>").count(), 3);
        assert_eq!(html.matches("</td>").count(), 9);

        let john = html.find("John").unwrap();
        let janet = html.find("Janet").unwrap();
        let jack = html.find("Jack").unwrap();
        assert!(john < janet && janet < jack);
    }

    #[test]
    fn body_is_empty_without_records() {
        let html = render_to_string(|| view! { <Body data=Vec::new()/> }).to_string();
        assert!(has_class(&html, "table__body"));
        assert_eq!(html.matches("</tr>").count(), 0);
    }

    #[test]
    fn row_renders_cells_from_array() {
        let cells = vec![CellData::from("test")];
        let html = render_to_string(move || view! { <Row cells=cells/> }).to_string();

        assert_eq!(html.matches("</td>").count(), 1);
        assert!(html.contains("test"));
    }

    #[test]
    fn row_renders_exactly_the_given_cells_in_order() {
        let cells = vec![
            CellData::from("alpha"),
            CellData::from(2_i64),
            CellData::from("omega"),
        ];
        let html = render_to_string(move || view! { <Row cells=cells class_name="grid"/> }).to_string();

        assert_eq!(html.matches("</td>").count(), 3);
        assert!(has_class(&html, "grid__row"));
        assert!(has_class(&html, "grid__cell"));
        assert!(html.find("alpha").unwrap() < html.find("omega").unwrap());
    }

    #[test]
    fn cell_renders_content_and_children() {
        let html = render_to_string(|| {
            view! {
                <Cell content="plain">
                    <a href="/details">"details"</a>
                </Cell>
            }
        })
        .to_string();

        assert_eq!(html.matches("</td>").count(), 1);
        assert!(html.contains("plain"));
        assert!(html.contains("href=\"/details\""));
        assert!(has_class(&html, "table__cell"));
    }
}
