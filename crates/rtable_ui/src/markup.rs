//! Helpers for inspecting server rendered markup in tests.

/// Class lists of every element in `html`, in document order. Leptos pads
/// dynamic values (`class=" table"`), so each list is split on whitespace.
pub fn class_lists(html: &str) -> Vec<Vec<&str>> {
    html.split("class=\"")
        .skip(1)
        .filter_map(|rest| rest.split_once('"'))
        .map(|(value, _)| value.split_whitespace().collect())
        .collect()
}

/// Whether some element in `html` carries every class of `classes`.
pub fn has_class(html: &str, classes: &str) -> bool {
    let wanted = classes.split_whitespace().collect::<Vec<&str>>();
    class_lists(html)
        .iter()
        .any(|list| wanted.iter().all(|class| list.contains(class)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_class_values_are_split_into_tokens() {
        let html = r#"<table data-hk="0-0-0-2" class=" table"><span class=" sorter sorted-asc">"#;
        assert_eq!(class_lists(html), vec![vec!["table"], vec!["sorter", "sorted-asc"]]);
    }

    #[test]
    fn has_class_matches_whole_tokens_only() {
        let html = r#"<th class=" table__header"><span class="sorter sorted-asc">"#;
        assert!(has_class(html, "sorter sorted-asc"));
        assert!(has_class(html, "sorted-asc"));
        assert!(has_class(html, "table__header"));
        assert!(!has_class(html, "table"));
        assert!(!has_class(html, "sorter sorted-desc"));
    }
}
