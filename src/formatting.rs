//! Text rendering of to-do items for the command-line front end

use crate::todo::{Item, TodoState};

/// Which items a listing shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFilter {
    #[default]
    All,
    Pending,
    Done,
}

impl ListFilter {
    pub fn matches(self, item: &Item) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Pending => item.is_pending(),
            ListFilter::Done => item.done,
        }
    }
}

/// Format one item as `<index>. [x] <title> (<id>)`, details indented below
pub fn format_item(index: usize, item: &Item) -> String {
    let mark = if item.done { 'x' } else { ' ' };
    let mut line = format!("{:>3}. [{}] {} ({})", index, mark, item.title, item.id);
    if let Some(details) = &item.details {
        for detail_line in details.lines() {
            line.push_str("\n       ");
            line.push_str(detail_line);
        }
    }
    line
}

/// Format the items selected by `filter`
///
/// Indices are positions in the full list, so they can be passed to `mv`
/// even when a filter hides some items.
pub fn format_items(state: &TodoState, filter: ListFilter) -> String {
    let lines: Vec<String> = state
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| filter.matches(item))
        .map(|(index, item)| format_item(index, item))
        .collect();

    if lines.is_empty() {
        return "No items.".to_string();
    }

    let mut out = lines.join("\n");
    out.push_str(&format!(
        "\n\n{} item(s), {} done",
        state.len(),
        state.done_count()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> TodoState {
        let mut done = Item::new("b", "Walk dog", None);
        done.done = true;
        TodoState::from_items(vec![
            Item::new("a", "Buy milk", Some("2 litres\nsemi-skimmed".to_string())),
            done,
        ])
    }

    #[test]
    fn test_format_item() {
        let item = Item::new("a", "Buy milk", None);
        assert_eq!(format_item(0, &item), "  0. [ ] Buy milk (a)");
    }

    #[test]
    fn test_format_item_with_details() {
        let item = Item::new("a", "Buy milk", Some("2 litres\nsemi-skimmed".to_string()));
        assert_eq!(
            format_item(1, &item),
            "  1. [ ] Buy milk (a)\n       2 litres\n       semi-skimmed"
        );
    }

    #[test]
    fn test_format_items_all() {
        let out = format_items(&sample_state(), ListFilter::All);
        assert!(out.contains("  0. [ ] Buy milk (a)"));
        assert!(out.contains("  1. [x] Walk dog (b)"));
        assert!(out.ends_with("2 item(s), 1 done"));
    }

    #[test]
    fn test_format_items_filter_keeps_full_list_index() {
        let out = format_items(&sample_state(), ListFilter::Done);
        assert!(out.starts_with("  1. [x] Walk dog (b)"));
        assert!(!out.contains("Buy milk"));
    }

    #[test]
    fn test_format_items_empty() {
        assert_eq!(format_items(&TodoState::new(), ListFilter::All), "No items.");
    }
}
