use super::*;

fn list(titles: &[(&str, bool)]) -> TaskList {
    TaskList::new(
        titles
            .iter()
            .map(|(title, checked)| Item { title: (*title).to_owned(), checked: *checked })
            .collect(),
    )
}

#[test]
fn task_list_default_is_empty() {
    let tasks = TaskList::default();
    assert!(tasks.items.is_empty());
    assert_eq!(tasks.remaining(), 0);
}

#[test]
fn add_trims_and_appends_unchecked() {
    let mut tasks = TaskList::default();
    assert!(tasks.add("  Buy milk "));
    assert_eq!(tasks.items, vec![Item { title: "Buy milk".to_owned(), checked: false }]);
}

#[test]
fn add_rejects_blank_title() {
    let mut tasks = TaskList::default();
    assert!(!tasks.add("   "));
    assert!(tasks.items.is_empty());
}

#[test]
fn toggle_flips_and_ignores_out_of_range() {
    let mut tasks = list(&[("a", false)]);
    assert!(tasks.toggle(0));
    assert!(tasks.items[0].checked);
    assert!(tasks.toggle(0));
    assert!(!tasks.items[0].checked);
    assert!(!tasks.toggle(5));
}

#[test]
fn remove_returns_item() {
    let mut tasks = list(&[("a", false), ("b", true)]);
    assert_eq!(tasks.remove(0).map(|i| i.title), Some("a".to_owned()));
    assert_eq!(tasks.items.len(), 1);
    assert_eq!(tasks.remove(3), None);
}

#[test]
fn clear_checked_and_remaining() {
    let mut tasks = list(&[("a", true), ("b", false), ("c", true)]);
    assert_eq!(tasks.remaining(), 1);
    assert_eq!(tasks.clear_checked(), 2);
    assert_eq!(tasks.items.len(), 1);
    assert_eq!(tasks.items[0].title, "b");
}
