use taskflow_core::{visible_tasks, FilterSelector, Priority, TaskList};

/// Builds: [clean garage(high), pay rent(medium, bills), buy milk(low, errands, done)]
/// in newest-first order.
fn sample_list() -> TaskList {
    let list = TaskList::new()
        .add("buy milk", Priority::Low, Some("errands"))
        .add("pay rent", Priority::Medium, Some("bills"))
        .add("clean garage", Priority::High, None);
    let milk_id = list.tasks()[2].id;
    list.toggle(milk_id)
}

#[test]
fn all_filter_returns_everything_in_order() {
    let list = sample_list();
    let visible = visible_tasks(list.tasks(), FilterSelector::All, "");

    let texts: Vec<_> = visible.iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, ["clean garage", "pay rent", "buy milk"]);
}

#[test]
fn active_filter_excludes_completed() {
    let list = sample_list();
    let visible = visible_tasks(list.tasks(), FilterSelector::Active, "");

    assert!(visible.iter().all(|task| !task.completed));
    let texts: Vec<_> = visible.iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, ["clean garage", "pay rent"]);
}

#[test]
fn completed_filter_returns_exactly_completed_in_order() {
    let list = sample_list();
    let visible = visible_tasks(list.tasks(), FilterSelector::Completed, "");

    assert!(visible.iter().all(|task| task.completed));
    let texts: Vec<_> = visible.iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, ["buy milk"]);
}

// Priority filters intentionally hide completed tasks of the matching
// priority. This mirrors the shipped product behavior and must be preserved
// as-is; see docs/architecture/data-model.md.
#[test]
fn priority_filter_hides_completed_tasks_of_that_priority() {
    let list = sample_list();

    let low = visible_tasks(list.tasks(), FilterSelector::Priority(Priority::Low), "");
    assert!(low.is_empty());

    let high = visible_tasks(list.tasks(), FilterSelector::Priority(Priority::High), "");
    let texts: Vec<_> = high.iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, ["clean garage"]);
}

#[test]
fn search_matches_text_case_insensitively() {
    let list = sample_list();
    let visible = visible_tasks(list.tasks(), FilterSelector::All, "GARAGE");

    let texts: Vec<_> = visible.iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, ["clean garage"]);
}

#[test]
fn search_matches_category_case_insensitively() {
    let list = sample_list();
    let visible = visible_tasks(list.tasks(), FilterSelector::All, "Errands");

    let texts: Vec<_> = visible.iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, ["buy milk"]);
}

#[test]
fn empty_search_returns_filter_only_result() {
    let list = sample_list();

    let filtered = visible_tasks(list.tasks(), FilterSelector::Active, "");
    let searched = visible_tasks(list.tasks(), FilterSelector::Active, "");
    assert_eq!(filtered, searched);
    assert_eq!(filtered.len(), 2);
}

#[test]
fn filter_and_search_combine_with_logical_and() {
    let list = sample_list();

    // "milk" matches only the completed low-priority task, which the active
    // filter excludes.
    let visible = visible_tasks(list.tasks(), FilterSelector::Active, "milk");
    assert!(visible.is_empty());

    // Same search against the completed view finds it.
    let visible = visible_tasks(list.tasks(), FilterSelector::Completed, "milk");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].text, "buy milk");
}

#[test]
fn no_match_search_returns_empty() {
    let list = sample_list();
    let visible = visible_tasks(list.tasks(), FilterSelector::All, "nonexistent");
    assert!(visible.is_empty());
}

#[test]
fn result_has_no_duplicates() {
    let list = sample_list();
    // "r" appears in both text ("clean garage", "pay rent") and category
    // ("errands"); each task must still appear at most once.
    let visible = visible_tasks(list.tasks(), FilterSelector::All, "r");
    assert_eq!(visible.len(), 3);
}
