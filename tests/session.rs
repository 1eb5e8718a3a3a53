//! Library-level tests driving a whole session through the public API.

use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

use tada::model::{Stats, TaskList};
use tada::tui::celebrate::Celebration;

fn snapshot(list: &TaskList) -> Vec<(String, bool)> {
    list.tasks()
        .iter()
        .map(|t| (t.text.clone(), t.completed))
        .collect()
}

#[test]
fn test_session_flow() {
    let mut list = TaskList::new();
    let milk = list.add("Buy milk").unwrap();
    let plants = list.add("Water the plants").unwrap();
    list.add("File taxes").unwrap();
    assert!(list.add("   ").is_none());

    list.toggle(plants);
    assert_eq!(
        snapshot(&list),
        vec![
            ("Buy milk".to_string(), false),
            ("Water the plants".to_string(), true),
            ("File taxes".to_string(), false),
        ]
    );

    let stats = Stats::of(&list);
    assert_eq!((stats.total, stats.completed, stats.remaining), (3, 1, 2));

    list.delete(milk);
    list.toggle(plants);
    assert_eq!(
        snapshot(&list),
        vec![
            ("Water the plants".to_string(), false),
            ("File taxes".to_string(), false),
        ]
    );
}

#[test]
fn test_celebration_over_a_session() {
    let t0 = Instant::now();
    let mut list = TaskList::new();
    let mut celebration = Celebration::new();

    let a = list.add("one").unwrap();
    celebration.observe(&Stats::of(&list), t0);
    let b = list.add("two").unwrap();
    celebration.observe(&Stats::of(&list), t0);
    assert!(!celebration.is_showing());

    list.toggle(a);
    celebration.observe(&Stats::of(&list), t0);
    list.toggle(b);
    celebration.observe(&Stats::of(&list), t0 + Duration::from_secs(1));
    assert!(celebration.is_showing());

    // The window outlasts further edits and then closes on its own
    let c = list.add("three").unwrap();
    celebration.observe(&Stats::of(&list), t0 + Duration::from_secs(2));
    celebration.tick(t0 + Duration::from_secs(2));
    assert!(celebration.is_showing());
    celebration.tick(t0 + Duration::from_secs(4));
    assert!(!celebration.is_showing());

    // Finishing the new task starts a fresh celebration
    list.toggle(c);
    celebration.observe(&Stats::of(&list), t0 + Duration::from_secs(5));
    assert!(celebration.is_showing());
}
