//! End-to-end diff scenarios over the login-page fixtures.

mod common;

use common::{login_page, login_page_modified};
use websketch_ir::{ChangeKind, DiffOptions, Role, diff};

#[test]
fn identity_diff_is_clean() {
    let cap = login_page();
    let result = diff(&cap, &cap, &DiffOptions::default());
    assert!(result.summary.identical);
    assert!(result.changes.is_empty());
    assert_eq!(result.summary.counts.total(), 0);
    assert!(result.summary.fingerprints_match);
    assert!(result.summary.layout_fingerprints_match);
    assert!(!result.metadata.url_changed);
    assert!(!result.metadata.viewport_changed);
    assert!(result.metadata.compiler_version_match);
    assert_eq!(result.summary.node_count_a, result.summary.node_count_b);
}

#[test]
fn modified_login_page_explains_each_edit() {
    let before = login_page();
    let after = login_page_modified();
    let result = diff(&before, &after, &DiffOptions::default());

    assert!(!result.summary.identical);
    assert!(!result.summary.fingerprints_match);

    // Heading copy changed in place.
    let text_changes: Vec<_> = result
        .changes
        .iter()
        .filter(|c| c.kind == ChangeKind::TextChanged)
        .collect();
    assert!(!text_changes.is_empty());
    assert!(
        text_changes
            .iter()
            .any(|c| c.node_a.as_ref().unwrap().role == Role::Text)
    );

    // The submit button moved down by 5% of the viewport.
    let moved: Vec<_> = result
        .changes
        .iter()
        .filter(|c| c.kind == ChangeKind::Moved)
        .collect();
    assert_eq!(moved.len(), 1);
    assert_eq!(moved[0].node_a.as_ref().unwrap().role, Role::Button);
    let delta = moved[0].delta.unwrap();
    assert!((delta[1] - 0.05).abs() < 0.01, "dy was {}", delta[1]);

    // The toast is new.
    let added: Vec<_> = result
        .changes
        .iter()
        .filter(|c| c.kind == ChangeKind::Added)
        .collect();
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].node_b.as_ref().unwrap().role, Role::Toast);
    assert!(added[0].node_a.is_none());

    // The root gained a child; nothing was removed.
    assert_eq!(result.summary.counts.children_changed, 1);
    assert_eq!(result.summary.counts.removed, 0);
    assert_eq!(result.summary.node_count_b, result.summary.node_count_a + 1);
}

#[test]
fn reverse_diff_mirrors_the_edit() {
    let before = login_page();
    let after = login_page_modified();
    let forward = diff(&before, &after, &DiffOptions::default());
    let reverse = diff(&after, &before, &DiffOptions::default());

    assert_eq!(forward.summary.counts.added, reverse.summary.counts.removed);
    assert_eq!(forward.summary.counts.removed, reverse.summary.counts.added);
    assert_eq!(forward.summary.counts.moved, reverse.summary.counts.moved);
    assert_eq!(
        forward.summary.counts.text_changed,
        reverse.summary.counts.text_changed
    );

    let moved = reverse
        .changes
        .iter()
        .find(|c| c.kind == ChangeKind::Moved)
        .unwrap();
    assert!((moved.delta.unwrap()[1] + 0.05).abs() < 0.01);
}

#[test]
fn top_changes_never_exceed_the_limit() {
    let before = login_page();
    let after = login_page_modified();
    let capped = DiffOptions {
        top_changes_limit: 2,
        ..DiffOptions::default()
    };
    let result = diff(&before, &after, &capped);
    assert!(result.changes.len() > 2);
    assert_eq!(result.top_changes.len(), 2);
}

#[test]
fn stricter_threshold_turns_the_move_into_churn() {
    // At a 0.95 threshold the displaced button (IoU ~0.09 against its old
    // position) can no longer match, so it reports as remove + add.
    let before = login_page();
    let after = login_page_modified();
    let strict = DiffOptions {
        match_threshold: 0.95,
        ..DiffOptions::default()
    };
    let result = diff(&before, &after, &strict);
    assert!(result.summary.counts.removed >= 1);
    assert!(result.summary.counts.added >= 2);
    assert_eq!(result.summary.counts.moved, 0);
}
