//! Tests for the notification store

use super::*;
use proptest::prelude::*;
use std::thread;

#[test]
fn test_default_ttl_is_five_seconds() {
    let store = NotificationStore::new();

    assert_eq!(store.ttl(), Duration::from_millis(5000));
}

#[test]
fn test_add_then_list() {
    let store = NotificationStore::new();

    let id = store.add("Employee added successfully!", NotificationKind::Success);

    let list = store.list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, id);
    assert_eq!(list[0].message, "Employee added successfully!");
    assert_eq!(list[0].kind, NotificationKind::Success);
}

#[test]
fn test_remove_then_list() {
    let store = NotificationStore::new();
    let keep = store.error("Failed to delete record");
    let gone = store.success("Leave approved");

    store.remove(gone);

    let ids: Vec<_> = store.list().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![keep]);
}

#[test]
fn test_remove_is_idempotent() {
    let store = NotificationStore::new();
    let a = store.success("a");
    let b = store.success("b");

    store.remove(a);
    let once = store.list();
    store.remove(a);
    let twice = store.list();

    assert_eq!(once, twice);
    assert_eq!(twice.len(), 1);
    assert_eq!(twice[0].id, b);
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let store = NotificationStore::new();
    store.success("still here");

    store.remove(9999);

    assert_eq!(store.list().len(), 1);
}

#[test]
fn test_list_keeps_creation_order() {
    let store = NotificationStore::new();
    store.success("first");
    store.error("second");
    store.success("third");

    let messages: Vec<_> = store.list().into_iter().map(|n| n.message).collect();

    assert_eq!(messages, vec!["first", "second", "third"]);
}

#[test]
fn test_ids_not_reused_after_removal() {
    let store = NotificationStore::new();
    let first = store.success("one");
    store.remove(first);

    let second = store.success("two");

    assert_ne!(first, second);
}

#[test]
fn test_expired_after_ttl() {
    let store = NotificationStore::new();
    store.add("Employee added successfully!", NotificationKind::Success);

    let later = Instant::now() + DEFAULT_TTL;

    assert!(store.list_at(later).is_empty());
}

#[test]
fn test_not_expired_before_ttl() {
    let store = NotificationStore::new();
    store.success("fresh");

    let list = store.list_at(Instant::now() + Duration::from_millis(4000));

    assert_eq!(list.len(), 1);
}

#[test]
fn test_expiry_with_real_clock() {
    let store = NotificationStore::with_ttl(Duration::from_millis(10));
    store.success("short lived");
    assert!(!store.is_empty());

    thread::sleep(Duration::from_millis(20));

    assert!(store.is_empty());
    assert!(store.remove_expired());
    assert!(!store.remove_expired());
}

#[test]
fn test_remove_after_expiry_is_noop() {
    let store = NotificationStore::with_ttl(Duration::from_millis(10));
    let id = store.success("gone soon");
    thread::sleep(Duration::from_millis(20));
    store.remove_expired();

    // Manual dismissal racing the expiry must not panic
    store.remove(id);

    assert!(store.list().is_empty());
}

#[test]
fn test_dismiss_latest() {
    let store = NotificationStore::new();
    let older = store.success("older");
    let newer = store.error("newer");

    assert_eq!(store.dismiss_latest(), Some(newer));
    assert_eq!(store.dismiss_latest(), Some(older));
    assert_eq!(store.dismiss_latest(), None);
}

#[test]
fn test_clones_share_state() {
    let store = NotificationStore::new();
    let publisher = store.clone();

    publisher.success("from another tab");

    assert_eq!(store.list().len(), 1);
}

#[test]
fn test_concurrent_adds_all_recorded_with_unique_ids() {
    let store = NotificationStore::new();

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = store.clone();
            thread::spawn(move || {
                for i in 0..25 {
                    store.success(format!("{}-{}", t, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let list = store.list();
    assert_eq!(list.len(), 200);
    let mut ids: Vec<_> = list.iter().map(|n| n.id).collect();
    // Creation order follows id order because ids are assigned under the lock
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    ids.dedup();
    assert_eq!(ids.len(), 200);
}

#[test]
fn test_kind_colors() {
    assert_eq!(
        NotificationKind::Success.colors().bg,
        theme::notification::SUCCESS.bg
    );
    assert_eq!(
        NotificationKind::Error.colors().bg,
        theme::notification::ERROR.bg
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Each add contributes exactly one entry with the given message and kind
    #[test]
    fn prop_add_appends_one_entry(messages in prop::collection::vec("[a-zA-Z0-9 !]{1,40}", 1..10)) {
        let store = NotificationStore::new();

        for (i, msg) in messages.iter().enumerate() {
            let kind = if i % 2 == 0 { NotificationKind::Success } else { NotificationKind::Error };
            let id = store.add(msg.clone(), kind);

            let list = store.list();
            prop_assert_eq!(list.len(), i + 1);
            let last = list.last().unwrap();
            prop_assert_eq!(last.id, id);
            prop_assert_eq!(&last.message, msg);
            prop_assert_eq!(last.kind, kind);
        }
    }

    /// Removing any subset, with repeats, leaves exactly the complement
    #[test]
    fn prop_remove_leaves_complement(count in 1usize..20, picks in prop::collection::vec(0usize..20, 0..30)) {
        let store = NotificationStore::new();
        let ids: Vec<_> = (0..count).map(|i| store.success(i.to_string())).collect();

        for pick in &picks {
            if let Some(id) = ids.get(*pick) {
                store.remove(*id);
            }
        }

        let remaining: Vec<_> = store.list().iter().map(|n| n.id).collect();
        let expected: Vec<_> = ids
            .iter()
            .enumerate()
            .filter(|(i, _)| !picks.contains(i))
            .map(|(_, id)| *id)
            .collect();
        prop_assert_eq!(remaining, expected);
    }
}
