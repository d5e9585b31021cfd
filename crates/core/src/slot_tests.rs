// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::coordinator::SimpleCoordinator;

fn simple(relation: &str) -> Result<Arc<dyn Coordinator>, String> {
    Ok(Arc::new(SimpleCoordinator::new(relation)))
}

#[test]
fn first_publish_wins() {
    let slot = CoordinatorSlot::new();

    let (first, created) = slot.get_or_publish(|| simple("first")).unwrap();
    assert!(created);

    let (second, created) = slot.get_or_publish(|| simple("second")).unwrap();
    assert!(!created);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(slot.get().unwrap().relation(), "first");
}

#[test]
fn failed_init_publishes_nothing() {
    let slot = CoordinatorSlot::new();

    let result = slot.get_or_publish(|| Err::<Arc<dyn Coordinator>, _>("boom".to_string()));

    assert_eq!(result.err(), Some("boom".to_string()));
    assert!(!slot.is_published());
    assert!(slot.get_or_publish(|| simple("retry")).unwrap().1);
}

#[test]
fn init_runs_once_across_threads() {
    let slot = Arc::new(CoordinatorSlot::new());
    let calls = Arc::new(std::sync::atomic::AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let slot = Arc::clone(&slot);
            let calls = Arc::clone(&calls);
            std::thread::spawn(move || {
                slot.get_or_publish(|| {
                    calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                    simple("shared")
                })
                .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
}
