//! The tree carries no locking of its own; these tests exercise the
//! external-lock contract.

use freqtree::IndexedFrequencyTree;
use std::sync::{Arc, RwLock};
use std::thread;

#[test]
fn test_rwlock_writers_and_readers() {
    let tree = Arc::new(RwLock::new(IndexedFrequencyTree::<i64>::new()));

    thread::scope(|s| {
        for worker in 0..4 {
            let tree = Arc::clone(&tree);
            s.spawn(move || {
                for i in 0..250 {
                    tree.write().unwrap().append(worker * 1000 + i);
                }
            });
        }
        for _ in 0..4 {
            let tree = Arc::clone(&tree);
            s.spawn(move || {
                for _ in 0..100 {
                    let guard = tree.read().unwrap();
                    if !guard.is_empty() {
                        let last = guard.len() as isize - 1;
                        assert_eq!(guard.prefix_sum(last), Ok(guard.iter().sum::<i64>()));
                    }
                }
            });
        }
    });

    let guard = tree.read().unwrap();
    assert_eq!(guard.len(), 1000);
    let expected: i64 = (0..4).map(|w| (0..250).map(|i| w * 1000 + i).sum::<i64>()).sum();
    assert_eq!(guard.total(), expected);
}

#[test]
fn test_tree_moves_between_threads() {
    let mut tree: IndexedFrequencyTree = (1..=100).collect();
    let handle = thread::spawn(move || {
        tree.update(0, 0).unwrap();
        tree
    });
    let tree = handle.join().unwrap();
    assert_eq!(tree.total(), 5049);
}
