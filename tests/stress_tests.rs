//! Stress tests that push the heap through long operation sequences
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_fibonacci_heap::fibonacci::FibonacciHeap;
use rust_fibonacci_heap::Heap;

/// Test massive numbers of inserts and pops
fn test_massive_operations<H: Heap<i32>>() {
    let mut heap = H::new();

    for i in 0..10_000 {
        heap.push(i);
    }

    assert_eq!(heap.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(heap.pop(), Some(i));
    }

    assert!(heap.is_empty());
}

/// Test alternating insert and pop
fn test_alternating_ops<H: Heap<i32>>() {
    let mut heap = H::new();

    // Insert-insert-pop pattern; the popped key is always the smaller new one
    for i in 0..2_000 {
        heap.push(i * 2);
        heap.push(i * 2 + 1);
        assert_eq!(heap.pop(), Some(i));
    }

    assert_eq!(heap.len(), 2_000);
    let mut last = i32::MIN;
    while let Some(key) = heap.pop() {
        assert!(key >= last);
        last = key;
    }
}

/// Test merge with large heaps
fn test_large_merge<H: Heap<i32>>() {
    let mut heap1 = H::new();
    let mut heap2 = H::new();

    for i in 0..5_000 {
        heap1.push(i * 2);
        heap2.push(i * 2 + 1);
    }
    heap1.pop();
    heap2.pop();

    heap1.merge(heap2);
    assert_eq!(heap1.len(), 9_998);

    for expected in 2..10_000 {
        assert_eq!(heap1.pop(), Some(expected));
    }
    assert!(heap1.is_empty());
}

/// Test with extreme keys
fn test_extreme_keys<H: Heap<i64>>() {
    let mut heap = H::new();

    heap.push(i64::MAX);
    heap.push(0);
    heap.push(i64::MIN);
    heap.push(-1);

    assert_eq!(heap.pop(), Some(i64::MIN));
    assert_eq!(heap.pop(), Some(-1));
    assert_eq!(heap.pop(), Some(0));
    assert_eq!(heap.pop(), Some(i64::MAX));
}

/// Test many equal keys
fn test_all_equal<H: Heap<u8>>() {
    let mut heap = H::new();
    for _ in 0..3_000 {
        heap.push(7);
    }
    for remaining in (0..3_000).rev() {
        assert_eq!(heap.pop(), Some(7));
        assert_eq!(heap.len(), remaining);
    }
    assert_eq!(heap.pop(), None);
}

#[test]
fn test_fibonacci_massive() {
    test_massive_operations::<FibonacciHeap<i32>>();
}

#[test]
fn test_fibonacci_alternating() {
    test_alternating_ops::<FibonacciHeap<i32>>();
}

#[test]
fn test_fibonacci_large_merge() {
    test_large_merge::<FibonacciHeap<i32>>();
}

#[test]
fn test_fibonacci_extreme_keys() {
    test_extreme_keys::<FibonacciHeap<i64>>();
}

#[test]
fn test_fibonacci_all_equal() {
    test_all_equal::<FibonacciHeap<u8>>();
}

#[test]
fn test_fibonacci_random_workload_stays_consolidated() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut heap = FibonacciHeap::new();
    let mut mirror: Vec<u32> = Vec::new();

    for _ in 0..20_000 {
        if mirror.is_empty() || rng.gen_bool(0.6) {
            let key = rng.gen_range(0..1_000);
            heap.insert(key);
            mirror.push(key);
        } else {
            let extracted = heap.extract_min().expect("heap is not empty");
            let pos = mirror
                .iter()
                .position(|&k| k == extracted)
                .expect("extracted key was inserted");
            mirror.swap_remove(pos);
            assert!(mirror.iter().all(|&k| k >= extracted));

            // Consolidation keeps the root count logarithmic.
            let degrees = heap.root_degrees();
            assert!(heap.check_consolidated().is_ok());
            assert!(degrees.len() <= 64);
        }
        assert_eq!(heap.len(), mirror.len());
    }
}
