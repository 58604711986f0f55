// Example-based tests for the façade queues, covering the literal
// scenarios worked through this crate's design.
//
// Licensed under the Apache License, Version 2.0 (the "License")

use d_ary_heap::{Error, MinBy, PriorityQueue, UniquePriorityQueue};
use std::hash::{Hash, Hasher};

#[derive(Clone, Debug)]
struct Person {
    name: &'static str,
    birth_year: u32,
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl Eq for Person {}
impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[test]
fn unique_queue_with_string_elements_and_integer_priorities() {
    let mut pq = UniquePriorityQueue::new(MinBy(|p: &Person| p.birth_year));
    pq.enqueue(Person { name: "John", birth_year: 1940 }).unwrap();
    pq.enqueue(Person { name: "Paul", birth_year: 1942 }).unwrap();
    pq.enqueue(Person { name: "George", birth_year: 1943 }).unwrap();
    pq.enqueue(Person { name: "Ringo", birth_year: 1940 }).unwrap();

    let drained: Vec<&'static str> =
        std::iter::from_fn(|| pq.remove_min().ok()).map(|p| p.name).collect();

    assert!(drained == ["John", "Ringo", "Paul", "George"] || drained == ["Ringo", "John", "Paul", "George"]);
}

#[test]
fn heap_sort_of_integers_with_duplicates() {
    let mut pq = PriorityQueue::new(MinBy(|x: &i32| *x));
    for n in [5, 1, 4, 1, 3] {
        pq.enqueue(n);
    }
    let mut drained = Vec::new();
    while let Some(n) = pq.try_remove_min() {
        drained.push(n);
    }
    assert_eq!(drained, vec![1, 1, 3, 4, 5]);
}

#[test]
fn arbitrary_removal_by_element() {
    let mut pq = UniquePriorityQueue::new(MinBy(|x: &i32| *x));
    for n in [10, 20, 30, 40, 50] {
        pq.enqueue(n).unwrap();
    }
    assert!(pq.try_remove(&30));

    let mut drained = Vec::new();
    while let Some(n) = pq.try_remove_min() {
        drained.push(n);
    }
    assert_eq!(drained, vec![10, 20, 40, 50]);
}

#[derive(Clone, Debug)]
struct Task {
    name: &'static str,
    priority: i64,
}
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl Eq for Task {}
impl Hash for Task {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[test]
fn update_that_moves_element_up() {
    let mut pq = UniquePriorityQueue::new(MinBy(|t: &Task| t.priority));
    pq.enqueue(Task { name: "A", priority: 100 }).unwrap();
    pq.enqueue(Task { name: "B", priority: 50 }).unwrap();
    pq.enqueue(Task { name: "C", priority: 75 }).unwrap();

    pq.update(Task { name: "A", priority: 10 }).unwrap();

    assert_eq!(pq.remove_min().unwrap().name, "A");
}

#[test]
fn update_that_moves_element_down() {
    let mut pq = UniquePriorityQueue::new(MinBy(|t: &Task| t.priority));
    pq.enqueue(Task { name: "A", priority: 100 }).unwrap();
    pq.enqueue(Task { name: "B", priority: 50 }).unwrap();
    pq.enqueue(Task { name: "C", priority: 75 }).unwrap();

    pq.update(Task { name: "A", priority: 10 }).unwrap();
    pq.update(Task { name: "B", priority: 1000 }).unwrap();

    assert_eq!(pq.remove_min().unwrap().name, "A");
    assert_eq!(pq.remove_min().unwrap().name, "C");
    assert_eq!(pq.remove_min().unwrap().name, "B");
}

#[test]
fn enumerator_walks_in_slot_order_when_undisturbed() {
    let mut pq = PriorityQueue::new(MinBy(|x: &i32| *x));
    pq.enqueue(1);
    pq.enqueue(2);
    pq.enqueue(3);

    let mut cursor = pq.entries();
    let mut seen = Vec::new();
    while let Some(item) = pq.advance(&mut cursor) {
        seen.push(*item.unwrap());
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn enumerator_fails_with_modified_after_mutation() {
    let mut pq = PriorityQueue::new(MinBy(|x: &i32| *x));
    pq.enqueue(1);
    pq.enqueue(2);

    let mut cursor = pq.entries();
    pq.enqueue(3);

    assert_eq!(pq.advance(&mut cursor), Some(Err(Error::Modified)));
    // The cursor stays dead for the rest of its walk.
    assert_eq!(pq.advance(&mut cursor), None);
}

type IntQueue = PriorityQueue<i32, i32, MinBy<fn(&i32) -> i32>>;

#[test]
fn empty_peek_and_remove() {
    let pq: IntQueue = PriorityQueue::new(MinBy(|x: &i32| *x));
    assert_eq!(pq.peek_min(), Err(Error::Empty));
    assert_eq!(pq.try_peek_min(), None);
}

#[test]
fn empty_remove_min_fails() {
    let mut pq = PriorityQueue::new(MinBy(|x: &i32| *x));
    assert_eq!(pq.remove_min(), Err(Error::Empty));
    assert_eq!(pq.try_remove_min(), None);
}

#[test]
fn duplicate_enqueue_fails_on_unique_queue() {
    let mut pq = UniquePriorityQueue::new(MinBy(|x: &i32| *x));
    pq.enqueue(1).unwrap();
    assert_eq!(pq.enqueue(1), Err(Error::Duplicate));
    assert!(!pq.try_enqueue(1));
}

#[test]
fn update_missing_element_fails() {
    let mut pq = UniquePriorityQueue::new(MinBy(|x: &i32| *x));
    assert_eq!(pq.update(1), Err(Error::NotPresent));
    assert!(!pq.try_update(1));
}

#[test]
fn remove_missing_element_fails() {
    let mut pq = UniquePriorityQueue::new(MinBy(|x: &i32| *x));
    assert_eq!(pq.remove(&1), Err(Error::NotPresent));
    assert!(!pq.try_remove(&1));
}

#[test]
fn update_or_enqueue_upserts() {
    let mut pq = UniquePriorityQueue::new(MinBy(|t: &Task| t.priority));
    pq.update_or_enqueue(Task { name: "A", priority: 10 });
    assert_eq!(pq.count(), 1);
    pq.update_or_enqueue(Task { name: "A", priority: 1 });
    assert_eq!(pq.count(), 1);
    assert_eq!(pq.peek_min().unwrap().priority, 1);
}

#[test]
fn clear_resets_index_and_count() {
    let mut pq = UniquePriorityQueue::new(MinBy(|x: &i32| *x));
    pq.enqueue(1).unwrap();
    pq.enqueue(2).unwrap();
    pq.clear();
    assert_eq!(pq.count(), 0);
    assert!(!pq.contains(&1));
    pq.enqueue(1).unwrap();
    assert_eq!(pq.count(), 1);
}

#[test]
fn bulk_heapify_equivalent_to_one_at_a_time() {
    let items = vec![20, 5, 22, 16, 18, 17, 12, 9];
    let mut bulk = PriorityQueue::from_iter(MinBy(|x: &i32| *x), items.clone());
    let mut incremental = PriorityQueue::new(MinBy(|x: &i32| *x));
    for n in items {
        incremental.enqueue(n);
    }

    let mut a = Vec::new();
    while let Some(n) = bulk.try_remove_min() {
        a.push(n);
    }
    let mut b = Vec::new();
    while let Some(n) = incremental.try_remove_min() {
        b.push(n);
    }
    assert_eq!(a, b);
}
