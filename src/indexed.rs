//! Stock provider that maintains an element→slot index, enabling
//! membership queries and remove/update-by-element in O(1)/O(log n).

use std::collections::HashMap;
use std::hash::Hash;

use crate::provider::{HeapObserver, PriorityProvider};

/// Wraps any [`PriorityProvider`] with a `HashMap<E, usize>` index kept in
/// sync via the [`HeapObserver`] callbacks the heap engine drives.
///
/// Element equality is whatever `E`'s `Eq`/`Hash` impls define.
pub struct Indexed<E, Inner> {
    inner: Inner,
    index: HashMap<E, usize>,
}

impl<E, Inner> Indexed<E, Inner>
where
    E: Eq + Hash,
{
    pub fn new(inner: Inner) -> Self {
        Self { inner, index: HashMap::new() }
    }

    /// `true` if `element` currently occupies a slot in the heap.
    #[inline]
    pub fn contains(&self, element: &E) -> bool {
        self.index.contains_key(element)
    }

    /// The slot `element` currently occupies, if any.
    #[inline]
    pub fn slot_of(&self, element: &E) -> Option<usize> {
        self.index.get(element).copied()
    }

    /// Number of indexed elements; must always equal the heap's count.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl<E, P, Inner> PriorityProvider<E, P> for Indexed<E, Inner>
where
    Inner: PriorityProvider<E, P>,
{
    fn compare(&self, left: &P, right: &P) -> std::cmp::Ordering {
        self.inner.compare(left, right)
    }

    fn priority(&self, element: &E) -> P {
        self.inner.priority(element)
    }
}

impl<E, Inner> HeapObserver<E> for Indexed<E, Inner>
where
    E: Eq + Hash + Clone,
{
    fn moved(&mut self, element: &E, slot: usize) {
        self.index.insert(element.clone(), slot);
    }

    fn removed(&mut self, element: &E, _slot: usize) {
        self.index.remove(element);
    }

    fn cleared(&mut self) {
        self.index.clear();
    }
}
