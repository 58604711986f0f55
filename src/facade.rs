//! Public convenience queues composing the generic engine with a specific
//! provider: a plain, duplicate-tolerant queue and a unique-elements
//! updateable queue.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::Error;
use crate::heap::{Entries, Heap};
use crate::indexed::Indexed;
use crate::provider::{PriorityProvider, Provider};

/// A duplicate-tolerant priority queue: elements are ranked by the
/// provider but not tracked by identity, so the same element may be
/// enqueued more than once and arbitrary-slot removal/update is not
/// exposed (use [`UniquePriorityQueue`] for that).
pub struct PriorityQueue<E, P, Pr> {
    heap: Heap<E, P, Pr>,
}

impl<E, P, Pr> PriorityQueue<E, P, Pr>
where
    Pr: Provider<E, P>,
{
    pub fn new(provider: Pr) -> Self {
        Self { heap: Heap::new(provider) }
    }

    /// Builds a queue from an existing collection in O(n) via bulk
    /// heapify, rather than O(n log n) one-at-a-time insertion.
    pub fn from_iter(provider: Pr, items: impl IntoIterator<Item = E>) -> Self {
        Self { heap: Heap::heapify(provider, items) }
    }

    pub fn enqueue(&mut self, element: E) {
        self.heap.add(element);
    }

    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the queue holds no elements.
    pub fn peek_min(&self) -> Result<&E, Error> {
        self.heap.peek_min()
    }

    pub fn try_peek_min(&self) -> Option<&E> {
        self.heap.try_peek_min()
    }

    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the queue holds no elements.
    pub fn remove_min(&mut self) -> Result<E, Error> {
        self.heap.remove_min()
    }

    pub fn try_remove_min(&mut self) -> Option<E> {
        self.heap.try_remove_min()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.heap.count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn entries(&self) -> Entries {
        self.heap.entries()
    }

    /// Advances `cursor` against this queue. See [`Entries::next`].
    pub fn advance<'q>(&'q self, cursor: &mut Entries) -> Option<Result<&'q E, Error>> {
        cursor.next(&self.heap)
    }
}

/// A unique-elements, updateable priority queue: element identity (per
/// `E`'s `Eq`/`Hash`) is tracked via an internal index, enabling
/// remove-by-element and update-by-element in O(log n).
pub struct UniquePriorityQueue<E, P, Inner> {
    heap: Heap<E, P, Indexed<E, Inner>>,
}

impl<E, P, Inner> UniquePriorityQueue<E, P, Inner>
where
    E: Eq + Hash + Clone,
    Inner: PriorityProvider<E, P>,
{
    pub fn new(inner: Inner) -> Self {
        Self { heap: Heap::new(Indexed::new(inner)) }
    }

    /// Builds a queue from an existing collection in O(n) via bulk
    /// heapify, rather than O(n log n) one-at-a-time insertion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Duplicate`] if `items` contains two `Eq`-equal
    /// elements; bulk-heapifying a duplicate would otherwise let the index
    /// silently collapse onto one slot while the backing buffer kept both,
    /// breaking the `count() == index.len()` invariant.
    pub fn from_iter(inner: Inner, items: impl IntoIterator<Item = E>) -> Result<Self, Error> {
        let buf: Vec<E> = items.into_iter().collect();
        let mut seen = HashSet::with_capacity(buf.len());
        for item in &buf {
            if !seen.insert(item) {
                return Err(Error::Duplicate);
            }
        }
        Ok(Self { heap: Heap::heapify(Indexed::new(inner), buf) })
    }

    #[inline]
    pub fn contains(&self, element: &E) -> bool {
        self.heap.provider().contains(element)
    }

    /// Inserts `element`. Fails with [`Error::Duplicate`] if an equal
    /// element is already present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Duplicate`] if an equal element is already present.
    pub fn enqueue(&mut self, element: E) -> Result<(), Error> {
        if self.contains(&element) {
            return Err(Error::Duplicate);
        }
        self.heap.add(element);
        Ok(())
    }

    /// Non-throwing form of [`UniquePriorityQueue::enqueue`].
    pub fn try_enqueue(&mut self, element: E) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.heap.add(element);
        true
    }

    /// Re-installs `element` at its existing slot and re-heapifies. Fails
    /// with [`Error::NotPresent`] if no equal element is present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotPresent`] if no equal element is present.
    ///
    /// # Panics
    ///
    /// Never: the slot looked up from the index is always a valid slot for
    /// [`Heap::update_at`].
    pub fn update(&mut self, element: E) -> Result<(), Error> {
        let slot = self.heap.provider().slot_of(&element).ok_or(Error::NotPresent)?;
        self.heap.update_at(slot, element).expect("slot read from the index is always valid");
        Ok(())
    }

    /// Non-throwing form of [`UniquePriorityQueue::update`].
    ///
    /// # Panics
    ///
    /// Never: the slot looked up from the index is always a valid slot
    /// for [`Heap::update_at`].
    pub fn try_update(&mut self, element: E) -> bool {
        match self.heap.provider().slot_of(&element) {
            Some(slot) => {
                self.heap.update_at(slot, element).expect("slot read from the index is always valid");
                true
            }
            None => false,
        }
    }

    /// Updates `element` if present, otherwise enqueues it.
    ///
    /// # Panics
    ///
    /// Never: the slot looked up from the index is always a valid slot
    /// for [`Heap::update_at`].
    pub fn update_or_enqueue(&mut self, element: E) {
        if let Some(slot) = self.heap.provider().slot_of(&element) {
            self.heap.update_at(slot, element).expect("slot read from the index is always valid");
        } else {
            self.heap.add(element);
        }
    }

    /// Removes `element`. Fails with [`Error::NotPresent`] if absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotPresent`] if no equal element is present.
    pub fn remove(&mut self, element: &E) -> Result<E, Error> {
        let slot = self.heap.provider().slot_of(element).ok_or(Error::NotPresent)?;
        self.heap.remove_at(slot)
    }

    /// Non-throwing form of [`UniquePriorityQueue::remove`].
    ///
    /// # Panics
    ///
    /// Never: the slot looked up from the index is always a valid slot
    /// for [`Heap::remove_at`].
    pub fn try_remove(&mut self, element: &E) -> bool {
        match self.heap.provider().slot_of(element) {
            Some(slot) => {
                self.heap.remove_at(slot).expect("slot read from the index is always valid");
                true
            }
            None => false,
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the queue holds no elements.
    pub fn peek_min(&self) -> Result<&E, Error> {
        self.heap.peek_min()
    }

    pub fn try_peek_min(&self) -> Option<&E> {
        self.heap.try_peek_min()
    }

    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the queue holds no elements.
    pub fn remove_min(&mut self) -> Result<E, Error> {
        self.heap.remove_min()
    }

    pub fn try_remove_min(&mut self) -> Option<E> {
        self.heap.try_remove_min()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.heap.count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn entries(&self) -> Entries {
        self.heap.entries()
    }

    /// Advances `cursor` against this queue. See [`Entries::next`].
    pub fn advance<'q>(&'q self, cursor: &mut Entries) -> Option<Result<&'q E, Error>> {
        cursor.next(&self.heap)
    }
}
