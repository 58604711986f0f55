//! Generic d-ary array-backed heap engine.
//!
//! All positional changes the engine makes — insertion sifts, removal
//! refills, priority-update sifts, bulk heapify — route through a single
//! [`HeapObserver`] notification path so a provider's external index stays
//! consistent with every heap movement, including the displacement victim's
//! sift after a removal.

use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::error::Error;
use crate::provider::Provider;

/// Number of children per node. Shallower trees reduce sift-down depth at
/// the cost of more comparisons per level; `4` is the constant this crate
/// is tuned for.
const D: usize = 4;

/// A generic d-ary min-heap over elements of type `E`, ranked by priorities
/// of type `P` via a caller-supplied [`Provider`].
#[derive(Debug)]
pub struct Heap<E, P, Pr> {
    buf: Vec<E>,
    provider: Pr,
    version: u64,
    suppress_moved: bool,
    _priority: PhantomData<P>,
}

impl<E, P, Pr> Heap<E, P, Pr>
where
    Pr: Provider<E, P>,
{
    /// Creates an empty heap around the given provider.
    pub fn new(provider: Pr) -> Self {
        Self { buf: Vec::new(), provider, version: 0, suppress_moved: false, _priority: PhantomData }
    }

    /// Builds a heap from an arbitrary collection in O(n) using bottom-up
    /// heapify, instead of O(n log n) one-at-a-time insertion.
    ///
    /// Per-element `moved` callbacks are suppressed during the walk; once
    /// the invariant is restored, `moved` fires exactly once for every
    /// element at its final slot.
    pub fn heapify(provider: Pr, items: impl IntoIterator<Item = E>) -> Self {
        let buf: Vec<E> = items.into_iter().collect();
        let len = buf.len();
        let mut heap = Self { buf, provider, version: 1, suppress_moved: false, _priority: PhantomData };
        if len > 1 {
            heap.suppress_moved = true;
            let last_non_leaf = (len - 1) / D;
            for i in (0..=last_non_leaf).rev() {
                heap.sift_down(i);
            }
            heap.suppress_moved = false;
        }
        for i in 0..heap.buf.len() {
            heap.provider.moved(&heap.buf[i], i);
        }
        heap
    }

    /// Current element count.
    #[inline]
    pub fn count(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Read-only access to the provider (e.g. to query an index).
    #[inline]
    pub fn provider(&self) -> &Pr {
        &self.provider
    }

    /// Element currently at `slot`, with no ordering implied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `slot >= self.count()`.
    pub fn peek(&self, slot: usize) -> Result<&E, Error> {
        self.buf.get(slot).ok_or(Error::OutOfRange)
    }

    /// The element with minimum priority.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the heap holds no elements.
    pub fn peek_min(&self) -> Result<&E, Error> {
        self.buf.first().ok_or(Error::Empty)
    }

    /// Non-throwing form of [`Heap::peek_min`].
    pub fn try_peek_min(&self) -> Option<&E> {
        self.buf.first()
    }

    /// Inserts `e`, growing the backing buffer if needed, and restores the
    /// heap invariant with a sift-up from the new tail slot.
    pub fn add(&mut self, e: E) {
        self.bump_version();
        self.buf.push(e);
        let i = self.buf.len() - 1;
        self.emit_moved(i);
        self.sift_up(i);
    }

    /// Removes and returns the minimum-priority element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the heap holds no elements.
    pub fn remove_min(&mut self) -> Result<E, Error> {
        if self.buf.is_empty() {
            return Err(Error::Empty);
        }
        self.remove_at(0)
    }

    /// Non-throwing form of [`Heap::remove_min`].
    pub fn try_remove_min(&mut self) -> Option<E> {
        if self.buf.is_empty() {
            None
        } else {
            self.remove_at(0).ok()
        }
    }

    /// Removes the element at an arbitrary slot. The hole is filled by the
    /// former tail element, which is then re-heapified via a try-up-then-
    /// down pass: the replacement's priority may fall on either side of the
    /// vacated slot's former parent, so a sift-down-only refill would not
    /// be correct for interior slots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `slot >= self.count()`.
    ///
    /// # Panics
    ///
    /// Never: the internal `pop()` is only reached after `slot` has
    /// already been checked against a non-empty buffer.
    pub fn remove_at(&mut self, slot: usize) -> Result<E, Error> {
        if slot >= self.buf.len() {
            return Err(Error::OutOfRange);
        }
        self.bump_version();
        self.provider.removed(&self.buf[slot], slot);
        let last = self.buf.len() - 1;
        if slot == last {
            return Ok(self.buf.pop().expect("checked non-empty above"));
        }
        self.buf.swap(slot, last);
        let victim = self.buf.pop().expect("checked non-empty above");
        self.emit_moved(slot);
        self.try_up_then_down(slot);
        Ok(victim)
    }

    /// Installs `e` at `slot`, then restores the invariant by attempting a
    /// sift-up and, if no upward motion occurred, a sift-down. Exactly one
    /// direction does work.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `slot >= self.count()`.
    pub fn update_at(&mut self, slot: usize, e: E) -> Result<(), Error> {
        if slot >= self.buf.len() {
            return Err(Error::OutOfRange);
        }
        self.bump_version();
        self.buf[slot] = e;
        self.emit_moved(slot);
        self.try_up_then_down(slot);
        Ok(())
    }

    /// Empties the heap. Emits a single `cleared` callback; no per-element
    /// `removed` callbacks are issued.
    pub fn clear(&mut self) {
        self.bump_version();
        self.buf.clear();
        self.provider.cleared();
    }

    /// A lazy, heap-order (not priority-order) cursor over the elements,
    /// guarded by the heap's modification version. The cursor does not
    /// borrow the heap for its lifetime — each [`Entries::next`] call
    /// takes the heap it should read from, so the version check is a
    /// runtime guard rather than something the borrow checker would
    /// already rule out at compile time.
    pub fn entries(&self) -> Entries {
        Entries { version: self.version, idx: 0, failed: false }
    }

    /// Current modification version. Exposed so an [`Entries`] cursor can
    /// be validated against a specific heap.
    #[inline]
    pub(crate) fn version(&self) -> u64 {
        self.version
    }

    fn try_up_then_down(&mut self, slot: usize) {
        if !self.sift_up(slot) {
            self.sift_down(slot);
        }
    }

    fn sift_up(&mut self, mut i: usize) -> bool {
        let mut moved = false;
        while i > 0 {
            let parent = (i - 1) / D;
            if self.higher_priority(i, parent) {
                self.swap_slots(i, parent);
                i = parent;
                moved = true;
            } else {
                break;
            }
        }
        moved
    }

    fn sift_down(&mut self, mut i: usize) -> bool {
        let mut moved = false;
        loop {
            let first = i * D + 1;
            if first >= self.buf.len() {
                break;
            }
            let last = (first + D - 1).min(self.buf.len() - 1);
            let mut best = first;
            for child in (first + 1)..=last {
                if self.higher_priority(child, best) {
                    best = child;
                }
            }
            if self.higher_priority(best, i) {
                self.swap_slots(i, best);
                i = best;
                moved = true;
            } else {
                break;
            }
        }
        moved
    }

    /// `true` if `buf[a]` has strictly lower priority value (i.e. ranks
    /// before) `buf[b]`.
    fn higher_priority(&self, a: usize, b: usize) -> bool {
        let pa = self.provider.priority(&self.buf[a]);
        let pb = self.provider.priority(&self.buf[b]);
        self.provider.compare(&pa, &pb) == Ordering::Less
    }

    fn swap_slots(&mut self, i: usize, j: usize) {
        self.buf.swap(i, j);
        self.emit_moved(i);
        self.emit_moved(j);
    }

    fn emit_moved(&mut self, slot: usize) {
        if !self.suppress_moved {
            self.provider.moved(&self.buf[slot], slot);
        }
    }

    fn bump_version(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

/// Enumerates elements in slot order (0 .. count), not priority order.
/// Snapshots the heap's modification version at creation (see
/// [`Heap::entries`]); any mutation to the heap between creation and a
/// subsequent [`Entries::next`] call invalidates the cursor for the rest
/// of its walk.
pub struct Entries {
    version: u64,
    idx: usize,
    failed: bool,
}

impl Entries {
    /// Advances the cursor against `heap`, failing with [`Error::Modified`]
    /// if `heap` was mutated since this cursor was created (or since the
    /// last call that returned `Modified`).
    pub fn next<'h, E, P, Pr>(&mut self, heap: &'h Heap<E, P, Pr>) -> Option<Result<&'h E, Error>>
    where
        Pr: Provider<E, P>,
    {
        if self.failed {
            return None;
        }
        if heap.version() != self.version {
            self.failed = true;
            return Some(Err(Error::Modified));
        }
        let item = heap.buf.get(self.idx)?;
        self.idx += 1;
        Some(Ok(item))
    }
}
