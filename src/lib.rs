//! # d-ary Heap Priority Queue
//!
//! A generic, indexed, updateable d-ary (d=4) min-heap priority queue.
//!
//! The core is the [`Heap`] engine together with the [`PriorityProvider`] /
//! [`HeapObserver`] protocol a caller implements to (a) define priority
//! ordering and (b) keep an external element→slot index consistent with
//! every heap movement — including the displacement victim's sift after a
//! removal. Two façades, [`PriorityQueue`] and [`UniquePriorityQueue`],
//! compose the engine with a stock provider for the common cases.
//!
//! ## Features
//!
//! - **O(log₄ n) insert, remove-min, arbitrary-slot remove, and
//!   arbitrary-slot priority update** — the properties a textbook binary
//!   heap doesn't give you without an index.
//! - **Callback-driven index maintenance**: the engine never hand-rolls an
//!   index; any provider that implements [`HeapObserver`] gets to keep
//!   its own bookkeeping in sync, generically and at monomorphized-call
//!   cost (no `dyn` dispatch).
//! - **Version-guarded enumeration**: enumerating the heap while mutating
//!   it fails fast with [`Error::Modified`] rather than silently iterating
//!   over moved-around data.
//!
//! ## Example
//!
//! ```rust
//! use d_ary_heap::{PriorityQueue, MinBy};
//!
//! let mut pq = PriorityQueue::new(MinBy(|x: &i32| *x));
//! pq.enqueue(5);
//! pq.enqueue(3);
//! pq.enqueue(7);
//!
//! assert_eq!(pq.peek_min(), Ok(&3));
//! assert_eq!(pq.remove_min(), Ok(3));
//! ```

#![forbid(unsafe_code)]

mod error;
mod facade;
mod heap;
mod indexed;
mod provider;

pub use error::Error;
pub use facade::{PriorityQueue, UniquePriorityQueue};
pub use heap::{Entries, Heap};
pub use indexed::Indexed;
pub use provider::{HeapObserver, MaxBy, MinBy, PriorityProvider, Provider};
