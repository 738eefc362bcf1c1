//! Growable, contiguously-stored sequence containers.
//!
//! Two containers with the same operation contracts and the same capacity
//! policy (zero-capacity start legal, first growth to 4 slots, doubling
//! thereafter):
//!
//! - [`RawSeq`] — type-erased: elements are opaque fixed-width byte blocks
//!   described by an [`ElemLayout`](skein_core::ElemLayout). Callers supply
//!   comparison and cleanup capabilities per element type.
//! - [`Seq`] — the generic counterpart for callers whose element type is
//!   known at compile time. Eliminates byte-width arithmetic (and the
//!   size-mismatch bugs that come with it) while keeping the contracts.
//!
//! # Ownership and disposal
//!
//! Dropping a [`RawSeq`] releases the backing storage and **nothing else**:
//! the element drop hook is never invoked implicitly. A container whose
//! elements own external resources must be drained first — [`RawSeq::clear`]
//! or repeated [`RawSeq::remove`] invoke the hook once per removed element.
//! Skipping the drain leaks whatever the remaining elements referenced.
//! [`Seq`] owns real values and drops them normally.
//!
//! # Borrows and mutation
//!
//! References returned by element accessors borrow the container. Growth
//! reallocates storage, so any mutation requires `&mut self` and the borrow
//! checker rejects element borrows held across it — the invalidation rule
//! is enforced at compile time rather than documented and hoped for.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod raw;
mod sort;
pub mod typed;

pub use raw::{DropFn, RawSeq};
pub use typed::Seq;
