//! Skein: growable, contiguously-stored sequence containers.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the skein sub-crates. For most users, adding `skein` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use skein::prelude::*;
//!
//! // A type-erased sequence of 4-byte elements, growing from capacity 0.
//! let mut seq = RawSeq::new(ElemLayout::of::<u32>());
//! for v in [5u32, 3, 1, 4, 2] {
//!     seq.push(&v.to_ne_bytes());
//! }
//! assert_eq!(seq.len(), 5);
//!
//! let by_value = |a: &[u8], b: &[u8]| {
//!     u32::from_ne_bytes(a.try_into().unwrap())
//!         .cmp(&u32::from_ne_bytes(b.try_into().unwrap()))
//! };
//! seq.sort_by(by_value);
//! assert_eq!(seq.elem(0), &1u32.to_ne_bytes()[..]);
//!
//! let pos = seq.find_sorted_by(&3u32.to_ne_bytes(), 0, by_value);
//! assert_eq!(pos, Some(2));
//!
//! // The generic counterpart, when the element type is known.
//! let mut typed: Seq<u32> = Seq::new();
//! for v in [5u32, 3, 1, 4, 2] {
//!     typed.push(v);
//! }
//! typed.sort_by(|a, b| a.cmp(b));
//! assert_eq!(typed.as_slice(), &[1, 2, 3, 4, 5]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`seq`] | `skein-seq` | [`RawSeq`](seq::RawSeq), [`Seq`](seq::Seq), the drop-hook type |
//! | [`types`] | `skein-core` | [`ElemLayout`](types::ElemLayout), the capacity growth policy |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Element layout arithmetic and the capacity growth policy (`skein-core`).
pub use skein_core as types;

/// The sequence containers (`skein-seq`).
///
/// [`seq::RawSeq`] is the type-erased container; [`seq::Seq`] is the
/// generic counterpart. Both are also available in the [`prelude`].
pub use skein_seq as seq;

/// Common imports for typical skein usage.
///
/// ```rust
/// use skein::prelude::*;
/// ```
pub mod prelude {
    pub use skein_core::ElemLayout;
    pub use skein_seq::{DropFn, RawSeq, Seq};
}
