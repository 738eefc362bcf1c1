//! Element layout arithmetic and capacity policy for the skein containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! [`ElemLayout`], the byte-width descriptor that all slot arithmetic
//! flows through, and the [`growth`] module, the capacity policy shared
//! by every skein container.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod growth;
pub mod layout;

pub use layout::ElemLayout;
