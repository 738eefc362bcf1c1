//! Fixed element widths and slot offset arithmetic.
//!
//! [`ElemLayout`] is the single place byte offsets are computed. Containers
//! never multiply an index by a width themselves — they ask the layout,
//! which checks the arithmetic.

use std::fmt;

/// Byte width of one container element, fixed for the container's lifetime.
///
/// A layout is validated at construction: zero-width elements are rejected
/// (a container of nothing is a caller bug, not a useful degenerate case).
/// All offset arithmetic is checked — an index or count large enough to
/// overflow `usize` is treated as exhaustion and panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElemLayout {
    size: usize,
}

impl ElemLayout {
    /// Create a layout for elements of `size` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "element size must be non-zero");
        Self { size }
    }

    /// Layout for elements of type `T`, using `size_of::<T>()`.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    pub fn of<T>() -> Self {
        Self::new(std::mem::size_of::<T>())
    }

    /// Width of one element in bytes.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Byte offset of the slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index * size` overflows `usize`.
    pub fn offset(&self, index: usize) -> usize {
        index
            .checked_mul(self.size)
            .expect("slot offset overflows usize")
    }

    /// Byte length of `count` consecutive slots.
    ///
    /// # Panics
    ///
    /// Panics if `count * size` overflows `usize`.
    pub fn span(&self, count: usize) -> usize {
        count
            .checked_mul(self.size)
            .expect("slot span overflows usize")
    }
}

impl fmt::Display for ElemLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B", self.size)
    }
}
