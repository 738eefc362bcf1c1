//! Capacity growth policy shared by all skein containers.
//!
//! Containers start at whatever capacity the caller chose (zero is legal
//! and defers the first allocation) and grow by doubling. A container that
//! has never allocated jumps straight to [`FIRST_ALLOCATION`] slots.
//! Doubling gives amortised O(1) cost per append across repeated growth.

/// Capacity after the first growth of a zero-capacity container, in slots.
pub const FIRST_ALLOCATION: usize = 4;

/// Next capacity after `current`, in slots.
///
/// Zero grows to [`FIRST_ALLOCATION`]; anything else doubles. The result
/// is always strictly greater than `current`.
///
/// # Panics
///
/// Panics if doubling overflows `usize`.
pub fn next_capacity(current: usize) -> usize {
    if current == 0 {
        FIRST_ALLOCATION
    } else {
        current.checked_mul(2).expect("capacity overflows usize")
    }
}
