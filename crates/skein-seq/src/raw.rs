//! The type-erased sequence container.
//!
//! [`RawSeq`] stores elements of one fixed byte width contiguously in a
//! fully-allocated, zero-initialised `Vec<u8>`, with a logical length
//! tracked separately from the backed capacity. Positional insert and
//! remove shift the tail with overlap-safe copies; growth doubles the
//! backing region in place, preserving every live element at its offset.

use std::cmp::Ordering;
use std::fmt;

use skein_core::{growth, ElemLayout};

use crate::sort;

/// Cleanup capability invoked on an element's bytes immediately before the
/// element is removed from the container.
///
/// The hook receives the element in place, before any shifting, so it can
/// release whatever resources the bytes reference (say, a pointer-sized
/// key into some external table).
pub type DropFn = Box<dyn FnMut(&mut [u8])>;

/// A homogeneous, randomly-indexable, growable container of fixed-width
/// opaque elements, stored contiguously.
///
/// Slots at indices `>= len()` are backed by storage but logically absent;
/// they are kept zeroed and no operation may read or write them. Capacity
/// never shrinks for the container's lifetime.
///
/// # Disposal contract
///
/// Dropping a `RawSeq` releases the backing storage only. The drop hook
/// supplied at construction is **not** invoked on remaining elements — a
/// container whose elements own resources must be drained first via
/// [`clear`](Self::clear) or repeated [`remove`](Self::remove), both of
/// which invoke the hook per removed element.
pub struct RawSeq {
    layout: ElemLayout,
    /// Backing storage. Always exactly `layout.span(cap)` bytes.
    bytes: Vec<u8>,
    /// Count of logically present elements.
    len: usize,
    /// Number of slots backed by storage.
    cap: usize,
    drop_fn: Option<DropFn>,
}

impl RawSeq {
    /// Create an empty container with zero capacity.
    ///
    /// The first allocation is deferred to the first growth event.
    pub fn new(layout: ElemLayout) -> Self {
        Self::with_capacity(layout, 0)
    }

    /// Create an empty container with `slots` slots pre-allocated.
    pub fn with_capacity(layout: ElemLayout, slots: usize) -> Self {
        Self {
            layout,
            bytes: vec![0; layout.span(slots)],
            len: 0,
            cap: slots,
            drop_fn: None,
        }
    }

    /// Create an empty container with a drop hook.
    ///
    /// The hook runs once per element removed through [`remove`](Self::remove)
    /// or [`clear`](Self::clear) — and at no other time. See the type-level
    /// disposal contract.
    pub fn with_drop_fn(layout: ElemLayout, slots: usize, drop_fn: DropFn) -> Self {
        Self {
            drop_fn: Some(drop_fn),
            ..Self::with_capacity(layout, slots)
        }
    }

    /// The element layout this container was constructed with.
    pub fn layout(&self) -> ElemLayout {
        self.layout
    }

    /// Count of logically present elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots currently backed by storage.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Borrow the element at `position`.
    ///
    /// The borrow is valid until the next `&mut self` operation; the borrow
    /// checker enforces this.
    ///
    /// # Panics
    ///
    /// Panics unless `position < len()`.
    pub fn elem(&self, position: usize) -> &[u8] {
        self.check_position(position);
        let start = self.layout.offset(position);
        &self.bytes[start..start + self.layout.size()]
    }

    /// Mutably borrow the element at `position`.
    ///
    /// # Panics
    ///
    /// Panics unless `position < len()`.
    pub fn elem_mut(&mut self, position: usize) -> &mut [u8] {
        self.check_position(position);
        let start = self.layout.offset(position);
        let size = self.layout.size();
        &mut self.bytes[start..start + size]
    }

    /// Overwrite the element at `position` with `elem`.
    ///
    /// The previous bytes are discarded without running the drop hook —
    /// the caller is responsible for any resources they held.
    ///
    /// # Panics
    ///
    /// Panics unless `position < len()` and `elem` is exactly one element
    /// wide.
    pub fn replace(&mut self, position: usize, elem: &[u8]) {
        self.check_width(elem);
        self.elem_mut(position).copy_from_slice(elem);
    }

    /// Insert `elem` at `position`, shifting elements at `[position, len())`
    /// one slot toward higher indices.
    ///
    /// Grows the backing storage first when the container is full. Relative
    /// order of all other elements is preserved.
    ///
    /// # Panics
    ///
    /// Panics unless `position <= len()` and `elem` is exactly one element
    /// wide.
    pub fn insert(&mut self, position: usize, elem: &[u8]) {
        self.check_width(elem);
        assert!(
            position <= self.len,
            "insert position {position} out of bounds (len {})",
            self.len
        );
        if self.len == self.cap {
            self.grow();
        }
        let size = self.layout.size();
        let start = self.layout.offset(position);
        let used = self.layout.span(self.len);
        // Overlap-safe shift to open the hole.
        self.bytes.copy_within(start..used, start + size);
        self.bytes[start..start + size].copy_from_slice(elem);
        self.len += 1;
    }

    /// Append `elem` after the last element.
    ///
    /// Equivalent to `insert(len(), elem)` without the shift.
    ///
    /// # Panics
    ///
    /// Panics unless `elem` is exactly one element wide.
    pub fn push(&mut self, elem: &[u8]) {
        self.check_width(elem);
        if self.len == self.cap {
            self.grow();
        }
        let start = self.layout.offset(self.len);
        self.bytes[start..start + self.layout.size()].copy_from_slice(elem);
        self.len += 1;
    }

    /// Remove the element at `position`, shifting elements at
    /// `(position, len())` one slot toward lower indices.
    ///
    /// The drop hook, if one was supplied, runs on the element's bytes in
    /// place before the shift. Capacity is unchanged; the vacated slot is
    /// re-zeroed.
    ///
    /// # Panics
    ///
    /// Panics unless `position < len()`.
    pub fn remove(&mut self, position: usize) {
        self.check_position(position);
        let size = self.layout.size();
        let start = self.layout.offset(position);
        if let Some(hook) = self.drop_fn.as_mut() {
            hook(&mut self.bytes[start..start + size]);
        }
        let used = self.layout.span(self.len);
        self.bytes.copy_within(start + size..used, start);
        self.len -= 1;
        let tail = self.layout.offset(self.len);
        self.bytes[tail..tail + size].fill(0);
    }

    /// Remove every element, invoking the drop hook once per element in
    /// index order.
    ///
    /// This is the drain operation the disposal contract calls for.
    /// Capacity is retained.
    pub fn clear(&mut self) {
        let size = self.layout.size();
        if let Some(hook) = self.drop_fn.as_mut() {
            for position in 0..self.len {
                let start = self.layout.offset(position);
                hook(&mut self.bytes[start..start + size]);
            }
        }
        let used = self.layout.span(self.len);
        self.bytes[..used].fill(0);
        self.len = 0;
    }

    /// Reorder the elements into non-decreasing order under `cmp`.
    ///
    /// `cmp` must be a total order over element byte blocks. The sort is
    /// not stable.
    pub fn sort_by<F>(&mut self, cmp: F)
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        let used = self.layout.span(self.len);
        sort::sort_chunks(&mut self.bytes[..used], self.layout.size(), cmp);
    }

    /// Linear search over `[start, len())` for the first element whose
    /// bytes exactly equal `key`.
    ///
    /// Equality here is raw byte equality over the full element width, not
    /// a comparator — the deliberate counterpart to
    /// [`find_sorted_by`](Self::find_sorted_by), which compares through the
    /// caller's ordering. Returns `None` when no element matches.
    ///
    /// # Panics
    ///
    /// Panics unless `start <= len()` and `key` is exactly one element wide.
    pub fn find(&self, key: &[u8], start: usize) -> Option<usize> {
        self.check_width(key);
        self.check_start(start);
        (start..self.len).find(|&i| self.elem(i) == key)
    }

    /// Binary search over `[start, len())`, which must already be sorted
    /// under `cmp`, for an element comparing equal to `key`.
    ///
    /// Returns the position of *some* equal element — with duplicates, which
    /// one is unspecified — or `None` when no element compares equal.
    ///
    /// # Panics
    ///
    /// Panics unless `start <= len()` and `key` is exactly one element wide.
    pub fn find_sorted_by<F>(&self, key: &[u8], start: usize, mut cmp: F) -> Option<usize>
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        self.check_width(key);
        self.check_start(start);
        let mut lo = start;
        let mut hi = self.len;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match cmp(self.elem(mid), key) {
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
                Ordering::Equal => return Some(mid),
            }
        }
        None
    }

    /// Invoke `f` once per element, in index order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&[u8]),
    {
        for elem in self.iter() {
            f(elem);
        }
    }

    /// Iterate over the elements as byte blocks, in index order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.bytes[..self.layout.span(self.len)]
            .chunks_exact(self.layout.size())
    }

    /// Double the backed capacity (first growth goes to
    /// [`growth::FIRST_ALLOCATION`] slots), preserving live elements at
    /// their offsets.
    fn grow(&mut self) {
        let next = growth::next_capacity(self.cap);
        self.bytes.resize(self.layout.span(next), 0);
        self.cap = next;
    }

    fn check_position(&self, position: usize) {
        assert!(
            position < self.len,
            "position {position} out of bounds (len {})",
            self.len
        );
    }

    fn check_start(&self, start: usize) {
        assert!(
            start <= self.len,
            "search start {start} out of bounds (len {})",
            self.len
        );
    }

    fn check_width(&self, elem: &[u8]) {
        assert_eq!(
            elem.len(),
            self.layout.size(),
            "element is {} bytes, layout is {}",
            elem.len(),
            self.layout
        );
    }
}

impl fmt::Debug for RawSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawSeq")
            .field("layout", &self.layout)
            .field("len", &self.len)
            .field("capacity", &self.cap)
            .field("drop_fn", &self.drop_fn.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u32_seq() -> RawSeq {
        RawSeq::new(ElemLayout::of::<u32>())
    }

    fn push_u32(seq: &mut RawSeq, v: u32) {
        seq.push(&v.to_ne_bytes());
    }

    fn read_u32(seq: &RawSeq, i: usize) -> u32 {
        u32::from_ne_bytes(seq.elem(i).try_into().unwrap())
    }

    fn cmp_u32(a: &[u8], b: &[u8]) -> Ordering {
        let a = u32::from_ne_bytes(a.try_into().unwrap());
        let b = u32::from_ne_bytes(b.try_into().unwrap());
        a.cmp(&b)
    }

    #[test]
    fn starts_empty_with_requested_capacity() {
        let seq = RawSeq::with_capacity(ElemLayout::new(8), 6);
        assert_eq!(seq.len(), 0);
        assert!(seq.is_empty());
        assert_eq!(seq.capacity(), 6);
        assert_eq!(seq.memory_bytes(), 48);
    }

    #[test]
    fn push_appends_and_tracks_length() {
        let mut seq = u32_seq();
        push_u32(&mut seq, 7);
        push_u32(&mut seq, 9);
        assert_eq!(seq.len(), 2);
        assert_eq!(read_u32(&seq, 0), 7);
        assert_eq!(read_u32(&seq, 1), 9);
    }

    #[test]
    fn growth_from_zero_capacity_follows_policy() {
        let mut seq = u32_seq();
        assert_eq!(seq.capacity(), 0);
        for v in 1..=10u32 {
            push_u32(&mut seq, v);
        }
        // 0 -> 4 -> 8 -> 16 over ten appends.
        assert_eq!(seq.capacity(), 16);
        for i in 0..10 {
            assert_eq!(read_u32(&seq, i), i as u32 + 1);
        }
    }

    #[test]
    fn insert_shifts_tail_up() {
        let mut seq = u32_seq();
        for v in [10u32, 20, 30] {
            push_u32(&mut seq, v);
        }
        seq.insert(1, &15u32.to_ne_bytes());
        let collected: Vec<u32> = (0..seq.len()).map(|i| read_u32(&seq, i)).collect();
        assert_eq!(collected, vec![10, 15, 20, 30]);
    }

    #[test]
    fn insert_at_len_is_append() {
        let mut seq = u32_seq();
        push_u32(&mut seq, 1);
        seq.insert(1, &2u32.to_ne_bytes());
        assert_eq!(seq.len(), 2);
        assert_eq!(read_u32(&seq, 1), 2);
    }

    #[test]
    fn remove_shifts_tail_down_and_keeps_capacity() {
        let mut seq = u32_seq();
        for v in [1u32, 2, 3, 4] {
            push_u32(&mut seq, v);
        }
        let cap = seq.capacity();
        seq.remove(1);
        let collected: Vec<u32> = (0..seq.len()).map(|i| read_u32(&seq, i)).collect();
        assert_eq!(collected, vec![1, 3, 4]);
        assert_eq!(seq.capacity(), cap);
    }

    #[test]
    fn replace_overwrites_in_place() {
        let mut seq = u32_seq();
        for v in [1u32, 2, 3] {
            push_u32(&mut seq, v);
        }
        seq.replace(1, &99u32.to_ne_bytes());
        assert_eq!(read_u32(&seq, 1), 99);
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn sort_by_orders_elements() {
        let mut seq = u32_seq();
        for v in [5u32, 3, 1, 4, 2] {
            push_u32(&mut seq, v);
        }
        seq.sort_by(cmp_u32);
        let collected: Vec<u32> = (0..seq.len()).map(|i| read_u32(&seq, i)).collect();
        assert_eq!(collected, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn find_is_byte_exact_from_start_index() {
        let mut seq = u32_seq();
        for v in [7u32, 8, 7, 9] {
            push_u32(&mut seq, v);
        }
        assert_eq!(seq.find(&7u32.to_ne_bytes(), 0), Some(0));
        assert_eq!(seq.find(&7u32.to_ne_bytes(), 1), Some(2));
        assert_eq!(seq.find(&42u32.to_ne_bytes(), 0), None);
        assert_eq!(seq.find(&7u32.to_ne_bytes(), 4), None);
    }

    #[test]
    fn find_sorted_by_hits_and_misses() {
        let mut seq = u32_seq();
        for v in [1u32, 3, 5, 7, 9] {
            push_u32(&mut seq, v);
        }
        let hit = seq.find_sorted_by(&5u32.to_ne_bytes(), 0, cmp_u32);
        assert_eq!(hit, Some(2));
        assert_eq!(seq.find_sorted_by(&4u32.to_ne_bytes(), 0, cmp_u32), None);
        // Restricting the range excludes elements before `start`.
        assert_eq!(seq.find_sorted_by(&1u32.to_ne_bytes(), 1, cmp_u32), None);
    }

    #[test]
    fn find_sorted_by_on_duplicates_returns_some_match() {
        let mut seq = u32_seq();
        for v in [1u32, 4, 4, 4, 9] {
            push_u32(&mut seq, v);
        }
        let pos = seq
            .find_sorted_by(&4u32.to_ne_bytes(), 0, cmp_u32)
            .expect("key present");
        assert_eq!(read_u32(&seq, pos), 4);
    }

    #[test]
    fn iter_and_for_each_visit_in_index_order() {
        let mut seq = u32_seq();
        for v in [2u32, 4, 6] {
            push_u32(&mut seq, v);
        }
        let via_iter: Vec<u32> = seq
            .iter()
            .map(|b| u32::from_ne_bytes(b.try_into().unwrap()))
            .collect();
        assert_eq!(via_iter, vec![2, 4, 6]);

        let mut via_for_each = Vec::new();
        seq.for_each(|b| via_for_each.push(u32::from_ne_bytes(b.try_into().unwrap())));
        assert_eq!(via_for_each, vec![2, 4, 6]);
    }

    #[test]
    fn clear_empties_but_keeps_capacity() {
        let mut seq = u32_seq();
        for v in 0..20u32 {
            push_u32(&mut seq, v);
        }
        let cap = seq.capacity();
        seq.clear();
        assert!(seq.is_empty());
        assert_eq!(seq.capacity(), cap);
        push_u32(&mut seq, 5);
        assert_eq!(read_u32(&seq, 0), 5);
    }

    #[test]
    fn elem_mut_writes_through() {
        let mut seq = u32_seq();
        push_u32(&mut seq, 1);
        seq.elem_mut(0).copy_from_slice(&8u32.to_ne_bytes());
        assert_eq!(read_u32(&seq, 0), 8);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn elem_past_len_panics() {
        let mut seq = RawSeq::with_capacity(ElemLayout::of::<u32>(), 8);
        push_u32(&mut seq, 1);
        // Slot 1 is backed but logically absent — strict length bound.
        let _ = seq.elem(1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn replace_past_len_panics() {
        let mut seq = RawSeq::with_capacity(ElemLayout::of::<u32>(), 8);
        push_u32(&mut seq, 1);
        seq.replace(1, &2u32.to_ne_bytes());
    }

    #[test]
    #[should_panic(expected = "insert position")]
    fn insert_past_len_panics() {
        let mut seq = u32_seq();
        seq.insert(1, &2u32.to_ne_bytes());
    }

    #[test]
    #[should_panic(expected = "element is 3 bytes")]
    fn width_mismatch_panics() {
        let mut seq = u32_seq();
        seq.push(&[1, 2, 3]);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn growth_never_loses_elements(values in proptest::collection::vec(any::<u32>(), 0..200)) {
                let mut seq = u32_seq();
                for &v in &values {
                    push_u32(&mut seq, v);
                }
                prop_assert_eq!(seq.len(), values.len());
                for (i, &v) in values.iter().enumerate() {
                    prop_assert_eq!(read_u32(&seq, i), v);
                }
            }

            #[test]
            fn insert_then_remove_is_identity(
                values in proptest::collection::vec(any::<u32>(), 1..50),
                position in 0usize..50,
                inserted in any::<u32>(),
            ) {
                let mut seq = u32_seq();
                for &v in &values {
                    push_u32(&mut seq, v);
                }
                let position = position % (values.len() + 1);
                seq.insert(position, &inserted.to_ne_bytes());
                seq.remove(position);
                prop_assert_eq!(seq.len(), values.len());
                for (i, &v) in values.iter().enumerate() {
                    prop_assert_eq!(read_u32(&seq, i), v);
                }
            }

            #[test]
            fn sorted_search_agrees_with_linear_scan(
                mut values in proptest::collection::vec(any::<u32>(), 0..100),
                key in any::<u32>(),
            ) {
                values.sort_unstable();
                let mut seq = u32_seq();
                for &v in &values {
                    push_u32(&mut seq, v);
                }
                let found = seq.find_sorted_by(&key.to_ne_bytes(), 0, cmp_u32);
                match found {
                    Some(i) => prop_assert_eq!(read_u32(&seq, i), key),
                    None => prop_assert!(!values.contains(&key)),
                }
            }
        }
    }
}
