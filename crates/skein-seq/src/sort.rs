//! In-place unstable sort over fixed-width byte chunks.
//!
//! `slice::sort_unstable_by` needs a typed element; a type-erased container
//! has only a byte region and a width. This module sorts that region
//! directly: quicksort with a Hoare partition and median-of-three pivot,
//! recursing into the smaller side to bound stack depth, with a
//! hole-shifting insertion sort below [`INSERTION_LEN`]. All element moves
//! are `copy_within` / `swap_with_slice` on disjoint ranges — safe code
//! throughout.

use std::cmp::Ordering;

use smallvec::SmallVec;

/// Runs at or below this many elements are insertion-sorted.
const INSERTION_LEN: usize = 16;

/// Elements up to this many bytes keep the pivot/hole scratch inline.
const INLINE_SCRATCH: usize = 16;

/// Scratch copy of one element. Spills to the heap for wide elements.
type Scratch = SmallVec<[u8; INLINE_SCRATCH]>;

/// Sort `bytes` as a sequence of `size`-byte chunks under `cmp`.
///
/// `bytes.len()` must be a multiple of `size`. Not stable.
pub(crate) fn sort_chunks<F>(bytes: &mut [u8], size: usize, mut cmp: F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    debug_assert_eq!(bytes.len() % size, 0);
    let len = bytes.len() / size;
    if len > 1 {
        quicksort(bytes, size, 0, len, &mut cmp);
    }
}

fn chunk(bytes: &[u8], size: usize, i: usize) -> &[u8] {
    &bytes[i * size..(i + 1) * size]
}

fn swap_chunks(bytes: &mut [u8], size: usize, i: usize, j: usize) {
    if i == j {
        return;
    }
    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    let (head, tail) = bytes.split_at_mut(hi * size);
    head[lo * size..(lo + 1) * size].swap_with_slice(&mut tail[..size]);
}

fn quicksort<F>(bytes: &mut [u8], size: usize, mut lo: usize, mut hi: usize, cmp: &mut F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    while hi - lo > INSERTION_LEN {
        let split = partition(bytes, size, lo, hi, cmp);
        // Recurse into the smaller side, iterate on the larger: stack
        // depth stays O(log n) regardless of pivot quality.
        if split - lo < hi - (split + 1) {
            quicksort(bytes, size, lo, split + 1, cmp);
            lo = split + 1;
        } else {
            quicksort(bytes, size, split + 1, hi, cmp);
            hi = split + 1;
        }
    }
    insertion_sort(bytes, size, lo, hi, cmp);
}

/// Hoare partition of `[lo, hi)` around a median-of-three pivot.
///
/// Returns `split` with `lo <= split <= hi - 2`, such that every element
/// of `[lo, split]` compares `<=` the pivot and every element of
/// `[split + 1, hi)` compares `>=`. Both sides are non-empty, so the
/// caller always makes progress. Requires `hi - lo >= 2`.
fn partition<F>(bytes: &mut [u8], size: usize, lo: usize, hi: usize, cmp: &mut F) -> usize
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    median_to_front(bytes, size, lo, hi, cmp);
    // The pivot's slot moves during partitioning, so compare against a copy.
    let pivot = Scratch::from_slice(chunk(bytes, size, lo));
    let mut i = lo;
    let mut j = hi - 1;
    loop {
        while cmp(chunk(bytes, size, i), &pivot) == Ordering::Less {
            i += 1;
        }
        while cmp(chunk(bytes, size, j), &pivot) == Ordering::Greater {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        swap_chunks(bytes, size, i, j);
        i += 1;
        j -= 1;
    }
}

/// Place the median of the first, middle, and last elements of `[lo, hi)`
/// at `lo`, where `partition` reads its pivot.
fn median_to_front<F>(bytes: &mut [u8], size: usize, lo: usize, hi: usize, cmp: &mut F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    let mid = lo + (hi - lo) / 2;
    let last = hi - 1;
    if cmp(chunk(bytes, size, mid), chunk(bytes, size, lo)) == Ordering::Less {
        swap_chunks(bytes, size, mid, lo);
    }
    if cmp(chunk(bytes, size, last), chunk(bytes, size, lo)) == Ordering::Less {
        swap_chunks(bytes, size, last, lo);
    }
    if cmp(chunk(bytes, size, last), chunk(bytes, size, mid)) == Ordering::Less {
        swap_chunks(bytes, size, last, mid);
    }
    swap_chunks(bytes, size, lo, mid);
}

/// Hole-shifting insertion sort of `[lo, hi)`: the out-of-place element is
/// copied to scratch once, the run shifts over it, and it drops into the
/// hole — one copy per shifted element instead of one swap.
fn insertion_sort<F>(bytes: &mut [u8], size: usize, lo: usize, hi: usize, cmp: &mut F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    let mut hole: Scratch = SmallVec::with_capacity(size);
    for i in (lo + 1)..hi {
        if cmp(chunk(bytes, size, i), chunk(bytes, size, i - 1)) != Ordering::Less {
            continue;
        }
        hole.clear();
        hole.extend_from_slice(chunk(bytes, size, i));
        let mut j = i;
        while j > lo && cmp(chunk(bytes, size, j - 1), &hole) == Ordering::Greater {
            bytes.copy_within((j - 1) * size..j * size, j * size);
            j -= 1;
        }
        bytes[j * size..(j + 1) * size].copy_from_slice(&hole);
    }
}
