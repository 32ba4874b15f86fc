//! Comparison sorts and selection.
//!
//! Everything here is parametrized by a strict weak ordering `is_less`; the
//! plain variants use [`PartialOrd`].  Sorting functions return the cursor
//! with its front exhausted.
//!
//! # Examples
//! ```
//! use cursor_core::Cursor;
//! use slice_cursor::cursor_mut;
//! use sort::{nth_element, sort};
//!
//! let mut a = [5, 3, 1, 4, 2];
//! sort(cursor_mut(&mut a));
//! assert_eq!(a, [1, 2, 3, 4, 5]);
//!
//! let mut a = [9, 2, 7, 4, 5, 0];
//! let mut c = cursor_mut(&mut a);
//! c.advance_by(2);
//! let c = nth_element(c);
//! assert_eq!(*c.front(), 4);
//! ```

use cursor_core::{
    Cursor, CursorMut, ForwardCursor, RandomAccessCursor, Window,
};
use heap::{make_heap_by, pop_heap_by, push_heap_by, sort_heap_by};
use merge::inplace_merge_by;
use results::InOut;

/// Ranges at most this long are left to insertion sort.
pub const INSERTION_SORT_THRESHOLD: usize = 16;

/// Unstable sort.
///
/// Quicksort with a median-of-three pivot and three-way partitioning, so
/// runs of equal elements are settled in one pass.  Only the part below the
/// pivot is sorted recursively; short ranges are skipped and finished by a
/// single insertion sort pass at the end.
pub fn sort<C>(c: C) -> C
where
    C: RandomAccessCursor + CursorMut,
    C::Item: PartialOrd,
{
    sort_by(c, |x, y| x < y)
}

pub fn sort_by<C>(
    mut c: C,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> C
where
    C: RandomAccessCursor + CursorMut,
{
    let w = c.window();
    quicksort(&mut c, w.front(), w.back(), &mut is_less);
    insertion_sort_in(&mut c, w.front(), w.back(), &mut is_less);
    c.exhaust_front();
    c
}

fn quicksort<C, F>(c: &mut C, mut lo: usize, hi: usize, is_less: &mut F)
where
    C: CursorMut,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    while hi - lo > INSERTION_SORT_THRESHOLD {
        let (lt, gt) = partition3(c, lo, hi, is_less);
        if lt == lo || gt == hi {
            log::trace!("one-sided partition of {lo}..{hi}: {lt}..{gt}");
        }
        quicksort(c, lo, lt, is_less);
        lo = gt;
    }
}

/// Splits `lo..hi` into the parts less than, equivalent to and greater than
/// a median-of-three pivot, returning the bounds of the middle part.
fn partition3<C, F>(
    c: &mut C,
    lo: usize,
    hi: usize,
    is_less: &mut F,
) -> (usize, usize)
where
    C: CursorMut,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let pivot = median_of_3(&*c, lo, lo + (hi - lo) / 2, hi - 1, is_less);
    c.swap_at(lo, pivot);
    // lo..lt < pivot, lt..i == pivot, gt..hi > pivot
    let (mut lt, mut i, mut gt) = (lo, lo + 1, hi);
    while i < gt {
        if is_less(c.at(i), c.at(lt)) {
            c.swap_at(lt, i);
            lt += 1;
            i += 1;
        } else if is_less(c.at(lt), c.at(i)) {
            gt -= 1;
            c.swap_at(i, gt);
        } else {
            i += 1;
        }
    }
    (lt, gt)
}

fn median_of_3<C, F>(
    c: &C,
    a: usize,
    b: usize,
    d: usize,
    is_less: &mut F,
) -> usize
where
    C: ForwardCursor,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let (x, y, z) = (c.at(a), c.at(b), c.at(d));
    if is_less(x, y) {
        if is_less(y, z) {
            b
        } else if is_less(x, z) {
            d
        } else {
            a
        }
    } else if is_less(x, z) {
        a
    } else if is_less(y, z) {
        d
    } else {
        b
    }
}

/// Stable sort: merge sort on top of [`inplace_merge_by`], so no buffer is
/// allocated and the cost is O(n log² n).
pub fn stable_sort<C>(c: C) -> C
where
    C: RandomAccessCursor + CursorMut,
    C::Item: PartialOrd,
{
    stable_sort_by(c, |x, y| x < y)
}

pub fn stable_sort_by<C>(
    mut c: C,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> C
where
    C: RandomAccessCursor + CursorMut,
{
    let w = c.window();
    merge_sort(&mut c, w.front(), w.back(), &mut is_less);
    c.reseat(w);
    c.exhaust_front();
    c
}

fn merge_sort<C, F>(c: &mut C, lo: usize, hi: usize, is_less: &mut F)
where
    C: CursorMut,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    if hi - lo <= INSERTION_SORT_THRESHOLD {
        insertion_sort_in(c, lo, hi, is_less);
        return;
    }
    let mid = lo + (hi - lo) / 2;
    merge_sort(c, lo, mid, is_less);
    merge_sort(c, mid, hi, is_less);
    c.reseat(Window::from_parts(lo, mid, hi, hi));
    inplace_merge_by(&mut *c, &mut *is_less);
}

/// Stable, quadratic; the method of choice for short or nearly sorted
/// input.
pub fn insertion_sort<C>(c: C) -> C
where
    C: CursorMut,
    C::Item: PartialOrd,
{
    insertion_sort_by(c, |x, y| x < y)
}

pub fn insertion_sort_by<C: CursorMut>(
    mut c: C,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> C {
    let w = c.window();
    insertion_sort_in(&mut c, w.front(), w.back(), &mut is_less);
    c.exhaust_front();
    c
}

fn insertion_sort_in<C, F>(c: &mut C, lo: usize, hi: usize, is_less: &mut F)
where
    C: CursorMut,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    for i in lo + 1..hi {
        let mut j = i;
        while j > lo && is_less(c.at(j), c.at(j - 1)) {
            c.swap_at(j - 1, j);
            j -= 1;
        }
    }
}

/// Puts the smallest elements, in order, into the dropped front.
///
/// The dropped front is the prefix to fill and the visible part supplies
/// the remaining candidates; afterwards the visible part holds the
/// leftovers in unspecified order.  Heap based, O(n log k).
pub fn partial_sort<C>(c: C) -> C
where
    C: RandomAccessCursor + CursorMut,
    C::Item: PartialOrd,
{
    partial_sort_by(c, |x, y| x < y)
}

pub fn partial_sort_by<C>(
    mut c: C,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> C
where
    C: RandomAccessCursor + CursorMut,
{
    let w = c.window();
    let (first, mid) = (w.base().start, w.front());
    if first < mid {
        let heap = span(w, first, mid);
        c.reseat(heap);
        make_heap_by(&mut c, &mut is_less);
        for i in w.visible() {
            if is_less(c.at(i), c.at(first)) {
                c.reseat(heap);
                pop_heap_by(&mut c, &mut is_less);
                c.swap_at(mid - 1, i);
                c.reseat(heap);
                push_heap_by(&mut c, &mut is_less);
            }
        }
        c.reseat(heap);
        sort_heap_by(&mut c, &mut is_less);
    }
    c.reseat(w);
    c.exhaust_front();
    c
}

/// Copies the smallest elements of `input`, in order, into the visible
/// part of `out`, as many as fit.
///
/// The returned output cursor stops right after the written elements.
pub fn partial_sort_copy<C, O>(input: C, out: O) -> InOut<C, O>
where
    C: Cursor,
    O: RandomAccessCursor<Item = C::Item> + CursorMut,
    C::Item: PartialOrd + Clone,
{
    partial_sort_copy_by(input, out, |x, y| x < y)
}

pub fn partial_sort_copy_by<C, O>(
    mut input: C,
    mut out: O,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> InOut<C, O>
where
    C: Cursor,
    O: RandomAccessCursor<Item = C::Item> + CursorMut,
    C::Item: Clone,
{
    let w = out.window();
    let first = w.front();
    let mut end = first;
    while end < w.back() && !input.is_empty() {
        *out.at_mut(end) = input.front().clone();
        input.pop_front();
        end += 1;
    }
    if first == end {
        return InOut::new(input, out);
    }
    let heap = span(w, first, end);
    out.reseat(heap);
    make_heap_by(&mut out, &mut is_less);
    while !input.is_empty() {
        if is_less(input.front(), out.at(first)) {
            out.reseat(heap);
            pop_heap_by(&mut out, &mut is_less);
            *out.at_mut(end - 1) = input.front().clone();
            out.reseat(heap);
            push_heap_by(&mut out, &mut is_less);
        }
        input.pop_front();
    }
    out.reseat(heap);
    sort_heap_by(&mut out, &mut is_less);
    out.reseat(span(w, end, w.back()));
    InOut::new(input, out)
}

/// Rearranges the dropped front and the visible part so that the front
/// element is the one that would be there if the whole range were sorted.
///
/// Nothing before it is greater and nothing after it is less.  Expected
/// linear time; the returned cursor has the window it was given.
pub fn nth_element<C>(c: C) -> C
where
    C: RandomAccessCursor + CursorMut,
    C::Item: PartialOrd,
{
    nth_element_by(c, |x, y| x < y)
}

pub fn nth_element_by<C>(
    mut c: C,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> C
where
    C: RandomAccessCursor + CursorMut,
{
    let w = c.window();
    let nth = w.front();
    let (mut lo, mut hi) = (w.base().start, w.back());
    if nth == hi {
        return c;
    }
    while hi - lo > 3 {
        let (lt, gt) = partition3(&mut c, lo, hi, &mut is_less);
        if nth < lt {
            hi = lt;
        } else if nth >= gt {
            lo = gt;
        } else {
            return c;
        }
    }
    insertion_sort_in(&mut c, lo, hi, &mut is_less);
    c
}

pub fn is_sorted<C>(c: C) -> bool
where
    C: ForwardCursor,
    C::Item: PartialOrd,
{
    is_sorted_by(c, |x, y| x < y)
}

pub fn is_sorted_by<C: ForwardCursor>(
    c: C,
    is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> bool {
    is_sorted_until_by(c, is_less).is_empty()
}

/// Stops at the first element that is less than its predecessor.
pub fn is_sorted_until<C>(c: C) -> C
where
    C: ForwardCursor,
    C::Item: PartialOrd,
{
    is_sorted_until_by(c, |x, y| x < y)
}

pub fn is_sorted_until_by<C: ForwardCursor>(
    mut c: C,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> C {
    let w = c.window();
    let end = (w.front() + 1..w.back())
        .find(|&pos| is_less(c.at(pos), c.at(pos - 1)))
        .unwrap_or(w.back());
    c.reseat(span(w, end, w.back()));
    c
}

fn span(w: Window, front: usize, back: usize) -> Window {
    Window::from_parts(w.base().start, front, back, w.base().end)
}
