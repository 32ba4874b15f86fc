//! Partitioning by a predicate.
//!
//! The partitioning functions return the cursor stopped at the boundary:
//! its dropped front holds the elements satisfying the predicate, the
//! visible part holds the rest.

use std::ops::Range;

use cursor_core::{
    BidirectionalCursor, Cursor, CursorMut, Finite, ForwardCursor,
    OutputCursor, Window,
};
use results::InOutOut;
use rotate::rotate;

pub fn is_partitioned<C: Cursor<Cardinality = Finite>>(
    mut c: C,
    mut pred: impl FnMut(&C::Item) -> bool,
) -> bool {
    while !c.is_empty() && pred(c.front()) {
        c.pop_front();
    }
    while !c.is_empty() {
        if pred(c.front()) {
            return false;
        }
        c.pop_front();
    }
    true
}

/// Unstable partition, swapping misplaced pairs from both ends inwards.
pub fn partition<C>(mut c: C, mut pred: impl FnMut(&C::Item) -> bool) -> C
where
    C: BidirectionalCursor + CursorMut,
{
    let w = c.window();
    let (mut i, mut j) = (w.front(), w.back());
    loop {
        while i < j && pred(c.at(i)) {
            i += 1;
        }
        while i < j && !pred(c.at(j - 1)) {
            j -= 1;
        }
        if i == j {
            break;
        }
        c.swap_at(i, j - 1);
        i += 1;
        j -= 1;
    }
    c.reseat(boundary(w, i));
    c
}

/// Partition keeping the relative order inside both groups.
///
/// Needs no buffer; each half is partitioned recursively and the middle
/// blocks are swapped with [`rotate`], for O(n log n) swaps.
pub fn stable_partition<C: CursorMut>(
    mut c: C,
    mut pred: impl FnMut(&C::Item) -> bool,
) -> C {
    let w = c.window();
    let mid = stable_partition_rec(&mut c, w.front(), w.back(), &mut pred);
    c.reseat(boundary(w, mid));
    c
}

fn stable_partition_rec<C: CursorMut, P: FnMut(&C::Item) -> bool>(
    c: &mut C,
    lo: usize,
    hi: usize,
    pred: &mut P,
) -> usize {
    match hi - lo {
        0 => lo,
        1 => {
            if pred(c.at(lo)) {
                hi
            } else {
                lo
            }
        }
        len => {
            let mid = lo + len / 2;
            let left = stable_partition_rec(c, lo, mid, pred);
            let right = stable_partition_rec(c, mid, hi, pred);
            // [true | false) [true | false) => [true, true | false, false)
            c.reseat(Window::from_parts(left, mid, right, right));
            rotate(&mut *c).position()
        }
    }
}

/// Sends each element to `out_true` or `out_false`.
pub fn partition_copy<C, O1, O2>(
    mut input: C,
    mut out_true: O1,
    mut out_false: O2,
    mut pred: impl FnMut(&C::Item) -> bool,
) -> InOutOut<C, O1, O2>
where
    C: Cursor,
    C::Item: Clone,
    O1: OutputCursor<C::Item>,
    O2: OutputCursor<C::Item>,
{
    while !input.is_empty() {
        if pred(input.front()) {
            if out_true.is_full() {
                break;
            }
            out_true.put(input.front().clone());
        } else {
            if out_false.is_full() {
                break;
            }
            out_false.put(input.front().clone());
        }
        input.pop_front();
    }
    InOutOut::new(input, out_true, out_false)
}

/// Bisects an already partitioned cursor.
pub fn partition_point<C: ForwardCursor>(
    mut c: C,
    pred: impl FnMut(&C::Item) -> bool,
) -> C {
    let w = c.window();
    let pos = partition_point_in(&c, w.visible(), pred);
    c.reseat(boundary(w, pos));
    c
}

/// [`partition_point`] over the absolute positions `range`, leaving the
/// cursor alone.
pub fn partition_point_in<C: ForwardCursor + ?Sized>(
    c: &C,
    range: Range<usize>,
    mut pred: impl FnMut(&C::Item) -> bool,
) -> usize {
    let Range { start: mut ok, end: mut bad } = range;
    // everything before `ok` satisfies `pred`, nothing from `bad` on does
    while ok < bad {
        let mid = ok + (bad - ok) / 2;
        if pred(c.at(mid)) {
            ok = mid + 1;
        } else {
            bad = mid;
        }
    }
    ok
}

fn boundary(w: Window, pos: usize) -> Window {
    Window::from_parts(w.base().start, pos, w.back(), w.base().end)
}
