//! Set algebra on sorted cursors.
//!
//! Inputs are sorted with respect to `is_less` and may hold repeated
//! elements; they are treated as multisets, so an element occurring `m`
//! times in the first input and `n` times in the second occurs
//! `max(m, n)` times in the union, `min(m, n)` times in the intersection,
//! `m - n` times in the difference and `|m - n|` times in the symmetric
//! difference.  When both inputs contribute equivalent elements, the
//! first input's copies are written first.
//!
//! Writing stops early when a bounded sink is full; the returned inputs
//! show how far each one got.

use cursor_core::{Cursor, Finite, OutputCursor};
use results::InInOut;

/// Whether every element of `c2` occurs in `c1`, counting multiplicity.
pub fn includes<C1, C2>(c1: C1, c2: C2) -> bool
where
    C1: Cursor<Cardinality = Finite>,
    C2: Cursor<Item = C1::Item>,
    C1::Item: PartialOrd,
{
    includes_by(c1, c2, |x, y| x < y)
}

pub fn includes_by<C1, C2>(
    mut c1: C1,
    mut c2: C2,
    mut is_less: impl FnMut(&C1::Item, &C1::Item) -> bool,
) -> bool
where
    C1: Cursor<Cardinality = Finite>,
    C2: Cursor<Item = C1::Item>,
{
    while !c2.is_empty() {
        if c1.is_empty() || is_less(c2.front(), c1.front()) {
            return false;
        }
        if !is_less(c1.front(), c2.front()) {
            c2.pop_front();
        }
        c1.pop_front();
    }
    true
}

pub fn set_union<C1, C2, O>(c1: C1, c2: C2, out: O) -> InInOut<C1, C2, O>
where
    C1: Cursor,
    C2: Cursor<Item = C1::Item>,
    C1::Item: PartialOrd + Clone,
    O: OutputCursor<C1::Item>,
{
    set_union_by(c1, c2, out, |x, y| x < y)
}

pub fn set_union_by<C1, C2, O>(
    c1: C1,
    c2: C2,
    out: O,
    is_less: impl FnMut(&C1::Item, &C1::Item) -> bool,
) -> InInOut<C1, C2, O>
where
    C1: Cursor,
    C2: Cursor<Item = C1::Item>,
    C1::Item: Clone,
    O: OutputCursor<C1::Item>,
{
    let emit = Emit { first: true, second: true, both: true };
    walk(c1, c2, out, is_less, emit)
}

pub fn set_intersection<C1, C2, O>(
    c1: C1,
    c2: C2,
    out: O,
) -> InInOut<C1, C2, O>
where
    C1: Cursor,
    C2: Cursor<Item = C1::Item>,
    C1::Item: PartialOrd + Clone,
    O: OutputCursor<C1::Item>,
{
    set_intersection_by(c1, c2, out, |x, y| x < y)
}

pub fn set_intersection_by<C1, C2, O>(
    c1: C1,
    c2: C2,
    out: O,
    is_less: impl FnMut(&C1::Item, &C1::Item) -> bool,
) -> InInOut<C1, C2, O>
where
    C1: Cursor,
    C2: Cursor<Item = C1::Item>,
    C1::Item: Clone,
    O: OutputCursor<C1::Item>,
{
    let emit = Emit { first: false, second: false, both: true };
    walk(c1, c2, out, is_less, emit)
}

/// Elements of `c1` not matched in `c2`.
pub fn set_difference<C1, C2, O>(c1: C1, c2: C2, out: O) -> InInOut<C1, C2, O>
where
    C1: Cursor,
    C2: Cursor<Item = C1::Item>,
    C1::Item: PartialOrd + Clone,
    O: OutputCursor<C1::Item>,
{
    set_difference_by(c1, c2, out, |x, y| x < y)
}

pub fn set_difference_by<C1, C2, O>(
    c1: C1,
    c2: C2,
    out: O,
    is_less: impl FnMut(&C1::Item, &C1::Item) -> bool,
) -> InInOut<C1, C2, O>
where
    C1: Cursor,
    C2: Cursor<Item = C1::Item>,
    C1::Item: Clone,
    O: OutputCursor<C1::Item>,
{
    let emit = Emit { first: true, second: false, both: false };
    walk(c1, c2, out, is_less, emit)
}

pub fn set_symmetric_difference<C1, C2, O>(
    c1: C1,
    c2: C2,
    out: O,
) -> InInOut<C1, C2, O>
where
    C1: Cursor,
    C2: Cursor<Item = C1::Item>,
    C1::Item: PartialOrd + Clone,
    O: OutputCursor<C1::Item>,
{
    set_symmetric_difference_by(c1, c2, out, |x, y| x < y)
}

pub fn set_symmetric_difference_by<C1, C2, O>(
    c1: C1,
    c2: C2,
    out: O,
    is_less: impl FnMut(&C1::Item, &C1::Item) -> bool,
) -> InInOut<C1, C2, O>
where
    C1: Cursor,
    C2: Cursor<Item = C1::Item>,
    C1::Item: Clone,
    O: OutputCursor<C1::Item>,
{
    let emit = Emit { first: true, second: true, both: false };
    walk(c1, c2, out, is_less, emit)
}

/// Which elements a set operation writes: unmatched ones from either input,
/// and whether a matched pair writes the copy from the first.
#[derive(Clone, Copy)]
struct Emit {
    first: bool,
    second: bool,
    both: bool,
}

fn walk<C1, C2, O>(
    mut c1: C1,
    mut c2: C2,
    mut out: O,
    mut is_less: impl FnMut(&C1::Item, &C1::Item) -> bool,
    emit: Emit,
) -> InInOut<C1, C2, O>
where
    C1: Cursor,
    C2: Cursor<Item = C1::Item>,
    C1::Item: Clone,
    O: OutputCursor<C1::Item>,
{
    loop {
        if out.is_full() {
            break;
        }
        match (c1.is_empty(), c2.is_empty()) {
            (true, true) => break,
            (false, true) if !emit.first => break,
            (true, false) if !emit.second => break,
            (false, true) => {
                out.put(c1.front().clone());
                c1.pop_front();
            }
            (true, false) => {
                out.put(c2.front().clone());
                c2.pop_front();
            }
            (false, false) => {
                if is_less(c1.front(), c2.front()) {
                    if emit.first {
                        out.put(c1.front().clone());
                    }
                    c1.pop_front();
                } else if is_less(c2.front(), c1.front()) {
                    if emit.second {
                        out.put(c2.front().clone());
                    }
                    c2.pop_front();
                } else {
                    if emit.both {
                        out.put(c1.front().clone());
                    }
                    c1.pop_front();
                    c2.pop_front();
                }
            }
        }
    }
    InInOut::new(c1, c2, out)
}
