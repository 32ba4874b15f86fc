//! Element-wise writes: copying, filling, replacing, removing and reversing.
//!
//! Copying algorithms stop as soon as the source runs out or a bounded sink
//! is full.  In-place algorithms return the cursor with its front exhausted,
//! except for the compacting ones (`remove*`, `unique*`) which return the
//! leftover tail: the kept elements are its dropped front.

use cursor_core::{
    BidirectionalCursor, Cursor, CursorMut, ForwardCursor, OutputCursor,
    Window,
};
use results::{InIn, InInOut, InOut};

pub fn copy<C, O>(input: C, out: O) -> InOut<C, O>
where
    C: Cursor,
    C::Item: Clone,
    O: OutputCursor<C::Item>,
{
    copy_if(input, out, |_| true)
}

/// Copies at most `n` elements.
pub fn copy_n<C, O>(mut input: C, n: usize, mut out: O) -> InOut<C, O>
where
    C: Cursor,
    C::Item: Clone,
    O: OutputCursor<C::Item>,
{
    for _ in 0..n {
        if input.is_empty() || out.is_full() {
            break;
        }
        out.put(input.front().clone());
        input.pop_front();
    }
    InOut::new(input, out)
}

pub fn copy_if<C, O>(
    mut input: C,
    mut out: O,
    mut pred: impl FnMut(&C::Item) -> bool,
) -> InOut<C, O>
where
    C: Cursor,
    C::Item: Clone,
    O: OutputCursor<C::Item>,
{
    while !input.is_empty() && !out.is_full() {
        if pred(input.front()) {
            out.put(input.front().clone());
        }
        input.pop_front();
    }
    InOut::new(input, out)
}

/// Copies from the back of `input` into the back of `out`.
pub fn copy_backward<C, O>(mut input: C, mut out: O) -> InOut<C, O>
where
    C: BidirectionalCursor,
    C::Item: Clone,
    O: BidirectionalCursor<Item = C::Item> + CursorMut,
{
    while !input.is_empty() && !out.is_empty() {
        *out.back_mut() = input.back().clone();
        input.pop_back();
        out.pop_back();
    }
    InOut::new(input, out)
}

pub fn fill<C>(c: C, value: &C::Item) -> C
where
    C: CursorMut,
    C::Item: Clone,
{
    generate(c, || value.clone())
}

pub fn fill_n<O, T>(out: O, n: usize, value: &T) -> O
where
    O: OutputCursor<T>,
    T: Clone,
{
    generate_n(out, n, || value.clone())
}

pub fn generate<C: CursorMut>(
    mut c: C,
    mut f: impl FnMut() -> C::Item,
) -> C {
    while !c.is_empty() {
        *c.front_mut() = f();
        c.pop_front();
    }
    c
}

/// Writes `n` generated values, fewer if the sink fills up.
pub fn generate_n<O, T>(mut out: O, n: usize, mut f: impl FnMut() -> T) -> O
where
    O: OutputCursor<T>,
{
    for _ in 0..n {
        if out.is_full() {
            break;
        }
        out.put(f());
    }
    out
}

pub fn transform<C, O, U>(
    mut input: C,
    mut out: O,
    mut f: impl FnMut(&C::Item) -> U,
) -> InOut<C, O>
where
    C: Cursor,
    O: OutputCursor<U>,
{
    while !input.is_empty() && !out.is_full() {
        out.put(f(input.front()));
        input.pop_front();
    }
    InOut::new(input, out)
}

pub fn transform2<C1, C2, O, U>(
    mut in1: C1,
    mut in2: C2,
    mut out: O,
    mut f: impl FnMut(&C1::Item, &C2::Item) -> U,
) -> InInOut<C1, C2, O>
where
    C1: Cursor,
    C2: Cursor,
    O: OutputCursor<U>,
{
    while !in1.is_empty() && !in2.is_empty() && !out.is_full() {
        out.put(f(in1.front(), in2.front()));
        in1.pop_front();
        in2.pop_front();
    }
    InInOut::new(in1, in2, out)
}

pub fn replace<C, T>(c: C, old: &T, new: &C::Item) -> C
where
    C: CursorMut,
    C::Item: PartialEq<T> + Clone,
    T: ?Sized,
{
    replace_if(c, |x| x == old, new)
}

pub fn replace_if<C>(
    mut c: C,
    mut pred: impl FnMut(&C::Item) -> bool,
    new: &C::Item,
) -> C
where
    C: CursorMut,
    C::Item: Clone,
{
    while !c.is_empty() {
        if pred(c.front()) {
            *c.front_mut() = new.clone();
        }
        c.pop_front();
    }
    c
}

pub fn replace_copy<C, O, T>(
    input: C,
    out: O,
    old: &T,
    new: &C::Item,
) -> InOut<C, O>
where
    C: Cursor,
    C::Item: PartialEq<T> + Clone,
    O: OutputCursor<C::Item>,
    T: ?Sized,
{
    replace_copy_if(input, out, |x| x == old, new)
}

pub fn replace_copy_if<C, O>(
    input: C,
    out: O,
    mut pred: impl FnMut(&C::Item) -> bool,
    new: &C::Item,
) -> InOut<C, O>
where
    C: Cursor,
    C::Item: Clone,
    O: OutputCursor<C::Item>,
{
    transform(input, out, |x| if pred(x) { new.clone() } else { x.clone() })
}

/// Moves the elements not equal to `value` to the front, keeping their
/// order.
pub fn remove<C, T>(c: C, value: &T) -> C
where
    C: CursorMut,
    C::Item: PartialEq<T>,
    T: ?Sized,
{
    remove_if(c, |x| x == value)
}

pub fn remove_if<C: CursorMut>(
    mut c: C,
    mut pred: impl FnMut(&C::Item) -> bool,
) -> C {
    let w = c.window();
    let mut kept = w.front();
    for pos in w.visible() {
        if !pred(c.at(pos)) {
            c.swap_at(kept, pos);
            kept += 1;
        }
    }
    c.reseat(rest(w, kept));
    c
}

pub fn remove_copy<C, O, T>(input: C, out: O, value: &T) -> InOut<C, O>
where
    C: Cursor,
    C::Item: PartialEq<T> + Clone,
    O: OutputCursor<C::Item>,
    T: ?Sized,
{
    copy_if(input, out, |x| x != value)
}

pub fn remove_copy_if<C, O>(
    input: C,
    out: O,
    mut pred: impl FnMut(&C::Item) -> bool,
) -> InOut<C, O>
where
    C: Cursor,
    C::Item: Clone,
    O: OutputCursor<C::Item>,
{
    copy_if(input, out, |x| !pred(x))
}

/// Keeps the first element of every run of equal elements.
pub fn unique<C>(c: C) -> C
where
    C: CursorMut,
    C::Item: PartialEq,
{
    unique_by(c, |x, y| x == y)
}

pub fn unique_by<C: CursorMut>(
    mut c: C,
    mut eq: impl FnMut(&C::Item, &C::Item) -> bool,
) -> C {
    let w = c.window();
    if w.is_empty() {
        return c;
    }
    let mut last = w.front();
    for pos in w.front() + 1..w.back() {
        if !eq(c.at(last), c.at(pos)) {
            last += 1;
            c.swap_at(last, pos);
        }
    }
    c.reseat(rest(w, last + 1));
    c
}

pub fn unique_copy<C, O>(input: C, out: O) -> InOut<C, O>
where
    C: Cursor,
    C::Item: PartialEq + Clone,
    O: OutputCursor<C::Item>,
{
    unique_copy_by(input, out, |x, y| x == y)
}

pub fn unique_copy_by<C, O>(
    mut input: C,
    mut out: O,
    mut eq: impl FnMut(&C::Item, &C::Item) -> bool,
) -> InOut<C, O>
where
    C: Cursor,
    C::Item: Clone,
    O: OutputCursor<C::Item>,
{
    let mut last: Option<C::Item> = None;
    while !input.is_empty() && !out.is_full() {
        let x = input.front();
        if !last.as_ref().is_some_and(|l| eq(l, x)) {
            last = Some(x.clone());
            out.put(x.clone());
        }
        input.pop_front();
    }
    InOut::new(input, out)
}

pub fn reverse<C>(mut c: C) -> C
where
    C: BidirectionalCursor + CursorMut,
{
    let w = c.window();
    let (mut i, mut j) = (w.front(), w.back());
    while j - i > 1 {
        j -= 1;
        c.swap_at(i, j);
        i += 1;
    }
    c.exhaust_front();
    c
}

pub fn reverse_copy<C, O>(mut input: C, mut out: O) -> InOut<C, O>
where
    C: BidirectionalCursor,
    C::Item: Clone,
    O: OutputCursor<C::Item>,
{
    while !input.is_empty() && !out.is_full() {
        out.put(input.back().clone());
        input.pop_back();
    }
    InOut::new(input, out)
}

/// Exchanges elements pairwise until either side runs out.
pub fn swap_ranges<C1, C2>(mut c1: C1, mut c2: C2) -> InIn<C1, C2>
where
    C1: CursorMut,
    C2: CursorMut<Item = C1::Item>,
{
    while !c1.is_empty() && !c2.is_empty() {
        std::mem::swap(c1.front_mut(), c2.front_mut());
        c1.pop_front();
        c2.pop_front();
    }
    InIn::new(c1, c2)
}

// The leftover after compacting `w` so that `[w.front(), kept)` survives.
fn rest(w: Window, kept: usize) -> Window {
    let base = w.base();
    Window::from_parts(base.start, kept, w.back(), base.end)
}
