//! Subsequence searches.
//!
//! All of these return the haystack stopped at the start of the match.
//! [`search`] and [`find_end`] also narrow it to the matched elements: the
//! part before the match is the dropped front and the part after it is the
//! dropped back, so the whole haystack can be rebuilt with
//! [`ForwardCursor::dropped_front`], [`BidirectionalCursor::dropped_back`]
//! and [`ForwardCursor::splice`].  Without a match the haystack comes back
//! exhausted.
//!
//! [`BidirectionalCursor::dropped_back`]:
//! cursor_core::BidirectionalCursor::dropped_back
//!
//! # Examples
//! ```
//! use cursor_core::{BidirectionalCursor, ForwardCursor};
//! use search::search;
//! use slice_cursor::cursor;
//!
//! let hay = b"the cat sat";
//! let found = search(cursor(hay), cursor(b"at"));
//! assert_eq!(found.dropped_front().as_slice(), b"the c");
//! assert_eq!(found.as_slice(), b"at");
//! assert_eq!(found.dropped_back().as_slice(), b" sat");
//! ```

use cursor_core::{Cursor, ForwardCursor, Window};

/// Naive O(nm) search for `needle` in `hay`.
///
/// An empty needle matches the empty range at the front of `hay`.
pub fn search<H, N>(hay: H, needle: N) -> H
where
    H: ForwardCursor + Clone,
    N: Cursor<Item = H::Item> + Clone,
    H::Item: PartialEq,
{
    search_by(hay, needle, |x, y| x == y)
}

pub fn search_by<H, N>(
    mut hay: H,
    needle: N,
    mut eq: impl FnMut(&H::Item, &N::Item) -> bool,
) -> H
where
    H: ForwardCursor + Clone,
    N: Cursor + Clone,
{
    loop {
        let mut h = hay.clone();
        let mut n = needle.clone();
        while !h.is_empty() && !n.is_empty() && eq(h.front(), n.front()) {
            h.pop_front();
            n.pop_front();
        }
        if n.is_empty() {
            let w = hay.window();
            let end = h.position();
            let (start, base) = (w.front(), w.base());
            hay.reseat(Window::from_parts(base.start, start, end, base.end));
            return hay;
        }
        if h.is_empty() {
            // the rest of the haystack is shorter than the needle
            hay.exhaust_front();
            return hay;
        }
        hay.pop_front();
    }
}

/// First run of `count` consecutive elements equal to `value`.
pub fn search_n<H, T>(hay: H, count: usize, value: &T) -> H
where
    H: ForwardCursor + Clone,
    H::Item: PartialEq<T>,
{
    search_n_by(hay, count, value, |x, v| x == v)
}

pub fn search_n_by<H, T>(
    mut hay: H,
    count: usize,
    value: &T,
    mut eq: impl FnMut(&H::Item, &T) -> bool,
) -> H
where
    H: ForwardCursor + Clone,
{
    if count == 0 {
        return hay;
    }
    loop {
        while !hay.is_empty() && !eq(hay.front(), value) {
            hay.pop_front();
        }
        if hay.is_empty() {
            return hay;
        }
        let start = hay.clone();
        let mut run = 0;
        while run < count && !hay.is_empty() && eq(hay.front(), value) {
            hay.pop_front();
            run += 1;
        }
        if run == count {
            return start;
        }
        if hay.is_empty() {
            return hay;
        }
    }
}

/// Last occurrence of `needle`; an empty needle never matches.
pub fn find_end<H, N>(hay: H, needle: N) -> H
where
    H: ForwardCursor + Clone,
    N: Cursor<Item = H::Item> + Clone,
    H::Item: PartialEq,
{
    find_end_by(hay, needle, |x, y| x == y)
}

pub fn find_end_by<H, N>(
    hay: H,
    needle: N,
    mut eq: impl FnMut(&H::Item, &N::Item) -> bool,
) -> H
where
    H: ForwardCursor + Clone,
    N: Cursor + Clone,
{
    let mut cur = hay.clone();
    let mut res = hay;
    res.exhaust_front();
    if needle.is_empty() {
        return res;
    }
    loop {
        let found = search_by(cur.clone(), needle.clone(), &mut eq);
        if found.is_empty() {
            return res;
        }
        let w = cur.window();
        let next = found.position() + 1;
        cur.reseat(Window::from_parts(
            w.base().start,
            next,
            w.back(),
            w.base().end,
        ));
        res = found;
    }
}

/// First element of `hay` equal to any element of `set`.
pub fn find_first_of<H, S>(hay: H, set: S) -> H
where
    H: Cursor,
    S: Cursor + Clone,
    H::Item: PartialEq<S::Item>,
{
    find_first_of_by(hay, set, |x, y| x == y)
}

pub fn find_first_of_by<H, S>(
    mut hay: H,
    set: S,
    mut eq: impl FnMut(&H::Item, &S::Item) -> bool,
) -> H
where
    H: Cursor,
    S: Cursor + Clone,
{
    while !hay.is_empty() {
        let mut s = set.clone();
        while !s.is_empty() {
            if eq(hay.front(), s.front()) {
                return hay;
            }
            s.pop_front();
        }
        hay.pop_front();
    }
    hay
}

/// First element that equals its successor.
pub fn adjacent_find<H>(hay: H) -> H
where
    H: ForwardCursor + Clone,
    H::Item: PartialEq,
{
    adjacent_find_by(hay, |x, y| x == y)
}

pub fn adjacent_find_by<H>(
    mut hay: H,
    mut eq: impl FnMut(&H::Item, &H::Item) -> bool,
) -> H
where
    H: ForwardCursor + Clone,
{
    if hay.is_empty() {
        return hay;
    }
    let mut next = hay.clone();
    next.pop_front();
    while !next.is_empty() {
        if eq(hay.front(), next.front()) {
            return hay;
        }
        hay.pop_front();
        next.pop_front();
    }
    hay.exhaust_front();
    hay
}
