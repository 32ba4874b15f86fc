//! Bisection over sorted cursors.
//!
//! Positions are looked up with [`ForwardCursor::at`], so every cursor
//! backed by addressable storage gets O(log n) comparisons.
//!
//! # Examples
//! ```
//! use binary_search::{equal_range, lower_bound, upper_bound};
//! use cursor_core::ForwardCursor;
//! use slice_cursor::cursor;
//!
//! let a = [1, 2, 2, 2, 3, 5];
//! assert_eq!(lower_bound(cursor(&a), &2).position(), 1);
//! assert_eq!(upper_bound(cursor(&a), &2).position(), 4);
//! assert_eq!(lower_bound(cursor(&a), &4).position(), 5);
//! assert_eq!(equal_range(cursor(&a), &2).as_slice(), [2, 2, 2]);
//! ```

use cursor_core::{Cursor, ForwardCursor, Window};
use partition::partition_point;

/// First element not less than `value`.
pub fn lower_bound<C>(c: C, value: &C::Item) -> C
where
    C: ForwardCursor,
    C::Item: PartialOrd,
{
    lower_bound_by(c, value, |x, y| x < y)
}

pub fn lower_bound_by<C: ForwardCursor>(
    c: C,
    value: &C::Item,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> C {
    partition_point(c, |x| is_less(x, value))
}

/// First element greater than `value`.
pub fn upper_bound<C>(c: C, value: &C::Item) -> C
where
    C: ForwardCursor,
    C::Item: PartialOrd,
{
    upper_bound_by(c, value, |x, y| x < y)
}

pub fn upper_bound_by<C: ForwardCursor>(
    c: C,
    value: &C::Item,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> C {
    partition_point(c, |x| !is_less(value, x))
}

/// The run of elements equivalent to `value`, as the visible part.
///
/// The smaller elements end up in the dropped front and the greater ones in
/// the dropped back.
pub fn equal_range<C>(c: C, value: &C::Item) -> C
where
    C: ForwardCursor,
    C::Item: PartialOrd,
{
    equal_range_by(c, value, |x, y| x < y)
}

pub fn equal_range_by<C: ForwardCursor>(
    c: C,
    value: &C::Item,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> C {
    let w = c.window();
    let mut c = lower_bound_by(c, value, &mut is_less);
    let lo = c.position();
    let hi = upper_bound_by(&mut c, value, &mut is_less).position();
    let base = w.base();
    c.reseat(Window::from_parts(base.start, lo, hi, base.end));
    c
}

pub fn binary_search<C>(c: C, value: &C::Item) -> bool
where
    C: ForwardCursor,
    C::Item: PartialOrd,
{
    binary_search_by(c, value, |x, y| x < y)
}

pub fn binary_search_by<C: ForwardCursor>(
    c: C,
    value: &C::Item,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> bool {
    let c = lower_bound_by(c, value, &mut is_less);
    !c.is_empty() && !is_less(value, c.front())
}
