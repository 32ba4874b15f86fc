use cursor_core::{Finite, ForwardCursor};
use results::MinMax;

/// The first smallest element, or an empty cursor for empty input.
pub fn min_element<C>(c: C) -> C
where
    C: ForwardCursor<Cardinality = Finite> + Clone,
    C::Item: PartialOrd,
{
    min_element_by(c, |x, y| x < y)
}

pub fn min_element_by<C>(
    mut c: C,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> C
where
    C: ForwardCursor<Cardinality = Finite> + Clone,
{
    if c.is_empty() {
        return c;
    }
    let mut best = c.clone();
    c.pop_front();
    while !c.is_empty() {
        if is_less(c.front(), best.front()) {
            best = c.clone();
        }
        c.pop_front();
    }
    best
}

/// The first largest element.
pub fn max_element<C>(c: C) -> C
where
    C: ForwardCursor<Cardinality = Finite> + Clone,
    C::Item: PartialOrd,
{
    max_element_by(c, |x, y| x < y)
}

pub fn max_element_by<C>(
    c: C,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> C
where
    C: ForwardCursor<Cardinality = Finite> + Clone,
{
    min_element_by(c, |x, y| is_less(y, x))
}

/// The first smallest and the last largest element, in one pass.
pub fn minmax_element<C>(c: C) -> MinMax<C>
where
    C: ForwardCursor<Cardinality = Finite> + Clone,
    C::Item: PartialOrd,
{
    minmax_element_by(c, |x, y| x < y)
}

pub fn minmax_element_by<C>(
    mut c: C,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> MinMax<C>
where
    C: ForwardCursor<Cardinality = Finite> + Clone,
{
    if c.is_empty() {
        return MinMax::new(c.clone(), c);
    }
    let mut min = c.clone();
    let mut max = c.clone();
    c.pop_front();
    while !c.is_empty() {
        if is_less(c.front(), min.front()) {
            min = c.clone();
        } else if !is_less(c.front(), max.front()) {
            max = c.clone();
        }
        c.pop_front();
    }
    MinMax::new(min, max)
}

pub fn clamp<'a, T: PartialOrd>(value: &'a T, lo: &'a T, hi: &'a T) -> &'a T {
    clamp_by(value, lo, hi, |x, y| x < y)
}

pub fn clamp_by<'a, T>(
    value: &'a T,
    lo: &'a T,
    hi: &'a T,
    mut is_less: impl FnMut(&T, &T) -> bool,
) -> &'a T {
    debug_assert!(!is_less(hi, lo));
    if is_less(value, lo) {
        lo
    } else if is_less(hi, value) {
        hi
    } else {
        value
    }
}
