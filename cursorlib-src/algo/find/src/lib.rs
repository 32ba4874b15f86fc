//! Linear scans over input cursors.
//!
//! The `find*` functions return the cursor stopped at the first match, so
//! for multi-pass cursors the skipped prefix is available as its dropped
//! front.

use cursor_core::{Cursor, Finite};
use results::InFn;

pub fn find<C, T>(c: C, value: &T) -> C
where
    C: Cursor,
    C::Item: PartialEq<T>,
    T: ?Sized,
{
    find_if(c, |x| x == value)
}

pub fn find_if<C: Cursor>(
    mut c: C,
    mut pred: impl FnMut(&C::Item) -> bool,
) -> C {
    while !c.is_empty() && !pred(c.front()) {
        c.pop_front();
    }
    c
}

pub fn find_if_not<C: Cursor>(
    c: C,
    mut pred: impl FnMut(&C::Item) -> bool,
) -> C {
    find_if(c, |x| !pred(x))
}

pub fn count<C, T>(c: C, value: &T) -> usize
where
    C: Cursor<Cardinality = Finite>,
    C::Item: PartialEq<T>,
    T: ?Sized,
{
    count_if(c, |x| x == value)
}

pub fn count_if<C: Cursor<Cardinality = Finite>>(
    mut c: C,
    mut pred: impl FnMut(&C::Item) -> bool,
) -> usize {
    let mut res = 0;
    while !c.is_empty() {
        if pred(c.front()) {
            res += 1;
        }
        c.pop_front();
    }
    res
}

pub fn all_of<C: Cursor<Cardinality = Finite>>(
    c: C,
    pred: impl FnMut(&C::Item) -> bool,
) -> bool {
    find_if_not(c, pred).is_empty()
}

pub fn any_of<C: Cursor<Cardinality = Finite>>(
    c: C,
    pred: impl FnMut(&C::Item) -> bool,
) -> bool {
    !find_if(c, pred).is_empty()
}

pub fn none_of<C: Cursor<Cardinality = Finite>>(
    c: C,
    pred: impl FnMut(&C::Item) -> bool,
) -> bool {
    find_if(c, pred).is_empty()
}

pub fn for_each<C, F>(mut c: C, mut f: F) -> InFn<C, F>
where
    C: Cursor<Cardinality = Finite>,
    F: FnMut(&C::Item),
{
    while !c.is_empty() {
        f(c.front());
        c.pop_front();
    }
    InFn::new(c, f)
}

/// Applies `f` to the first `n` elements, which must exist.
pub fn for_each_n<C, F>(mut c: C, n: usize, mut f: F) -> InFn<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item),
{
    for _ in 0..n {
        debug_assert!(!c.is_empty());
        f(c.front());
        c.pop_front();
    }
    InFn::new(c, f)
}

#[cfg(test)]
mod tests {
    use cursor_core::ForwardCursor;
    use iter_cursor::{from_iter, iota};
    use slice_cursor::cursor;

    use super::*;

    #[test]
    fn sanity_check() {
        let a = [3, 1, 4, 1, 5, 9, 2, 6];
        let c = find(cursor(&a), &1);
        assert_eq!(c.as_slice(), [1, 4, 1, 5, 9, 2, 6]);
        assert_eq!(c.dropped_front().as_slice(), [3]);

        let c = find(cursor(&a), &7);
        assert!(c.is_empty());
        assert_eq!(c.position(), a.len());

        let c = find_if(cursor(&a), |&x| x > 4);
        assert_eq!(*c.front(), 5);
        let c = find_if_not(cursor(&a), |&x| x < 5);
        assert_eq!(*c.front(), 5);

        assert_eq!(count(cursor(&a), &1), 2);
        assert_eq!(count_if(cursor(&a), |x| x % 2 == 0), 3);
        assert_eq!(count(from_iter("hello".chars()), &'l'), 2);
    }

    #[test]
    fn quantifiers() {
        let a = [2, 4, 6];
        assert!(all_of(cursor(&a), |x| x % 2 == 0));
        assert!(!any_of(cursor(&a), |x| x % 2 == 1));
        assert!(none_of(cursor(&a), |&x| x > 6));

        let empty: [i32; 0] = [];
        assert!(all_of(cursor(&empty), |_| false));
        assert!(!any_of(cursor(&empty), |_| true));
        assert!(none_of(cursor(&empty), |_| true));
    }

    #[test]
    fn infinite_find() {
        let c = find_if(iota(1_u64), |&x| x * x > 1000);
        assert_eq!(*c.front(), 32);
    }

    #[test]
    fn visiting() {
        let a = [1, 2, 3, 4];
        let mut sum = 0;
        let r = for_each(cursor(&a), |x| sum += x);
        assert!(r.input.is_empty());
        assert_eq!(sum, 10);

        let mut seen = vec![];
        let r = for_each_n(iota(10_i32), 3, |&x| seen.push(x));
        assert_eq!(*r.input.front(), 13);
        assert_eq!(seen, [10, 11, 12]);
    }
}
