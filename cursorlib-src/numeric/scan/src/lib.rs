//! Folds and prefix scans.
//!
//! # Examples
//! ```
//! use scan::{accumulate, adjacent_difference, partial_sum};
//! use slice_cursor::cursor;
//!
//! let a = [1, 4, 9, 16];
//! assert_eq!(accumulate(cursor(&a), 0), 30);
//! assert_eq!(partial_sum(cursor(&a), vec![]).output, [1, 5, 14, 30]);
//! assert_eq!(adjacent_difference(cursor(&a), vec![]).output, [1, 3, 5, 7]);
//! ```

use std::ops::{Add, AddAssign, Mul, Sub};

use cursor_core::{Cursor, CursorMut, Finite, OutputCursor};
use results::InOut;

/// Left fold with `+`.
pub fn accumulate<C, T>(c: C, init: T) -> T
where
    C: Cursor<Cardinality = Finite>,
    T: for<'a> Add<&'a C::Item, Output = T>,
{
    accumulate_by(c, init, |acc, x| acc + x)
}

pub fn accumulate_by<C, T>(
    mut c: C,
    init: T,
    mut f: impl FnMut(T, &C::Item) -> T,
) -> T
where
    C: Cursor<Cardinality = Finite>,
{
    let mut acc = init;
    while !c.is_empty() {
        acc = f(acc, c.front());
        c.pop_front();
    }
    acc
}

/// `init` plus the sum of pairwise products, up to the shorter input.
pub fn inner_product<C1, C2, T>(c1: C1, c2: C2, init: T) -> T
where
    C1: Cursor,
    C2: Cursor,
    T: Add<Output = T>,
    for<'a> &'a C1::Item: Mul<&'a C2::Item, Output = T>,
{
    inner_product_by(c1, c2, init, |acc, p| acc + p, |x, y| x * y)
}

pub fn inner_product_by<C1, C2, T, U>(
    mut c1: C1,
    mut c2: C2,
    init: T,
    mut add: impl FnMut(T, U) -> T,
    mut mul: impl FnMut(&C1::Item, &C2::Item) -> U,
) -> T
where
    C1: Cursor,
    C2: Cursor,
{
    let mut acc = init;
    while !c1.is_empty() && !c2.is_empty() {
        acc = add(acc, mul(c1.front(), c2.front()));
        c1.pop_front();
        c2.pop_front();
    }
    acc
}

/// Folds `input` into `init` after mapping each element with `transform`.
pub fn transform_reduce<C, T, U>(
    c: C,
    init: T,
    mut reduce: impl FnMut(T, U) -> T,
    mut transform: impl FnMut(&C::Item) -> U,
) -> T
where
    C: Cursor<Cardinality = Finite>,
{
    accumulate_by(c, init, |acc, x| reduce(acc, transform(x)))
}

/// Running sums; the `i`-th output is the sum of the first `i + 1` inputs.
pub fn partial_sum<C, O>(input: C, out: O) -> InOut<C, O>
where
    C: Cursor,
    C::Item: Clone + for<'a> Add<&'a C::Item, Output = C::Item>,
    O: OutputCursor<C::Item>,
{
    partial_sum_by(input, out, |acc, x| acc.clone() + x)
}

pub fn partial_sum_by<C, O>(
    mut input: C,
    mut out: O,
    op: impl FnMut(&C::Item, &C::Item) -> C::Item,
) -> InOut<C, O>
where
    C: Cursor,
    C::Item: Clone,
    O: OutputCursor<C::Item>,
{
    if input.is_empty() || out.is_full() {
        return InOut::new(input, out);
    }
    let init = input.front().clone();
    input.pop_front();
    out.put(init.clone());
    inclusive_scan(input, out, init, op)
}

/// Like [`partial_sum_by`] with an explicit seed: writes `op(init, x0)`,
/// `op(op(init, x0), x1)` and so on.
pub fn inclusive_scan<C, O, T>(
    mut input: C,
    mut out: O,
    init: T,
    mut op: impl FnMut(&T, &C::Item) -> T,
) -> InOut<C, O>
where
    C: Cursor,
    T: Clone,
    O: OutputCursor<T>,
{
    let mut acc = init;
    while !input.is_empty() && !out.is_full() {
        acc = op(&acc, input.front());
        out.put(acc.clone());
        input.pop_front();
    }
    InOut::new(input, out)
}

/// Writes `init`, `op(init, x0)` and so on, leaving out the last
/// input's contribution.
pub fn exclusive_scan<C, O, T>(
    mut input: C,
    mut out: O,
    init: T,
    mut op: impl FnMut(&T, &C::Item) -> T,
) -> InOut<C, O>
where
    C: Cursor,
    T: Clone,
    O: OutputCursor<T>,
{
    let mut acc = init;
    while !input.is_empty() && !out.is_full() {
        out.put(acc.clone());
        acc = op(&acc, input.front());
        input.pop_front();
    }
    InOut::new(input, out)
}

/// The first element followed by the differences of neighbours.
pub fn adjacent_difference<C, O>(input: C, out: O) -> InOut<C, O>
where
    C: Cursor,
    C::Item: Clone,
    for<'a> &'a C::Item: Sub<&'a C::Item, Output = C::Item>,
    O: OutputCursor<C::Item>,
{
    adjacent_difference_by(input, out, |cur, prev| cur - prev)
}

/// `op(current, previous)` for every element but the first, which is
/// copied as is.
pub fn adjacent_difference_by<C, O>(
    mut input: C,
    mut out: O,
    mut op: impl FnMut(&C::Item, &C::Item) -> C::Item,
) -> InOut<C, O>
where
    C: Cursor,
    C::Item: Clone,
    O: OutputCursor<C::Item>,
{
    if input.is_empty() || out.is_full() {
        return InOut::new(input, out);
    }
    let mut prev = input.front().clone();
    out.put(prev.clone());
    input.pop_front();
    while !input.is_empty() && !out.is_full() {
        out.put(op(input.front(), &prev));
        prev = input.front().clone();
        input.pop_front();
    }
    InOut::new(input, out)
}

/// Fills the visible part with `value`, `value + 1` and so on.
pub fn fill_iota<C>(mut c: C, mut value: C::Item) -> C
where
    C: CursorMut,
    C::Item: Clone + AddAssign + From<u8>,
{
    while !c.is_empty() {
        *c.front_mut() = value.clone();
        c.pop_front();
        if !c.is_empty() {
            value += C::Item::from(1);
        }
    }
    c
}

#[cfg(test)]
mod tests {
    use iter_cursor::{from_iter, iota, take};
    use slice_cursor::{cursor, cursor_mut};

    use super::*;

    #[test]
    fn sanity_check() {
        let a = [1, 2, 3, 4];
        let b = [5, 6, 7];
        assert_eq!(accumulate(cursor(&a), 10_i32), 20);
        assert_eq!(accumulate_by(cursor(&a), 1_i32, |acc, x| acc * x), 24);
        assert_eq!(inner_product(cursor(&a), cursor(&b), 0), 5 + 12 + 21);
        let dot = inner_product_by(
            cursor(&a),
            cursor(&b),
            String::new(),
            |acc: String, s: String| acc + &s,
            |x, y| (x + y).to_string(),
        );
        assert_eq!(dot, "6810");
        let squares =
            transform_reduce(cursor(&a), 0_i32, |x, y: i32| x + y, |x| x * x);
        assert_eq!(squares, 30);

        let empty: [i32; 0] = [];
        assert_eq!(accumulate(cursor(&empty), 7), 7);
    }

    #[test]
    fn scans() {
        let a = [3, 1, 4, 1, 5];
        let r = partial_sum(cursor(&a), vec![]);
        assert!(r.input.is_empty());
        assert_eq!(r.output, [3, 4, 8, 9, 14]);

        let r = partial_sum_by(cursor(&a), vec![], |x, y| *x.max(y));
        assert_eq!(r.output, [3, 3, 4, 4, 5]);

        let r = inclusive_scan(cursor(&a), vec![], 100_i32, |acc, x| acc - x);
        assert_eq!(r.output, [97, 96, 92, 91, 86]);

        let r = exclusive_scan(cursor(&a), vec![], 0_i32, |acc, x| acc + x);
        assert_eq!(r.output, [0, 3, 4, 8, 9]);

        // the output type may differ from the input type
        let r = inclusive_scan(cursor(&a), vec![], String::new(), |s, x| {
            format!("{s}{x}")
        });
        assert_eq!(r.output, ["3", "31", "314", "3141", "31415"]);

        let mut buf = [0; 2];
        let r = partial_sum(cursor(&a), cursor_mut(&mut buf));
        assert_eq!(r.input.as_slice(), [4, 1, 5]);
        assert_eq!(buf, [3, 4]);

        let empty: [i32; 0] = [];
        assert!(partial_sum(cursor(&empty), vec![]).output.is_empty());
    }

    #[test]
    fn differences() {
        let r = adjacent_difference(from_iter([2, 3, 5, 7, 11]), vec![]);
        assert_eq!(r.output, [2, 1, 2, 2, 4]);

        let c = take(iota(1_u64), 5);
        let r = adjacent_difference_by(c, vec![], |x, y| x * y);
        assert_eq!(r.output, [1, 2, 6, 12, 20]);

        // a partial sum undoes a difference
        let a = [4, 8, 15, 16, 23, 42];
        let d = adjacent_difference(cursor(&a), vec![]).output;
        assert_eq!(partial_sum(cursor(&d), vec![]).output, a);
    }

    #[test]
    fn iota_fill() {
        let mut a = [0_u8; 5];
        let c = fill_iota(cursor_mut(&mut a), 3);
        assert!(c.is_empty());
        assert_eq!(a, [3, 4, 5, 6, 7]);

        let mut a = [0.0; 3];
        fill_iota(cursor_mut(&mut a), 0.5);
        assert_eq!(a, [0.5, 1.5, 2.5]);
    }

    #[test]
    fn iota_fill_up_to_max() {
        let mut a = [0_u8; 256];
        fill_iota(cursor_mut(&mut a), 0);
        assert!(a.iter().enumerate().all(|(i, &x)| i == x as usize));

        let mut a = [0_u8; 1];
        fill_iota(cursor_mut(&mut a), 255);
        assert_eq!(a, [255]);

        let mut a = [7_u8; 0];
        assert!(fill_iota(cursor_mut(&mut a), 255).is_empty());
    }
}
