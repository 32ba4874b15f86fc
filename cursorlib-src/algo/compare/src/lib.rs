use std::cmp::Ordering;

use cursor_core::{Cursor, Finite, ForwardCursor};
use results::InIn;

pub fn mismatch<C1, C2>(c1: C1, c2: C2) -> InIn<C1, C2>
where
    C1: Cursor,
    C2: Cursor,
    C1::Item: PartialEq<C2::Item>,
{
    mismatch_by(c1, c2, |x, y| x == y)
}

pub fn mismatch_by<C1: Cursor, C2: Cursor>(
    mut c1: C1,
    mut c2: C2,
    mut eq: impl FnMut(&C1::Item, &C2::Item) -> bool,
) -> InIn<C1, C2> {
    while !c1.is_empty() && !c2.is_empty() && eq(c1.front(), c2.front()) {
        c1.pop_front();
        c2.pop_front();
    }
    InIn::new(c1, c2)
}

pub fn equal<C1, C2>(c1: C1, c2: C2) -> bool
where
    C1: Cursor,
    C2: Cursor,
    C1::Item: PartialEq<C2::Item>,
{
    equal_by(c1, c2, |x, y| x == y)
}

pub fn equal_by<C1: Cursor, C2: Cursor>(
    c1: C1,
    c2: C2,
    eq: impl FnMut(&C1::Item, &C2::Item) -> bool,
) -> bool {
    let InIn { in1, in2 } = mismatch_by(c1, c2, eq);
    in1.is_empty() && in2.is_empty()
}

/// Whether `c1` precedes `c2` in lexicographic order.
pub fn lexicographical_compare<C1, C2>(c1: C1, c2: C2) -> bool
where
    C1: Cursor,
    C2: Cursor<Item = C1::Item>,
    C1::Item: PartialOrd,
{
    lexicographical_compare_by(c1, c2, |x, y| x < y)
}

pub fn lexicographical_compare_by<C1, C2>(
    mut c1: C1,
    mut c2: C2,
    mut is_less: impl FnMut(&C1::Item, &C1::Item) -> bool,
) -> bool
where
    C1: Cursor,
    C2: Cursor<Item = C1::Item>,
{
    loop {
        if c2.is_empty() {
            return false;
        }
        if c1.is_empty() {
            return true;
        }
        if is_less(c1.front(), c2.front()) {
            return true;
        }
        if is_less(c2.front(), c1.front()) {
            return false;
        }
        c1.pop_front();
        c2.pop_front();
    }
}

/// Three-way lexicographic comparison.
pub fn lexicographical_cmp<C1, C2>(mut c1: C1, mut c2: C2) -> Ordering
where
    C1: Cursor,
    C2: Cursor<Item = C1::Item>,
    C1::Item: Ord,
{
    loop {
        match (c1.is_empty(), c2.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }
        match c1.front().cmp(c2.front()) {
            Ordering::Equal => {
                c1.pop_front();
                c2.pop_front();
            }
            ord => return ord,
        }
    }
}

pub fn is_permutation<C1, C2>(c1: C1, c2: C2) -> bool
where
    C1: ForwardCursor<Cardinality = Finite> + Clone,
    C2: ForwardCursor<Item = C1::Item, Cardinality = Finite> + Clone,
    C1::Item: PartialEq,
{
    is_permutation_by(c1, c2, |x, y| x == y)
}

/// Quadratic multiset comparison; needs only equality.
pub fn is_permutation_by<C1, C2>(
    c1: C1,
    c2: C2,
    mut eq: impl FnMut(&C1::Item, &C1::Item) -> bool,
) -> bool
where
    C1: ForwardCursor<Cardinality = Finite> + Clone,
    C2: ForwardCursor<Item = C1::Item, Cardinality = Finite> + Clone,
{
    let InIn { in1: rest1, in2: rest2 } = mismatch_by(c1, c2, &mut eq);
    if length(rest1.clone()) != length(rest2.clone()) {
        return false;
    }

    let mut i = rest1.clone();
    while !i.is_empty() {
        let x = i.front();
        let mut seen = rest1.clone();
        let mut counted_before = false;
        while seen.position() != i.position() {
            if eq(seen.front(), x) {
                counted_before = true;
                break;
            }
            seen.pop_front();
        }
        if !counted_before {
            let n1 = count_matching(i.clone(), x, &mut eq);
            let n2 = count_matching(rest2.clone(), x, &mut eq);
            if n1 != n2 {
                return false;
            }
        }
        i.pop_front();
    }
    true
}

fn length<C: Cursor>(mut c: C) -> usize {
    let mut res = 0;
    while !c.is_empty() {
        c.pop_front();
        res += 1;
    }
    res
}

fn count_matching<C: Cursor>(
    mut c: C,
    x: &C::Item,
    eq: &mut impl FnMut(&C::Item, &C::Item) -> bool,
) -> usize {
    let mut res = 0;
    while !c.is_empty() {
        if eq(c.front(), x) {
            res += 1;
        }
        c.pop_front();
    }
    res
}
