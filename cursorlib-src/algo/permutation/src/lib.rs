//! Lexicographic permutations.
//!
//! [`next_permutation`] and [`prev_permutation`] step through the
//! arrangements of the visible elements in lexicographic order.
//! [`nth_permutation`] jumps straight to the arrangement of a given rank
//! via the factorial number system, and [`permutation_rank`] goes back.
//!
//! Ranks count arrangements of positions, not of values: with repeated
//! elements, different ranks may produce the same sequence, and
//! [`permutation_rank`] reports the smallest of them.
//!
//! # Examples
//! ```
//! use permutation::{next_permutation, nth_permutation, permutation_rank};
//! use slice_cursor::{cursor, cursor_mut};
//!
//! let mut a = [1, 2, 3];
//! assert!(next_permutation(cursor_mut(&mut a)));
//! assert_eq!(a, [1, 3, 2]);
//! assert_eq!(permutation_rank(cursor(&a)), Ok(1));
//!
//! let mut a = ['c', 'a', 'd', 'b'];
//! nth_permutation(cursor_mut(&mut a), 17).unwrap();
//! assert_eq!(a, ['c', 'd', 'b', 'a']);
//! ```

use cursor_core::{
    BidirectionalCursor, CursorMut, Finite, ForwardCursor, RandomAccessCursor,
    Window,
};
use modify::reverse;
use rotate::rotate;
use sort::sort_by;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum PermutationError {
    #[error("rank is not less than {len}!")]
    RankOutOfRange { len: usize },
    #[error("the rank of a permutation of {len} elements does not fit in u64")]
    RankOverflow { len: usize },
}

/// Rearranges into the next greater permutation.
///
/// Returns `false` and leaves the elements sorted when the input was the
/// greatest permutation.
pub fn next_permutation<C>(c: C) -> bool
where
    C: BidirectionalCursor + CursorMut,
    C::Item: PartialOrd,
{
    next_permutation_by(c, |x, y| x < y)
}

pub fn next_permutation_by<C>(
    mut c: C,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> bool
where
    C: BidirectionalCursor + CursorMut,
{
    let w = c.window();
    let (first, last) = (w.front(), w.back());
    if last - first < 2 {
        return false;
    }
    // start of the longest non-increasing suffix
    let mut i = last - 1;
    while i > first && !is_less(c.at(i - 1), c.at(i)) {
        i -= 1;
    }
    if i > first {
        let pivot = i - 1;
        let mut j = last - 1;
        while !is_less(c.at(pivot), c.at(j)) {
            j -= 1;
        }
        c.swap_at(pivot, j);
    }
    c.reseat(Window::from_parts(w.base().start, i, last, w.base().end));
    reverse(&mut c);
    i > first
}

/// Rearranges into the previous smaller permutation.
///
/// Returns `false` and leaves the elements in descending order when the
/// input was the smallest permutation.
pub fn prev_permutation<C>(c: C) -> bool
where
    C: BidirectionalCursor + CursorMut,
    C::Item: PartialOrd,
{
    prev_permutation_by(c, |x, y| x < y)
}

pub fn prev_permutation_by<C>(
    c: C,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> bool
where
    C: BidirectionalCursor + CursorMut,
{
    next_permutation_by(c, |x, y| is_less(y, x))
}

/// Rearranges into the permutation of rank `rank` among the arrangements
/// of the visible elements, counting from the sorted one.
///
/// The elements are left untouched when `rank` is out of range.
pub fn nth_permutation<C>(c: C, rank: u64) -> Result<C, PermutationError>
where
    C: RandomAccessCursor + CursorMut,
    C::Item: PartialOrd,
{
    nth_permutation_by(c, rank, |x, y| x < y)
}

pub fn nth_permutation_by<C>(
    c: C,
    mut rank: u64,
    is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> Result<C, PermutationError>
where
    C: RandomAccessCursor + CursorMut,
{
    let len = c.len();
    let mut digits = vec![0; len];
    for (i, digit) in digits.iter_mut().enumerate().rev() {
        // the i-th digit from the back has base len - i
        let base = (len - i) as u64;
        *digit = (rank % base) as usize;
        rank /= base;
    }
    if rank > 0 {
        return Err(PermutationError::RankOutOfRange { len });
    }
    Ok(place(c, &digits, is_less))
}

/// Rank of the current arrangement, the inverse of [`nth_permutation`].
pub fn permutation_rank<C>(c: C) -> Result<u64, PermutationError>
where
    C: ForwardCursor<Cardinality = Finite>,
    C::Item: PartialOrd,
{
    permutation_rank_by(c, |x, y| x < y)
}

pub fn permutation_rank_by<C>(
    c: C,
    is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> Result<u64, PermutationError>
where
    C: ForwardCursor<Cardinality = Finite>,
{
    let digits = factoradic(&c, is_less);
    let len = digits.len();
    digits.iter().enumerate().try_fold(0_u64, |rank, (i, &d)| {
        rank.checked_mul((len - i) as u64)
            .and_then(|r| r.checked_add(d as u64))
            .ok_or(PermutationError::RankOverflow { len })
    })
}

/// Sorts, then moves the `digits[i]`-th smallest remaining element to the
/// `i`-th place by rotating it over the sorted tail.
fn place<C>(
    mut c: C,
    digits: &[usize],
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> C
where
    C: RandomAccessCursor + CursorMut,
{
    let w = c.window();
    sort_by(&mut c, &mut is_less);
    let base = w.base();
    for (i, &d) in (w.front()..).zip(digits) {
        if d > 0 {
            // [i, i + d) ++ [i + d] => [i + d] ++ [i, i + d)
            c.reseat(Window::from_parts(i, i + d, i + d + 1, base.end));
            rotate(&mut c);
        }
    }
    c.reseat(Window::from_parts(base.start, w.back(), w.back(), base.end));
    c
}

/// The factorial-base digits of the current arrangement, most significant
/// first; the `i`-th counts the later elements less than the `i`-th.
fn factoradic<C: ForwardCursor>(
    c: &C,
    mut is_less: impl FnMut(&C::Item, &C::Item) -> bool,
) -> Vec<usize> {
    let w = c.window();
    w.visible()
        .map(|i| {
            (i + 1..w.back()).filter(|&j| is_less(c.at(j), c.at(i))).count()
        })
        .collect()
}

#[cfg(feature = "bigint")]
mod big {
    use cursor_core::{CursorMut, Finite, ForwardCursor, RandomAccessCursor};
    use num_bigint::BigUint;

    use crate::{factoradic, place, PermutationError};

    /// [`nth_permutation`](crate::nth_permutation) for ranks beyond `u64`.
    pub fn nth_permutation_big<C>(
        c: C,
        rank: &BigUint,
    ) -> Result<C, PermutationError>
    where
        C: RandomAccessCursor + CursorMut,
        C::Item: PartialOrd,
    {
        nth_permutation_big_by(c, rank, |x, y| x < y)
    }

    pub fn nth_permutation_big_by<C>(
        c: C,
        rank: &BigUint,
        is_less: impl FnMut(&C::Item, &C::Item) -> bool,
    ) -> Result<C, PermutationError>
    where
        C: RandomAccessCursor + CursorMut,
    {
        let len = c.len();
        let mut rank = rank.clone();
        let mut digits = vec![0; len];
        for (i, digit) in digits.iter_mut().enumerate().rev() {
            let base = BigUint::from(len - i);
            let d = &rank % &base;
            rank /= &base;
            // less than `base`, which is a usize
            *digit = d.iter_u64_digits().next().unwrap_or(0) as usize;
        }
        if rank.bits() > 0 {
            return Err(PermutationError::RankOutOfRange { len });
        }
        Ok(place(c, &digits, is_less))
    }

    /// [`permutation_rank`](crate::permutation_rank) without the `u64`
    /// limit.
    pub fn permutation_rank_big<C>(c: C) -> BigUint
    where
        C: ForwardCursor<Cardinality = Finite>,
        C::Item: PartialOrd,
    {
        permutation_rank_big_by(c, |x, y| x < y)
    }

    pub fn permutation_rank_big_by<C>(
        c: C,
        is_less: impl FnMut(&C::Item, &C::Item) -> bool,
    ) -> BigUint
    where
        C: ForwardCursor<Cardinality = Finite>,
    {
        let digits = factoradic(&c, is_less);
        let len = digits.len();
        digits.iter().enumerate().fold(BigUint::default(), |rank, (i, &d)| {
            rank * BigUint::from(len - i) + BigUint::from(d)
        })
    }
}

#[cfg(feature = "bigint")]
pub use big::*;
