//! Single-pass input cursors.
//!
//! These hold the current element by value, so [`Cursor::front`] hands out a
//! reference into the cursor itself.

use std::ops::AddAssign;

use cursor_core::{Cursor, Finite, Infinite};

pub fn from_iter<I: IntoIterator>(iter: I) -> IterCursor<I::IntoIter> {
    IterCursor::new(iter.into_iter())
}

pub fn generate<T, F: FnMut() -> T>(mut f: F) -> Generated<F, T> {
    let current = f();
    Generated { f, current }
}

pub fn iota<T: From<u8>>(start: T) -> Iota<T> {
    Iota { current: start, step: T::from(1) }
}

pub fn iota_step<T>(start: T, step: T) -> Iota<T> {
    Iota { current: start, step }
}

pub fn take<C: Cursor>(cursor: C, n: usize) -> Taken<C> {
    Taken { inner: cursor, remaining: n }
}

/// Finite cursor over an iterator of unknown length.
pub struct IterCursor<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
    pub fn new(mut iter: I) -> Self {
        let current = iter.next();
        Self { iter, current }
    }
    /// The current element followed by whatever the iterator still holds.
    pub fn into_rest(self) -> impl Iterator<Item = I::Item> {
        self.current.into_iter().chain(self.iter)
    }
}

impl<I: Iterator + Clone> Clone for IterCursor<I>
where
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self { iter: self.iter.clone(), current: self.current.clone() }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;
    type Cardinality = Finite;
    fn is_empty(&self) -> bool { self.current.is_none() }
    fn front(&self) -> &I::Item {
        match &self.current {
            Some(x) => x,
            None => panic!("front() on an exhausted cursor"),
        }
    }
    fn pop_front(&mut self) {
        debug_assert!(self.current.is_some());
        self.current = self.iter.next();
    }
}

/// Infinite cursor whose elements come from a generator.
pub struct Generated<F, T> {
    f: F,
    current: T,
}

impl<T, F: FnMut() -> T> Cursor for Generated<F, T> {
    type Item = T;
    type Cardinality = Infinite;
    fn is_empty(&self) -> bool { false }
    fn front(&self) -> &T { &self.current }
    fn pop_front(&mut self) { self.current = (self.f)() }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Iota<T> {
    current: T,
    step: T,
}

impl<T: AddAssign + Clone> Cursor for Iota<T> {
    type Item = T;
    type Cardinality = Infinite;
    fn is_empty(&self) -> bool { false }
    fn front(&self) -> &T { &self.current }
    fn pop_front(&mut self) { self.current += self.step.clone() }
}

/// At most `n` leading elements of another cursor.
#[derive(Clone, Debug)]
pub struct Taken<C> {
    inner: C,
    remaining: usize,
}

impl<C> Taken<C> {
    pub fn remaining(&self) -> usize { self.remaining }
    /// After the last of the `n` elements is dropped, the inner cursor still
    /// sits on it.
    pub fn into_inner(self) -> C { self.inner }
}

impl<C: Cursor> Cursor for Taken<C> {
    type Item = C::Item;
    type Cardinality = Finite;
    fn is_empty(&self) -> bool { self.remaining == 0 || self.inner.is_empty() }
    fn front(&self) -> &C::Item { self.inner.front() }
    fn pop_front(&mut self) {
        debug_assert!(self.remaining > 0);
        self.remaining -= 1;
        if self.remaining > 0 {
            self.inner.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<C: Cursor>(mut c: C) -> Vec<C::Item>
    where
        C::Item: Clone,
    {
        let mut res = vec![];
        while !c.is_empty() {
            res.push(c.front().clone());
            c.pop_front();
        }
        res
    }

    #[test]
    fn sanity_check() {
        let c = from_iter("abc".chars());
        assert_eq!(drain(c), ['a', 'b', 'c']);

        let empty = from_iter(Vec::<i32>::new());
        assert!(empty.is_empty());

        let mut c = from_iter(1..5);
        c.advance_by(2);
        assert_eq!(c.into_rest().collect::<Vec<_>>(), [3, 4]);
    }

    #[test]
    fn infinite() {
        let c = take(iota(5_u32), 4);
        assert_eq!(drain(c), [5, 6, 7, 8]);

        let c = take(iota_step(1.0_f64, 0.5), 3);
        assert_eq!(drain(c), [1.0, 1.5, 2.0]);

        let mut state = 1_u64;
        let c = generate(|| {
            let res = state;
            state *= 3;
            res
        });
        assert_eq!(drain(take(c, 5)), [1, 3, 9, 27, 81]);
    }

    #[test]
    fn taken_stops_with_inner() {
        let t = take(from_iter([1, 2]), 10);
        assert_eq!(t.remaining(), 10);
        assert_eq!(drain(t), [1, 2]);

        let mut t = take(iota(0_i32), 3);
        t.pop_front();
        assert_eq!(t.remaining(), 2);
        let inner = t.into_inner();
        assert_eq!(*inner.front(), 1);
    }

    #[test]
    fn taken_stops_before_overflow() {
        let c = take(iota(250_u8), 6);
        assert_eq!(drain(c), [250, 251, 252, 253, 254, 255]);

        let mut t = take(iota(255_u8), 1);
        t.pop_front();
        assert!(t.is_empty());
        assert_eq!(*t.into_inner().front(), 255);

        let mut calls = 0;
        let c = generate(|| {
            calls += 1;
            calls
        });
        assert_eq!(drain(take(c, 3)), [1, 2, 3]);
        assert_eq!(calls, 3);
    }
}
