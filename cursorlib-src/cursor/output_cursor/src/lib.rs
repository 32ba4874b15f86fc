//! Sinks for algorithms that write their results out.

use std::marker::PhantomData;

use cursor_core::OutputCursor;

pub fn output_fn<T, F: FnMut(T)>(f: F) -> FnOutput<F, T> {
    FnOutput { f, _marker: PhantomData }
}

pub fn back_inserter<E>(collection: &mut E) -> BackInserter<'_, E> {
    BackInserter { collection }
}

/// Calls a closure for every value written.
pub struct FnOutput<F, T> {
    f: F,
    _marker: PhantomData<fn(T)>,
}

impl<F, T> FnOutput<F, T> {
    pub fn into_inner(self) -> F { self.f }
}

impl<T, F: FnMut(T)> OutputCursor<T> for FnOutput<F, T> {
    fn put(&mut self, value: T) { (self.f)(value) }
}

/// Appends to any collection implementing [`Extend`].
pub struct BackInserter<'a, E> {
    collection: &'a mut E,
}

impl<T, E: Extend<T>> OutputCursor<T> for BackInserter<'_, E> {
    fn put(&mut self, value: T) { self.collection.extend(Some(value)) }
}

/// Drops everything, keeping only a count.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Discard {
    count: usize,
}

impl Discard {
    pub fn new() -> Self { Self::default() }
    pub fn count(&self) -> usize { self.count }
}

impl<T> OutputCursor<T> for Discard {
    fn put(&mut self, _: T) { self.count += 1 }
}
