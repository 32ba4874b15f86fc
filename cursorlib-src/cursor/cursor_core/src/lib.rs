//! Capabilities shared by every cursor.
//!
//! A cursor is a shrinkable view of a sequence. Input cursors only know
//! their front; multi-pass cursors also expose a [`Window`] describing
//! where they sit inside the sequence they were created from, which is what
//! lets algorithms work on a sub-window and recover the full range
//! afterwards.
//!
//! The category hierarchy is
//! [`Cursor`] ⊂ [`ForwardCursor`] ⊂ [`BidirectionalCursor`] ⊂
//! [`RandomAccessCursor`], plus [`CursorMut`] for writable storage and
//! [`OutputCursor`] for sinks.

mod window;

pub use window::Window;

pub trait Cardinality {}

/// The cursor reaches its end after finitely many steps.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Finite;

/// The cursor never becomes empty.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Infinite;

impl Cardinality for Finite {}
impl Cardinality for Infinite {}

pub trait Cursor {
    type Item;
    type Cardinality: Cardinality;

    fn is_empty(&self) -> bool;
    /// The element at the front.  The cursor must not be empty.
    fn front(&self) -> &Self::Item;
    /// Drops the front element.  The cursor must not be empty.
    fn pop_front(&mut self);

    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            debug_assert!(!self.is_empty());
            self.pop_front();
        }
    }
}

/// Multi-pass cursor backed by addressable storage.
///
/// Positions passed to [`at`](ForwardCursor::at) and windows passed to
/// [`reseat`](ForwardCursor::reseat) are absolute positions in that
/// storage; they must stay within the base the cursor was created with.
pub trait ForwardCursor: Cursor {
    fn window(&self) -> Window;
    fn reseat(&mut self, window: Window);
    fn at(&self, pos: usize) -> &Self::Item;

    fn position(&self) -> usize { self.window().front() }

    fn forget_front(&mut self) {
        let mut w = self.window();
        w.forget_front();
        self.reseat(w);
    }
    fn exhaust_front(&mut self) {
        let mut w = self.window();
        w.exhaust_front();
        self.reseat(w);
    }
    fn rewind_front(&mut self) {
        let mut w = self.window();
        w.rewind_front();
        self.reseat(w);
    }
    fn dropped_front(&self) -> Self
    where
        Self: Clone,
    {
        let mut res = self.clone();
        res.reseat(self.window().dropped_front());
        res
    }
    /// Joins two adjacent cursors over the same storage.
    fn splice(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        let mut res = self.clone();
        res.reseat(self.window().splice(other.window()));
        res
    }
}

pub trait BidirectionalCursor: ForwardCursor {
    fn back(&self) -> &Self::Item {
        let w = self.window();
        debug_assert!(!w.is_empty());
        self.at(w.back() - 1)
    }
    fn pop_back(&mut self) {
        let mut w = self.window();
        w.drop_back();
        self.reseat(w);
    }
    fn forget_back(&mut self) {
        let mut w = self.window();
        w.forget_back();
        self.reseat(w);
    }
    fn exhaust_back(&mut self) {
        let mut w = self.window();
        w.exhaust_back();
        self.reseat(w);
    }
    fn rewind_back(&mut self) {
        let mut w = self.window();
        w.rewind_back();
        self.reseat(w);
    }
    fn dropped_back(&self) -> Self
    where
        Self: Clone,
    {
        let mut res = self.clone();
        res.reseat(self.window().dropped_back());
        res
    }
}

pub trait RandomAccessCursor: BidirectionalCursor {
    fn len(&self) -> usize { self.window().len() }
    /// The `i`-th visible element, counted from the front.
    fn get(&self, i: usize) -> &Self::Item {
        let w = self.window();
        debug_assert!(i < w.len());
        self.at(w.front() + i)
    }
    fn drop_front_n(&mut self, n: usize) {
        let mut w = self.window();
        w.drop_front_n(n);
        self.reseat(w);
    }
    fn drop_back_n(&mut self, n: usize) {
        let mut w = self.window();
        w.drop_back_n(n);
        self.reseat(w);
    }
}

pub trait CursorMut: ForwardCursor {
    fn at_mut(&mut self, pos: usize) -> &mut Self::Item;
    fn swap_at(&mut self, a: usize, b: usize);

    fn front_mut(&mut self) -> &mut Self::Item {
        debug_assert!(!self.is_empty());
        let pos = self.position();
        self.at_mut(pos)
    }
    fn back_mut(&mut self) -> &mut Self::Item
    where
        Self: BidirectionalCursor,
    {
        let w = self.window();
        debug_assert!(!w.is_empty());
        self.at_mut(w.back() - 1)
    }
    fn get_mut(&mut self, i: usize) -> &mut Self::Item
    where
        Self: RandomAccessCursor,
    {
        let w = self.window();
        debug_assert!(i < w.len());
        self.at_mut(w.front() + i)
    }
    fn replace_at(&mut self, pos: usize, value: Self::Item) -> Self::Item {
        std::mem::replace(self.at_mut(pos), value)
    }
}

/// A sink: `put` writes at the current position and advances.
pub trait OutputCursor<T> {
    fn put(&mut self, value: T);
    /// Bounded sinks report when no more values fit.
    fn is_full(&self) -> bool { false }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;
    type Cardinality = C::Cardinality;
    fn is_empty(&self) -> bool { (**self).is_empty() }
    fn front(&self) -> &C::Item { (**self).front() }
    fn pop_front(&mut self) { (**self).pop_front() }
    fn advance_by(&mut self, n: usize) { (**self).advance_by(n) }
}

impl<C: ForwardCursor + ?Sized> ForwardCursor for &mut C {
    fn window(&self) -> Window { (**self).window() }
    fn reseat(&mut self, window: Window) { (**self).reseat(window) }
    fn at(&self, pos: usize) -> &C::Item { (**self).at(pos) }
}

impl<C: BidirectionalCursor + ?Sized> BidirectionalCursor for &mut C {}
impl<C: RandomAccessCursor + ?Sized> RandomAccessCursor for &mut C {}

impl<C: CursorMut + ?Sized> CursorMut for &mut C {
    fn at_mut(&mut self, pos: usize) -> &mut C::Item { (**self).at_mut(pos) }
    fn swap_at(&mut self, a: usize, b: usize) { (**self).swap_at(a, b) }
}

impl<T, O: OutputCursor<T> + ?Sized> OutputCursor<T> for &mut O {
    fn put(&mut self, value: T) { (**self).put(value) }
    fn is_full(&self) -> bool { (**self).is_full() }
}

impl<T> OutputCursor<T> for Vec<T> {
    fn put(&mut self, value: T) { self.push(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal arena-backed cursor to exercise the provided methods.
    #[derive(Clone)]
    struct Arena {
        buf: Vec<u32>,
        window: Window,
    }

    impl Cursor for Arena {
        type Item = u32;
        type Cardinality = Finite;
        fn is_empty(&self) -> bool { self.window.is_empty() }
        fn front(&self) -> &u32 { &self.buf[self.window.front()] }
        fn pop_front(&mut self) { self.window.drop_front() }
    }
    impl ForwardCursor for Arena {
        fn window(&self) -> Window { self.window }
        fn reseat(&mut self, window: Window) { self.window = window }
        fn at(&self, pos: usize) -> &u32 { &self.buf[pos] }
    }
    impl BidirectionalCursor for Arena {}
    impl RandomAccessCursor for Arena {}
    impl CursorMut for Arena {
        fn at_mut(&mut self, pos: usize) -> &mut u32 { &mut self.buf[pos] }
        fn swap_at(&mut self, a: usize, b: usize) { self.buf.swap(a, b) }
    }

    fn arena(n: u32) -> Arena {
        Arena { buf: (0..n).collect(), window: Window::new(0..n as usize) }
    }

    #[test]
    fn sanity_check() {
        let mut c = arena(6);
        c.advance_by(2);
        c.pop_back();
        assert_eq!(*c.front(), 2);
        assert_eq!(*c.back(), 4);
        assert_eq!(c.len(), 3);
        assert_eq!(*c.get(1), 3);

        let before = c.dropped_front();
        assert_eq!(before.window().visible(), 0..2);
        let after = c.dropped_back();
        assert_eq!(after.window().visible(), 5..6);

        let whole = before.splice(&c).splice(&after);
        assert_eq!(whole.window(), Window::new(0..6));
    }

    #[test]
    fn mutation_through_reborrow() {
        let mut c = arena(4);
        {
            let mut r = &mut c;
            r.pop_front();
            *r.front_mut() = 10;
            *r.back_mut() = 30;
            r.swap_at(0, 1);
        }
        assert_eq!(c.buf, [10, 0, 2, 30]);
        assert_eq!(c.position(), 1);
        assert_eq!(c.replace_at(2, 7), 2);
        c.rewind_front();
        assert_eq!(c.len(), 4);
    }

    #[test]
    fn vec_is_unbounded_sink() {
        let mut out = vec![];
        {
            let mut sink = &mut out;
            sink.put(1);
            sink.put(2);
            assert!(!sink.is_full());
        }
        assert_eq!(out, [1, 2]);
    }
}
